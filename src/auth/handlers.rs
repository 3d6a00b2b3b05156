use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{
        dto::RegisterRequest,
        services::{register_user, Registration},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/register", post(register))
}

/// Both outcomes answer 200 with a plain-text message; a taken email is not an error status.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(payload) = payload?;
    let outcome = register_user(state.users.as_ref(), payload).await?;
    match &outcome {
        Registration::Created(user) => {
            info!(user_id = %user.id, "user registered");
            debug!(user_id = %user.id, email = %user.email, "registered email");
        }
        Registration::EmailTaken => warn!("email already registered"),
    }
    Ok(outcome.message())
}
