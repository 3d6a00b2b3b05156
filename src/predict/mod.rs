pub mod client;
pub mod handlers;

use crate::state::AppState;
use axum::Router;

pub fn router(upload_limit: usize) -> Router<AppState> {
    handlers::predict_routes(upload_limit)
}
