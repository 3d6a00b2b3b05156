use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, predict::client::UploadedImage, state::AppState};

pub const NO_FILE: &str = "No file uploaded";
pub const UNREADABLE_FILE: &str = "Unable to read uploaded file";

pub fn predict_routes(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict))
        .layer(DefaultBodyLimit::max(upload_limit))
}

/// POST /predict (multipart, field `file`)
#[instrument(skip(state, mp))]
pub async fn predict(
    State(state): State<AppState>,
    mp: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Map<String, Value>>), ApiError> {
    let mut mp = mp.map_err(|e| {
        warn!(error = %e, "not a multipart request");
        ApiError::validation(NO_FILE)
    })?;

    let image = match read_file_field(&mut mp).await? {
        Some(image) if !image.bytes.is_empty() => image,
        _ => return Err(ApiError::validation(NO_FILE)),
    };

    info!(
        filename = %image.resolved_filename(),
        size = image.bytes.len(),
        upstream = %state.inference.url(),
        "forwarding upload to inference service"
    );
    let (status, payload) = state.inference.predict(&image).await?;
    Ok((status, Json(payload)))
}

async fn read_file_field(mp: &mut Multipart) -> Result<Option<UploadedImage>, ApiError> {
    loop {
        let field = match mp.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "multipart stream unreadable");
                return Err(ApiError::validation(UNREADABLE_FILE));
            }
        };
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read uploaded file");
            ApiError::validation(UNREADABLE_FILE)
        })?;
        return Ok(Some(UploadedImage {
            bytes,
            filename,
            content_type,
        }));
    }
}
