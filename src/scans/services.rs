use time::OffsetDateTime;

use crate::error::ApiError;
use crate::scans::{dto::CreateScanRequest, repo_types::NewScan};

pub const RECENT_LIMIT: i64 = 50;
pub const REQUIRED_FIELDS: &str = "disease, confidence, and severity are required";
pub const UNKNOWN_FILE: &str = "unknown-file";
pub const NO_TREATMENT: &str = "No treatment guidance available";

/// Validate a create request and fill in defaults. `now` stamps records sent without `createdAt`.
pub fn normalize(req: CreateScanRequest, now: OffsetDateTime) -> Result<NewScan, ApiError> {
    let (Some(disease), Some(confidence), Some(severity)) = (
        non_blank(req.disease),
        non_blank(req.confidence),
        non_blank(req.severity),
    ) else {
        return Err(ApiError::validation(REQUIRED_FIELDS));
    };

    Ok(NewScan {
        file_name: non_blank(req.file_name).unwrap_or_else(|| UNKNOWN_FILE.to_string()),
        disease,
        confidence,
        severity,
        treatment: non_blank(req.treatment).unwrap_or_else(|| NO_TREATMENT.to_string()),
        created_at: req.created_at.unwrap_or(now),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
