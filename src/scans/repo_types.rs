use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Stored scan record, as returned by the list and create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistory {
    pub id: Uuid,
    pub file_name: String,
    pub disease: String,
    pub confidence: String,
    pub severity: String,
    pub treatment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A validated scan ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScan {
    pub file_name: String,
    pub disease: String,
    pub confidence: String,
    pub severity: String,
    pub treatment: String,
    pub created_at: OffsetDateTime,
}
