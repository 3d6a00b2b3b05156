use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Role assigned to every self-registered account.
pub const DEFAULT_ROLE: &str = "FARMER";

/// User record in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // store-assigned id
    pub email: String,              // unique, compared as stored
    #[serde(skip_serializing)]
    pub password: String,           // stored as submitted
    pub role: String,
    pub name: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Fields the store needs to create a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: String,
    pub name: Option<String>,
}
