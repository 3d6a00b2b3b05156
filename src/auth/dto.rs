use serde::Deserialize;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Accepted for compatibility, always overridden.
    #[serde(default)]
    pub role: Option<String>,
}
