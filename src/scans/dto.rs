use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScanRequest {
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub disease: Option<String>,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub confidence: Option<String>,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "string_or_scalar")]
    pub treatment: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub deleted: i64,
}

/// Accepts `"0.91"` as well as `0.91` or `true`; scalars keep their JSON text.
fn string_or_scalar<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(Option::<Loose>::deserialize(de)?.map(|v| match v {
        Loose::Text(s) => s,
        Loose::Number(n) => n.to_string(),
        Loose::Bool(b) => b.to_string(),
    }))
}
