use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{LeonardoError, Result};

/// `{ "id": ... }`, the body of most create and delete mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IdRef {
    pub id: Option<String>,
}

/// Presigned object-storage target returned by the upload endpoints.
///
/// POST `fields` as multipart form fields alongside the file to `url`; see
/// [`upload_to_presigned_url`](crate::upload_to_presigned_url).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PresignedUpload {
    #[serde(deserialize_with = "fields_map_or_json")]
    pub fields: HashMap<String, String>,
    /// Identifier of the resource the upload will back.
    pub id: Option<String>,
    pub key: Option<String>,
    pub url: Option<String>,
}

/// Decode a presigned field set that arrives as a JSON-encoded string.
///
/// Several endpoints (`init-image`, `canvas-init-image`, `models-3d/upload`)
/// return the form fields as a string rather than an object.
pub fn parse_presigned_fields(raw: &str) -> Result<HashMap<String, String>> {
    serde_json::from_str(raw).map_err(|source| LeonardoError::Decoding {
        status: 200,
        source,
    })
}

/// Decode a response array that the service may send as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accept the field map either as an object or as a JSON string holding one.
fn fields_map_or_json<'de, D>(deserializer: D) -> std::result::Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Fields {
        Map(HashMap<String, String>),
        Encoded(String),
    }

    match Option::<Fields>::deserialize(deserializer)? {
        Some(Fields::Map(map)) => Ok(map),
        Some(Fields::Encoded(raw)) => serde_json::from_str(&raw).map_err(serde::de::Error::custom),
        None => Ok(HashMap::new()),
    }
}
