use serde::{Deserialize, Serialize};

/// A public element (LoRA) usable in generations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lora {
    #[serde(rename = "akUUID")]
    pub ak_uuid: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_model: Option<String>,
    pub creator_name: Option<String>,
    pub url_image: Option<String>,
    pub weight_default: Option<f64>,
    pub weight_max: Option<f64>,
    pub weight_min: Option<f64>,
}

/// GET /elements response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ListElementsResponse {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub loras: Vec<Lora>,
}
