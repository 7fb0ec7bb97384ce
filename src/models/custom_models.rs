use serde::{Deserialize, Serialize};

use super::common::IdRef;
use crate::timestamp::Timestamp;

/// POST /models payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainCustomModelRequest {
    pub name: String,
    pub dataset_id: String,
    #[serde(rename = "instance_prompt")]
    pub instance_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// e.g. `GENERAL`, `CHARACTERS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u32>,
    #[serde(rename = "sd_Version", skip_serializing_if = "Option::is_none")]
    pub sd_version: Option<String>,
    /// `VERY_LOW`, `LOW`, `MEDIUM` or `HIGH`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainingJob {
    pub custom_model_id: Option<String>,
    pub api_credit_cost: Option<u64>,
}

/// POST /models response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainCustomModelResponse {
    pub sd_training_job: TrainingJob,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub instance_prompt: Option<String>,
    pub model_height: Option<u32>,
    pub model_width: Option<u32>,
    pub public: Option<bool>,
    pub sd_version: Option<String>,
    /// Training status, e.g. `PENDING` or `COMPLETE`.
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// GET /models/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GetCustomModelResponse {
    pub custom_models_by_pk: Option<CustomModel>,
}

/// DELETE /models/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteCustomModelResponse {
    pub delete_custom_models_by_pk: Option<IdRef>,
}

/// PUT /models/{id} payload; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdatedCustomModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// PUT /models/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateCustomModelResponse {
    pub updated_custom_models_by_pk: Option<UpdatedCustomModel>,
}

/// A platform-provided model.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformModel {
    pub id: Option<String>,
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

/// GET /platformModels response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ListPlatformModelsResponse {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub custom_models: Vec<PlatformModel>,
}
