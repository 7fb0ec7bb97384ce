use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{parse_presigned_fields, IdRef};
use crate::errors::Result;
use crate::timestamp::Timestamp;

/// POST /generations-texture payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTextureGenerationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(rename = "negative_prompt", skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(rename = "front_rotation_offset", skip_serializing_if = "Option::is_none")]
    pub front_rotation_offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<bool>,
    #[serde(rename = "preview_direction", skip_serializing_if = "Option::is_none")]
    pub preview_direction: Option<String>,
    #[serde(rename = "sd_version", skip_serializing_if = "Option::is_none")]
    pub sd_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextureGenerationJob {
    pub id: Option<String>,
    pub api_credit_cost: Option<u64>,
}

/// POST /generations-texture response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTextureGenerationResponse {
    pub texture_generation_job: TextureGenerationJob,
}

/// POST /models-3d/upload payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Upload3dModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// e.g. `obj`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_extension: Option<String>,
}

/// Presigned target for a 3D model file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelAssetUpload {
    /// JSON-encoded form fields; see [`ModelAssetUpload::form_fields`].
    pub model_fields: Option<String>,
    pub model_id: Option<String>,
    pub model_key: Option<String>,
    pub model_url: Option<String>,
}

impl ModelAssetUpload {
    pub fn form_fields(&self) -> Result<HashMap<String, String>> {
        parse_presigned_fields(self.model_fields.as_deref().unwrap_or("{}"))
    }
}

/// POST /models-3d/upload response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Upload3dModelResponse {
    pub upload_model_asset: Option<ModelAssetUpload>,
}

/// An uploaded 3D model. Listings omit `description`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelAsset {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub mesh_url: Option<String>,
    pub user_id: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// GET /models-3d/user/{userId} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ListModelAssetsResponse {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub model_assets: Vec<ModelAsset>,
}

/// GET /models-3d/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GetModelAssetResponse {
    pub model_assets_by_pk: Option<ModelAsset>,
}

/// DELETE /models-3d/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteModelAssetResponse {
    pub delete_model_assets_by_pk: Option<IdRef>,
}
