use serde::{Deserialize, Serialize};

use super::enums::{GenerationStatus, TransformType};
use super::generations::GenerationJob;
use crate::timestamp::Timestamp;

/// Target image for unzoom, upscale and background removal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationRequest {
    /// Generated image id, or variation id when `is_variation` is set.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_variation: Option<bool>,
}

impl VariationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_variation: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariationJob {
    pub id: Option<String>,
    pub api_credit_cost: Option<u64>,
}

/// POST /variations/unzoom response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnzoomVariationResponse {
    pub sd_unzoom_job: VariationJob,
}

/// POST /variations/upscale response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpscaleVariationResponse {
    pub sd_upscale_job: VariationJob,
}

/// POST /variations/nobg response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoBackgroundVariationResponse {
    pub sd_nobg_job: VariationJob,
}

#[derive(Debug, Clone, Serialize)]
pub struct UniversalUpscalerRequest {
    pub image_url: String,
    pub scale_factor: u32,
}

/// POST /variations/universal-upscaler response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UniversalUpscalerResponse {
    pub upscaled_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariationDetail {
    pub id: Option<String>,
    pub status: Option<GenerationStatus>,
    pub transform_type: Option<TransformType>,
    pub url: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// GET /variations/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GetVariationResponse {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub generated_image_variation_generic: Vec<VariationDetail>,
}

/// POST /generations-motion-svd payload.
///
/// Every field is optional on the wire; an empty request serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_init_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_variation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// 1-10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion_strength: Option<u32>,
}

/// POST /generations-motion-svd response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionGenerationResponse {
    pub generation_id: Option<String>,
    pub status: Option<String>,
    pub details: Option<serde_json::Map<String, serde_json::Value>>,
    pub motion_svd_generation_job: Option<GenerationJob>,
}
