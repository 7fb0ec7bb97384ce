//! Realtime canvas (LCM) payloads.
//!
//! Images travel inline as base64 data URLs in both directions.

use serde::{Deserialize, Serialize};

/// Payload for POST /generations-lcm and POST /lcm-instant-refine.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LcmGenerationRequest {
    pub image_data_url: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refine_creative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refine_strength: Option<f64>,
    /// Echoed back in the response so callers can match replies to requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timestamp: Option<String>,
}

/// POST /lcm-inpainting payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LcmInpaintingRequest {
    pub image_data_url: String,
    pub mask_data_url: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timestamp: Option<String>,
}

/// POST /lcm-upscale payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LcmUpscaleRequest {
    pub image_data_url: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LcmGenerationJob {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub image_data_url: Vec<String>,
    pub request_timestamp: Option<String>,
    pub api_credit_cost: Option<u64>,
}

/// Response of the LCM generate, instant refine and inpainting endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LcmGenerationResponse {
    pub lcm_generation_job: Option<LcmGenerationJob>,
}

/// Alchemy upscale also persists its output as a generation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LcmUpscaleJob {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub image_data_url: Vec<String>,
    pub generated_image_id: Option<String>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub generation_id: Vec<String>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub variation_id: Vec<String>,
    pub request_timestamp: Option<String>,
    pub api_credit_cost: Option<u64>,
}

/// POST /lcm-upscale response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LcmUpscaleResponse {
    pub lcm_generation_job: Option<LcmUpscaleJob>,
}
