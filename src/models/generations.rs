use serde::{Deserialize, Serialize};

use super::common::IdRef;
use super::enums::{CanvasRequestType, GenerationStatus, PresetStyle, Scheduler, SdVersion, TransformType};
use super::elements::Lora;
use crate::timestamp::Timestamp;

/// POST /generations payload. Only `prompt` is required.
///
/// Use [`CreateGenerationRequest::new`] and fill in the options you need:
///
/// ```
/// use leonardo::{CreateGenerationRequest, PresetStyle};
///
/// let req = CreateGenerationRequest {
///     num_images: Some(2),
///     preset_style: Some(PresetStyle::Cinematic),
///     ..CreateGenerationRequest::new("a serene beach at sunset")
/// };
/// assert_eq!(req.prompt, "a serene beach at sunset");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGenerationRequest {
    pub prompt: String,

    #[serde(rename = "negative_prompt", skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    /// Defaults to the service's default model when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(rename = "num_images", skip_serializing_if = "Option::is_none")]
    pub num_images: Option<u32>,
    /// 32-1024.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// 1-20.
    #[serde(rename = "guidance_scale", skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<u32>,
    /// 10-60.
    #[serde(rename = "num_inference_steps", skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Scheduler>,
    #[serde(rename = "sd_version", skip_serializing_if = "Option::is_none")]
    pub sd_version: Option<SdVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_style: Option<PresetStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiling: Option<bool>,
    /// `disabled` or `foreground_only`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alchemy: Option<bool>,
    /// 0.1-1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded_domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fantasy_avatar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_resolution: Option<bool>,
    /// Requires alchemy off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultra: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt_weight: Option<f64>,
    #[serde(rename = "init_generation_image_id", skip_serializing_if = "Option::is_none")]
    pub init_generation_image_id: Option<String>,
    #[serde(rename = "init_image_id", skip_serializing_if = "Option::is_none")]
    pub init_image_id: Option<String>,
    #[serde(rename = "init_strength", skip_serializing_if = "Option::is_none")]
    pub init_strength: Option<f64>,

    /// Requires alchemy on and no `model_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_real: Option<bool>,
    /// `v1` or `v2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_real_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_real_strength: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_magic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_magic_strength: Option<f64>,
    /// `v2` or `v3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_magic_version: Option<String>,

    /// Requires `unzoom_amount` and `init_image_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unzoom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unzoom_amount: Option<u32>,
    /// Enterprise accounts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscale_ratio: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_request_type: Option<CanvasRequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_init_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_mask_id: Option<String>,
}

impl CreateGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Job handle returned when a generation is queued.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationJob {
    pub generation_id: Option<String>,
    pub api_credit_cost: Option<u64>,
}

/// POST /generations response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateGenerationResponse {
    pub sd_generation_job: GenerationJob,
}

/// A generation as returned by GET /generations/{id}.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Generation {
    pub id: Option<String>,
    pub status: Option<GenerationStatus>,
    pub created_at: Option<Timestamp>,
    pub prompt: Option<String>,
    pub negative_prompt: Option<String>,
    pub model_id: Option<String>,
    #[serde(rename = "imageWidth")]
    pub width: Option<u32>,
    #[serde(rename = "imageHeight")]
    pub height: Option<u32>,
    #[serde(rename = "inferenceSteps")]
    pub num_inference_steps: Option<u32>,
    pub seed: Option<i64>,
    pub scheduler: Option<Scheduler>,
    pub sd_version: Option<SdVersion>,
    pub preset_style: Option<PresetStyle>,
    pub public: Option<bool>,
    pub ultra: Option<bool>,
    pub photo_real: Option<bool>,
    pub photo_real_strength: Option<f64>,
    pub prompt_magic: Option<bool>,
    pub prompt_magic_strength: Option<f64>,
    pub prompt_magic_version: Option<String>,
    #[serde(
        rename = "generation_elements",
        deserialize_with = "super::common::null_as_empty"
    )]
    pub generation_elements: Vec<GenerationElement>,
    #[serde(
        rename = "generated_images",
        deserialize_with = "super::common::null_as_empty"
    )]
    pub generated_images: Vec<GeneratedImage>,
}

impl Generation {
    /// `true` once the job has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        self.status.is_some_and(|s| s.is_terminal())
    }
}

/// An element (LoRA) applied to a generation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationElement {
    pub id: Option<String>,
    pub lora: Option<Lora>,
    pub weight_applied: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub nsfw: Option<bool>,
    pub like_count: Option<u64>,
    pub fantasy_avatar: Option<bool>,
    pub image_to_video: Option<bool>,
    pub motion: Option<bool>,
    pub motion_model: Option<String>,
    #[serde(rename = "motionMP4Url")]
    pub motion_mp4_url: Option<String>,
    pub motion_strength: Option<u32>,
    #[serde(
        rename = "generated_image_variation_generics",
        deserialize_with = "super::common::null_as_empty"
    )]
    pub variations: Vec<ImageVariation>,
}

/// A post-processed variant of a generated image.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageVariation {
    pub id: Option<String>,
    pub status: Option<GenerationStatus>,
    pub transform_type: Option<TransformType>,
    pub url: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// GET /generations/{id} response. `None` when the generation does not exist.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GetGenerationResponse {
    pub generations_by_pk: Option<Generation>,
}

/// GET /generations/user/{userId} response.
///
/// Listed generations carry a subset of the [`Generation`] fields; the rest
/// are `None`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ListGenerationsResponse {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub generations: Vec<Generation>,
}

/// DELETE /generations/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteGenerationResponse {
    pub delete_generations_by_pk: Option<IdRef>,
}
