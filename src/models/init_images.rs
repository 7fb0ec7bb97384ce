use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{parse_presigned_fields, IdRef, PresignedUpload};
use crate::errors::Result;
use crate::timestamp::Timestamp;

/// POST /init-image payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadInitImageRequest {
    pub image_file: String,
    /// File extension without the dot, for a presigned upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// POST /init-image response.
///
/// Depending on the request the service either registers the image
/// directly (`upload_init_image_id`) or hands back a presigned target.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadInitImageResponse {
    pub upload_init_image_id: Option<String>,
    pub message: Option<String>,
    pub upload_init_image: Option<PresignedUpload>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// GET /init-image/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GetInitImageResponse {
    pub init_images_by_pk: Option<InitImage>,
}

/// DELETE /init-image/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteInitImageResponse {
    pub delete_init_images_by_pk: Option<IdRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCanvasInitAndMaskImageRequest {
    pub init_extension: String,
    pub mask_extension: String,
}

/// Presigned targets for a canvas init image and its mask.
///
/// `init_fields` and `mask_fields` are JSON-encoded strings; decode them with
/// [`CanvasUpload::init_form_fields`] and [`CanvasUpload::mask_form_fields`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasUpload {
    pub init_fields: Option<String>,
    pub init_image_id: Option<String>,
    pub init_key: Option<String>,
    pub init_url: Option<String>,
    pub mask_fields: Option<String>,
    pub mask_image_id: Option<String>,
    pub mask_key: Option<String>,
    pub mask_url: Option<String>,
}

impl CanvasUpload {
    pub fn init_form_fields(&self) -> Result<HashMap<String, String>> {
        parse_presigned_fields(self.init_fields.as_deref().unwrap_or("{}"))
    }

    pub fn mask_form_fields(&self) -> Result<HashMap<String, String>> {
        parse_presigned_fields(self.mask_fields.as_deref().unwrap_or("{}"))
    }
}

/// POST /canvas-init-image response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadCanvasInitAndMaskImageResponse {
    pub upload_canvas_init_image: Option<CanvasUpload>,
}
