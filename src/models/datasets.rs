use serde::{Deserialize, Serialize};

use super::common::{IdRef, PresignedUpload};
use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDatasetRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateDatasetRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// POST /datasets response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateDatasetResponse {
    pub insert_datasets_one: IdRef,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(rename = "dataset_images", deserialize_with = "super::common::null_as_empty")]
    pub dataset_images: Vec<DatasetImage>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// GET /datasets/{id} response. `None` when the dataset does not exist.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GetDatasetResponse {
    pub datasets_by_pk: Option<Dataset>,
}

/// DELETE /datasets/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteDatasetResponse {
    pub delete_datasets_by_pk: Option<IdRef>,
}

/// Request a presigned target for a new dataset image.
#[derive(Debug, Clone, Serialize)]
pub struct UploadDatasetImageRequest {
    /// File extension without the dot, e.g. `png`.
    pub extension: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadDatasetImageResponse {
    pub upload_dataset_image: Option<PresignedUpload>,
}

/// Copy an already generated image into a dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadGeneratedImageRequest {
    pub generated_image_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadGeneratedImageResponse {
    pub upload_dataset_image_from_gen: Option<IdRef>,
}
