use crate::client::{escape_path_segment, Client};
use crate::errors::Result;
use crate::models::{
    CreateDatasetRequest, CreateDatasetResponse, DeleteDatasetResponse, GetDatasetResponse,
    UploadDatasetImageRequest, UploadDatasetImageResponse, UploadGeneratedImageRequest,
    UploadGeneratedImageResponse,
};

impl Client {
    /// Create a new dataset for custom model training.
    pub async fn create_dataset(&self, req: &CreateDatasetRequest) -> Result<CreateDatasetResponse> {
        self.post("/datasets", req).await
    }

    /// Fetch a dataset and its images.
    pub async fn get_dataset(&self, id: &str) -> Result<GetDatasetResponse> {
        self.get(&format!("/datasets/{}", escape_path_segment(id)))
            .await
    }

    pub async fn delete_dataset(&self, id: &str) -> Result<DeleteDatasetResponse> {
        self.delete(&format!("/datasets/{}", escape_path_segment(id)))
            .await
    }

    /// Request a presigned target for adding an image to a dataset.
    ///
    /// The API only hands out the upload target; send the bytes with
    /// [`Client::upload_to_presigned_url`].
    pub async fn upload_dataset_image(
        &self,
        dataset_id: &str,
        req: &UploadDatasetImageRequest,
    ) -> Result<UploadDatasetImageResponse> {
        let path = format!("/datasets/{}/upload", escape_path_segment(dataset_id));
        self.post(&path, req).await
    }

    /// Copy a previously generated image into a dataset.
    pub async fn upload_generated_image_to_dataset(
        &self,
        dataset_id: &str,
        req: &UploadGeneratedImageRequest,
    ) -> Result<UploadGeneratedImageResponse> {
        let path = format!("/datasets/{}/upload/gen", escape_path_segment(dataset_id));
        self.post(&path, req).await
    }
}
