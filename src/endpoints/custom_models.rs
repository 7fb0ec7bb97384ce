use crate::client::{escape_path_segment, Client, Pagination};
use crate::errors::Result;
use crate::models::{
    DeleteCustomModelResponse, GetCustomModelResponse, ListPlatformModelsResponse,
    TrainCustomModelRequest, TrainCustomModelResponse, UpdateCustomModelRequest,
    UpdateCustomModelResponse,
};

impl Client {
    /// Start training a custom model on a dataset.
    pub async fn train_custom_model(
        &self,
        req: &TrainCustomModelRequest,
    ) -> Result<TrainCustomModelResponse> {
        self.post("/models", req).await
    }

    pub async fn get_custom_model(&self, id: &str) -> Result<GetCustomModelResponse> {
        self.get(&format!("/models/{}", escape_path_segment(id)))
            .await
    }

    /// Rename a custom model or change its description.
    pub async fn update_custom_model(
        &self,
        id: &str,
        req: &UpdateCustomModelRequest,
    ) -> Result<UpdateCustomModelResponse> {
        self.put(&format!("/models/{}", escape_path_segment(id)), req)
            .await
    }

    pub async fn delete_custom_model(&self, id: &str) -> Result<DeleteCustomModelResponse> {
        self.delete(&format!("/models/{}", escape_path_segment(id)))
            .await
    }

    /// List the models provided by the platform.
    pub async fn list_platform_models(&self, page: Pagination) -> Result<ListPlatformModelsResponse> {
        self.get(&format!("/platformModels{}", page.query())).await
    }
}
