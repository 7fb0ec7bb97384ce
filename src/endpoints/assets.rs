use crate::client::{escape_path_segment, Client, Pagination};
use crate::errors::Result;
use crate::models::{
    CreateTextureGenerationRequest, CreateTextureGenerationResponse, DeleteModelAssetResponse,
    GetModelAssetResponse, ListModelAssetsResponse, Upload3dModelRequest, Upload3dModelResponse,
};

impl Client {
    /// Generate a texture for an uploaded 3D model.
    pub async fn create_texture_generation(
        &self,
        req: &CreateTextureGenerationRequest,
    ) -> Result<CreateTextureGenerationResponse> {
        self.post("/generations-texture", req).await
    }

    /// Request a presigned target for a 3D model file.
    pub async fn upload_3d_model(&self, req: &Upload3dModelRequest) -> Result<Upload3dModelResponse> {
        self.post("/models-3d/upload", req).await
    }

    pub async fn get_3d_model(&self, id: &str) -> Result<GetModelAssetResponse> {
        self.get(&format!("/models-3d/{}", escape_path_segment(id)))
            .await
    }

    pub async fn list_3d_models_by_user(
        &self,
        user_id: &str,
        page: Pagination,
    ) -> Result<ListModelAssetsResponse> {
        let path = format!(
            "/models-3d/user/{}{}",
            escape_path_segment(user_id),
            page.query()
        );
        self.get(&path).await
    }

    pub async fn delete_3d_model(&self, id: &str) -> Result<DeleteModelAssetResponse> {
        self.delete(&format!("/models-3d/{}", escape_path_segment(id)))
            .await
    }
}
