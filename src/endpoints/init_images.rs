use crate::client::{escape_path_segment, Client};
use crate::errors::Result;
use crate::models::{
    DeleteInitImageResponse, GetInitImageResponse, UploadCanvasInitAndMaskImageRequest,
    UploadCanvasInitAndMaskImageResponse, UploadInitImageRequest, UploadInitImageResponse,
};

impl Client {
    /// Register an init image for image-to-image generations.
    pub async fn upload_init_image(
        &self,
        req: &UploadInitImageRequest,
    ) -> Result<UploadInitImageResponse> {
        self.post("/init-image", req).await
    }

    pub async fn get_init_image(&self, id: &str) -> Result<GetInitImageResponse> {
        self.get(&format!("/init-image/{}", escape_path_segment(id)))
            .await
    }

    pub async fn delete_init_image(&self, id: &str) -> Result<DeleteInitImageResponse> {
        self.delete(&format!("/init-image/{}", escape_path_segment(id)))
            .await
    }

    /// Request presigned targets for a canvas init image and its mask.
    pub async fn upload_canvas_init_and_mask_image(
        &self,
        req: &UploadCanvasInitAndMaskImageRequest,
    ) -> Result<UploadCanvasInitAndMaskImageResponse> {
        self.post("/canvas-init-image", req).await
    }
}
