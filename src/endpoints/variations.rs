use crate::client::{escape_path_segment, Client};
use crate::errors::Result;
use crate::models::{
    GetVariationResponse, MotionGenerationResponse, MotionRequest,
    NoBackgroundVariationResponse, UniversalUpscalerRequest, UniversalUpscalerResponse,
    UnzoomVariationResponse, UpscaleVariationResponse, VariationRequest,
};

impl Client {
    pub async fn create_unzoom_variation(
        &self,
        req: &VariationRequest,
    ) -> Result<UnzoomVariationResponse> {
        self.post("/variations/unzoom", req).await
    }

    pub async fn create_upscale_variation(
        &self,
        req: &VariationRequest,
    ) -> Result<UpscaleVariationResponse> {
        self.post("/variations/upscale", req).await
    }

    /// Remove the background of a generated image.
    pub async fn create_no_background_variation(
        &self,
        req: &VariationRequest,
    ) -> Result<NoBackgroundVariationResponse> {
        self.post("/variations/nobg", req).await
    }

    /// Upscale an arbitrary image URL with the universal upscaler.
    pub async fn create_universal_upscaler_variation(
        &self,
        req: &UniversalUpscalerRequest,
    ) -> Result<UniversalUpscalerResponse> {
        self.post("/variations/universal-upscaler", req).await
    }

    /// Fetch the status and output of a variation job.
    pub async fn get_variation(&self, id: &str) -> Result<GetVariationResponse> {
        self.get(&format!("/variations/{}", escape_path_segment(id)))
            .await
    }

    /// Turn a generated image into a short motion clip.
    pub async fn create_svd_motion_generation(
        &self,
        req: &MotionRequest,
    ) -> Result<MotionGenerationResponse> {
        self.post("/generations-motion-svd", req).await
    }
}
