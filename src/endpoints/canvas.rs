use crate::client::Client;
use crate::errors::Result;
use crate::models::{
    LcmGenerationRequest, LcmGenerationResponse, LcmInpaintingRequest, LcmUpscaleRequest,
    LcmUpscaleResponse,
};

impl Client {
    /// Generate an image from a sketch in realtime (LCM).
    ///
    /// Unlike [`create_generation`](Self::create_generation) this is
    /// synchronous: the images come back inline as data URLs.
    pub async fn create_lcm_generation(
        &self,
        req: &LcmGenerationRequest,
    ) -> Result<LcmGenerationResponse> {
        self.post("/generations-lcm", req).await
    }

    pub async fn lcm_instant_refine(&self, req: &LcmGenerationRequest) -> Result<LcmGenerationResponse> {
        self.post("/lcm-instant-refine", req).await
    }

    /// Repaint the masked area of a canvas image.
    pub async fn lcm_inpainting(&self, req: &LcmInpaintingRequest) -> Result<LcmGenerationResponse> {
        self.post("/lcm-inpainting", req).await
    }

    /// Alchemy upscale of a canvas image; the result is stored as a generation.
    pub async fn lcm_alchemy_upscale(&self, req: &LcmUpscaleRequest) -> Result<LcmUpscaleResponse> {
        self.post("/lcm-upscale", req).await
    }
}
