use crate::client::{escape_path_segment, Client, Pagination};
use crate::errors::Result;
use crate::models::{
    CreateGenerationRequest, CreateGenerationResponse, DeleteGenerationResponse,
    GetGenerationResponse, ListElementsResponse, ListGenerationsResponse,
};

impl Client {
    /// Queue an image generation.
    ///
    /// Returns as soon as the job is accepted. Use
    /// [`get_generation`](Self::get_generation) with the returned id to check
    /// progress.
    pub async fn create_generation(
        &self,
        req: &CreateGenerationRequest,
    ) -> Result<CreateGenerationResponse> {
        self.post("/generations", req).await
    }

    /// Fetch a generation, its status and its images.
    pub async fn get_generation(&self, id: &str) -> Result<GetGenerationResponse> {
        self.get(&format!("/generations/{}", escape_path_segment(id)))
            .await
    }

    pub async fn delete_generation(&self, id: &str) -> Result<DeleteGenerationResponse> {
        self.delete(&format!("/generations/{}", escape_path_segment(id)))
            .await
    }

    /// List the generations of a user, newest first.
    ///
    /// There is no cursor; step `page.offset` yourself.
    pub async fn list_generations_by_user(
        &self,
        user_id: &str,
        page: Pagination,
    ) -> Result<ListGenerationsResponse> {
        let path = format!(
            "/generations/user/{}{}",
            escape_path_segment(user_id),
            page.query()
        );
        self.get(&path).await
    }

    /// List the public elements (LoRAs) usable in generations.
    pub async fn list_elements(&self) -> Result<ListElementsResponse> {
        self.get("/elements").await
    }
}
