use crate::client::Client;
use crate::errors::Result;
use crate::models::{
    CalculateApiCostRequest, CalculateApiCostResponse, ImprovePromptRequest,
    PromptGenerationResponse,
};

impl Client {
    /// Ask the service for a random prompt. Sends no request body.
    pub async fn random_prompt(&self) -> Result<PromptGenerationResponse> {
        self.post_bare("/prompt/random").await
    }

    /// Rewrite a prompt into a more detailed one.
    pub async fn improve_prompt(&self, req: &ImprovePromptRequest) -> Result<PromptGenerationResponse> {
        self.post("/prompt/improve", req).await
    }

    /// Estimate the API credit cost of an operation without running it.
    pub async fn calculate_api_cost(
        &self,
        req: &CalculateApiCostRequest,
    ) -> Result<CalculateApiCostResponse> {
        self.post("/pricing-calculator", req).await
    }
}
