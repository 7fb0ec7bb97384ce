use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ImprovePromptRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptGeneration {
    pub prompt: Option<String>,
    pub api_credit_cost: Option<u64>,
}

/// Response of both POST /prompt/random and POST /prompt/improve.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptGenerationResponse {
    pub prompt_generation: Option<PromptGeneration>,
}

/// POST /pricing-calculator payload.
///
/// `service` names the priced operation (e.g. `IMAGE_GENERATION`);
/// `service_params` holds that operation's parameters keyed by service.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateApiCostRequest {
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_params: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiServiceCost {
    pub cost: Option<u64>,
}

/// POST /pricing-calculator response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculateApiCostResponse {
    pub calculate_production_api_service_cost: ApiServiceCost,
}
