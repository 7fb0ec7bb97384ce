use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub id: Option<String>,
    pub username: Option<String>,
}

/// Token balances and plan details for the authenticated account.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDetails {
    pub user: User,
    pub api_concurrency_slots: Option<u32>,
    pub api_paid_tokens: Option<i64>,
    pub api_subscription_tokens: Option<i64>,
    /// Free-form date string, not in the timestamp wire format.
    pub api_plan_token_renewal_date: Option<String>,
    pub paid_tokens: Option<i64>,
    pub subscription_tokens: Option<i64>,
    pub subscription_gpt_tokens: Option<i64>,
    pub subscription_model_tokens: Option<i64>,
    pub token_renewal_date: Option<String>,
}

/// GET /me response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GetUserInfoResponse {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub user_details: Vec<UserDetails>,
}
