use crate::client::Client;
use crate::errors::Result;
use crate::models::GetUserInfoResponse;

impl Client {
    /// Token balances and plan details of the account owning the API key.
    pub async fn get_user_info(&self) -> Result<GetUserInfoResponse> {
        self.get("/me").await
    }
}
