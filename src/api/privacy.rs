//! Privacy tool (GDPR/CCPA) endpoints

use reqwest::Method;

use crate::core::client::CampaignClient;
use crate::core::error::CampaignError;
use crate::models::privacy::{PrivacyRequest, PrivacyRequestStatus};

const PRIVACY_ENDPOINT: &str = "privacy/privacyTool";

impl CampaignClient {
    /// File a new privacy request for one data subject.
    pub async fn create_privacy_request(
        &self,
        request: &PrivacyRequest,
    ) -> Result<PrivacyRequestStatus, CampaignError> {
        let body = serde_json::to_value(request)?;
        let value = self
            .execute(Method::POST, PRIVACY_ENDPOINT, Some(body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get the status of a previously filed privacy request.
    pub async fn get_privacy_request(
        &self,
        pkey: &str,
    ) -> Result<PrivacyRequestStatus, CampaignError> {
        let value = self
            .execute(Method::GET, &format!("{PRIVACY_ENDPOINT}/{pkey}"), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
