//! Service endpoints

use reqwest::Method;

use crate::core::client::CampaignClient;
use crate::core::error::CampaignError;
use crate::models::ResourceList;
use crate::models::service::Service;

const SERVICE_ENDPOINT: &str = "profileAndServices/service";

impl CampaignClient {
    /// Get the first page of services.
    pub async fn get_all_services(&self) -> Result<ResourceList<Service>, CampaignError> {
        let value = self.execute(Method::GET, SERVICE_ENDPOINT, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one service by primary key.
    pub async fn get_service(&self, pkey: &str) -> Result<Service, CampaignError> {
        let value = self
            .execute(Method::GET, &format!("{SERVICE_ENDPOINT}/{pkey}"), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a service. The server assigns the primary key.
    pub async fn create_service(&self, service: &Service) -> Result<Service, CampaignError> {
        let body = serde_json::to_value(service)?;
        let value = self
            .execute(Method::POST, SERVICE_ENDPOINT, Some(body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
