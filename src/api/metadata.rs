//! Resource metadata endpoints

use reqwest::Method;

use crate::core::client::CampaignClient;
use crate::core::error::CampaignError;
use crate::models::metadata::Metadata;

const RESOURCE_TYPE_ENDPOINT: &str = "profileAndServices/resourceType";

impl CampaignClient {
    /// Describe the schema of a resource, e.g. `"profile"` or a custom
    /// resource name.
    pub async fn get_resource_metadata(&self, resource: &str) -> Result<Metadata, CampaignError> {
        let value = self
            .execute(
                Method::GET,
                &format!("{RESOURCE_TYPE_ENDPOINT}/{resource}"),
                None,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
