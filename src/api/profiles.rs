//! Profile endpoints

use reqwest::Method;
use serde_json::Value;

use crate::core::client::CampaignClient;
use crate::core::error::CampaignError;
use crate::models::ResourceList;
use crate::models::profile::Profile;
use crate::models::service::Subscription;

const PROFILE_ENDPOINT: &str = "profileAndServices/profile";

impl CampaignClient {
    /// Get the first page of profiles.
    pub async fn get_all_profiles(&self) -> Result<ResourceList<Profile>, CampaignError> {
        let value = self.execute(Method::GET, PROFILE_ENDPOINT, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one profile by primary key.
    pub async fn get_profile(&self, pkey: &str) -> Result<Profile, CampaignError> {
        let value = self
            .execute(Method::GET, &format!("{PROFILE_ENDPOINT}/{pkey}"), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a profile. The server assigns the primary key.
    pub async fn create_profile(&self, profile: &Profile) -> Result<Profile, CampaignError> {
        let body = serde_json::to_value(profile)?;
        let value = self
            .execute(Method::POST, PROFILE_ENDPOINT, Some(body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patch one profile with a partial JSON document; only the fields
    /// present in `patch` are modified.
    pub async fn update_profile(&self, pkey: &str, patch: Value) -> Result<Profile, CampaignError> {
        let value = self
            .execute(
                Method::PATCH,
                &format!("{PROFILE_ENDPOINT}/{pkey}"),
                Some(patch),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get the first page of a profile's subscriptions.
    pub async fn get_profile_subscriptions(
        &self,
        pkey: &str,
    ) -> Result<ResourceList<Subscription>, CampaignError> {
        let value = self
            .execute(
                Method::GET,
                &format!("{PROFILE_ENDPOINT}/{pkey}/subscriptions"),
                None,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
