//! Transactional messaging (Message Center) endpoints

use reqwest::Method;

use crate::core::client::CampaignClient;
use crate::core::error::CampaignError;
use crate::models::transactional::{TransactionalEvent, TransactionalEventStatus};

const EVENT_ENDPOINT: &str = "mc";

impl CampaignClient {
    /// Push one transactional event of the given event type.
    pub async fn send_transactional_event(
        &self,
        event_id: &str,
        event: &TransactionalEvent,
    ) -> Result<TransactionalEventStatus, CampaignError> {
        let body = serde_json::to_value(event)?;
        let value = self
            .execute(Method::POST, &format!("{EVENT_ENDPOINT}/{event_id}"), Some(body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get the processing status of a previously sent event.
    pub async fn get_transactional_event(
        &self,
        event_id: &str,
        pkey: &str,
    ) -> Result<TransactionalEventStatus, CampaignError> {
        let value = self
            .execute(Method::GET, &format!("{EVENT_ENDPOINT}/{event_id}/{pkey}"), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
