//! Workflow endpoints

use reqwest::Method;
use serde_json::json;

use crate::core::client::CampaignClient;
use crate::core::error::CampaignError;
use crate::models::workflow::{Workflow, WorkflowCommand};

const WORKFLOW_ENDPOINT: &str = "workflow/execution";

impl CampaignClient {
    /// Get one workflow execution by id or internal name.
    pub async fn get_workflow(&self, workflow_id: &str) -> Result<Workflow, CampaignError> {
        let value = self
            .execute(Method::GET, &format!("{WORKFLOW_ENDPOINT}/{workflow_id}"), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Issue a control command (start/pause/resume/stop) against a workflow.
    ///
    /// The command endpoint acknowledges with an empty or minimal body; the
    /// new state is observed through [`get_workflow`](Self::get_workflow).
    pub async fn control_workflow(
        &self,
        workflow_id: &str,
        command: WorkflowCommand,
    ) -> Result<(), CampaignError> {
        self.execute(
            Method::POST,
            &format!("{WORKFLOW_ENDPOINT}/{workflow_id}/commands"),
            Some(json!({"method": command})),
        )
        .await?;
        Ok(())
    }
}
