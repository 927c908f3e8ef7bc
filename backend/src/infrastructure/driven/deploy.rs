use async_trait::async_trait;
use shared::protocol::BuildRequest;

use crate::application::ports::SiteDeployer;

/// Kicks the external site builder over its webhook. The builder reports
/// the outcome on the deploy-events endpoint once the build settles.
pub struct WebhookSiteDeployer {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookSiteDeployer {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl SiteDeployer for WebhookSiteDeployer {
    async fn trigger(&self, request: BuildRequest) -> Result<(), String> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Failed to reach builder webhook: {e}"))?;

        if !response.status().is_success() {
            return Err(format!(
                "Builder webhook returned {}",
                response.status()
            ));
        }
        tracing::info!(wedding_id = %request.wedding_id, "build request accepted by builder");
        Ok(())
    }
}
