use async_trait::async_trait;
use shared::protocol::BuildRequest;

/// Fire-and-forget trigger of the site builder; the outcome arrives later
/// on the deploy-events endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteDeployer: Send + Sync {
    async fn trigger(&self, request: BuildRequest) -> Result<(), String>;
}
