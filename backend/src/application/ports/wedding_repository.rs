use async_trait::async_trait;
use uuid::Uuid;

use crate::application::pagination::{Page, PageParams};
use crate::domain::entities::wedding::{DeploymentStatus, Wedding};
use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Default)]
pub struct WeddingFilter {
    pub status: Option<DeploymentStatus>,
    /// Substring match on the slug.
    pub slug_search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct StatusCounts {
    pub draft: i64,
    pub building: i64,
    pub published: i64,
    pub failed: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeddingRepository: Send + Sync {
    /// Insert or update the whole aggregate.
    async fn save(&self, wedding: &Wedding) -> Result<(), String>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Wedding>, String>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Wedding>, String>;
    async fn find_by_host(&self, host_id: &UserId) -> Result<Vec<Wedding>, String>;
    async fn list(
        &self,
        filter: WeddingFilter,
        page: PageParams,
    ) -> Result<Page<Wedding>, String>;
    /// Narrow write used by the publish flow and the builder callback.
    async fn update_deployment(
        &self,
        id: &Uuid,
        status: DeploymentStatus,
        site_url: Option<String>,
    ) -> Result<(), String>;
    async fn count_by_status(&self) -> Result<StatusCounts, String>;
}
