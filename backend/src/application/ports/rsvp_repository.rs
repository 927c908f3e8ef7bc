use async_trait::async_trait;
use uuid::Uuid;

use crate::application::pagination::{Page, PageParams};
use crate::domain::entities::rsvp::Rsvp;

#[derive(Debug, Clone, Default)]
pub struct RsvpFilter {
    pub attending: Option<bool>,
    /// Substring match on the guest name.
    pub search: Option<String>,
}

/// Totals shown on the host's RSVP dashboard.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct RsvpCounts {
    pub total: i64,
    pub attending: i64,
    pub declined: i64,
    /// Sum of party sizes over attending responses.
    pub guests: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn save(&self, rsvp: &Rsvp) -> Result<(), String>;
    async fn find_by_wedding(
        &self,
        wedding_id: &Uuid,
        filter: RsvpFilter,
        page: PageParams,
    ) -> Result<Page<Rsvp>, String>;
    async fn counts_for_wedding(&self, wedding_id: &Uuid) -> Result<RsvpCounts, String>;
}
