use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::pagination::{Page, PageParams};
use crate::application::ports::{StatusCounts, WeddingFilter, WeddingRepository};
use crate::domain::entities::wedding::{DeploymentStatus, Wedding};

pub struct ListWeddingsCommand {
    pub status: Option<String>,
    pub slug_search: Option<String>,
    pub page: PageParams,
}

#[derive(Debug, serde::Serialize)]
pub struct WeddingSummary {
    pub id: Uuid,
    pub slug: String,
    pub host_id: String,
    pub deployment: DeploymentStatus,
    pub site_url: Option<String>,
    pub updated_at: String,
}

#[derive(Debug, serde::Serialize)]
pub struct WeddingListing {
    pub counts: StatusCounts,
    #[serde(flatten)]
    pub page: Page<WeddingSummary>,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    cmd: ListWeddingsCommand,
) -> Result<WeddingListing, CommandError> {
    let status = cmd
        .status
        .as_deref()
        .map(DeploymentStatus::from_db_str)
        .transpose()
        .map_err(errors::bad_request)?;

    let filter = WeddingFilter {
        status,
        slug_search: cmd.slug_search,
    };
    let page = weddings
        .list(filter, cmd.page)
        .await
        .map_err(errors::internal)?;
    let counts = weddings.count_by_status().await.map_err(errors::internal)?;

    Ok(WeddingListing {
        counts,
        page: page.map(summary),
    })
}

fn summary(wedding: Wedding) -> WeddingSummary {
    WeddingSummary {
        id: wedding.id,
        slug: wedding.slug.to_string(),
        host_id: wedding.host_id.to_string(),
        deployment: wedding.deployment,
        site_url: wedding.site_url,
        updated_at: wedding.updated_at.to_rfc3339(),
    }
}
