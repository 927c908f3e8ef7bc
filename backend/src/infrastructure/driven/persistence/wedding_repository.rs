use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::application::pagination::{Page, PageParams};
use crate::application::ports::{StatusCounts, WeddingFilter, WeddingRepository};
use crate::domain::entities::wedding::{DeploymentStatus, Wedding};
use crate::domain::value_objects::UserId;
use crate::infrastructure::driven::persistence::db_types::WeddingRow;

const WEDDING_COLUMNS: &str = "id, host_id, slug, template_id, package_id, content, \
     gift_bin, gift_number, gift_holder, album, guest_link_token, deployment, site_url, \
     created_at, updated_at";

pub struct PostgresWeddingRepository {
    pool: PgPool,
}

impl PostgresWeddingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeddingRepository for PostgresWeddingRepository {
    async fn save(&self, wedding: &Wedding) -> Result<(), String> {
        let album = serde_json::to_value(&wedding.album)
            .map_err(|e| format!("Failed to serialize album: {e}"))?;
        sqlx::query(
            "INSERT INTO weddings (id, host_id, slug, template_id, package_id, content, \
                 gift_bin, gift_number, gift_holder, album, guest_link_token, deployment, \
                 site_url, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             ON CONFLICT (id) DO UPDATE SET \
                 slug = excluded.slug, \
                 template_id = excluded.template_id, \
                 package_id = excluded.package_id, \
                 content = excluded.content, \
                 gift_bin = excluded.gift_bin, \
                 gift_number = excluded.gift_number, \
                 gift_holder = excluded.gift_holder, \
                 album = excluded.album, \
                 deployment = excluded.deployment, \
                 site_url = excluded.site_url, \
                 updated_at = excluded.updated_at",
        )
        .bind(wedding.id)
        .bind(wedding.host_id.as_uuid())
        .bind(wedding.slug.as_str())
        .bind(wedding.template_id)
        .bind(wedding.package_id)
        .bind(&wedding.content)
        .bind(wedding.gift_account.as_ref().map(|a| a.bin().to_string()))
        .bind(wedding.gift_account.as_ref().map(|a| a.number().to_string()))
        .bind(wedding.gift_account.as_ref().map(|a| a.holder().to_string()))
        .bind(album)
        .bind(&wedding.guest_link_token)
        .bind(wedding.deployment.as_db_str())
        .bind(&wedding.site_url)
        .bind(wedding.created_at)
        .bind(wedding.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save wedding: {e}"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Wedding>, String> {
        let row: Option<WeddingRow> = sqlx::query_as(&format!(
            "SELECT {WEDDING_COLUMNS} FROM weddings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;
        row.map(WeddingRow::into_wedding).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Wedding>, String> {
        let row: Option<WeddingRow> = sqlx::query_as(&format!(
            "SELECT {WEDDING_COLUMNS} FROM weddings WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;
        row.map(WeddingRow::into_wedding).transpose()
    }

    async fn find_by_host(&self, host_id: &UserId) -> Result<Vec<Wedding>, String> {
        let rows: Vec<WeddingRow> = sqlx::query_as(&format!(
            "SELECT {WEDDING_COLUMNS} FROM weddings WHERE host_id = $1 ORDER BY created_at DESC"
        ))
        .bind(host_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;
        rows.into_iter().map(WeddingRow::into_wedding).collect()
    }

    async fn list(
        &self,
        filter: WeddingFilter,
        page: PageParams,
    ) -> Result<Page<Wedding>, String> {
        let status = filter.status.map(|s| s.as_db_str());
        let search = filter.slug_search.filter(|s| !s.trim().is_empty());

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM weddings \
             WHERE ($1::text IS NULL OR deployment = $1) \
               AND ($2::text IS NULL OR slug ILIKE '%' || $2 || '%')",
        )
        .bind(status)
        .bind(&search)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;

        let rows: Vec<WeddingRow> = sqlx::query_as(&format!(
            "SELECT {WEDDING_COLUMNS} FROM weddings \
             WHERE ($1::text IS NULL OR deployment = $1) \
               AND ($2::text IS NULL OR slug ILIKE '%' || $2 || '%') \
             ORDER BY updated_at DESC \
             LIMIT $3 OFFSET $4"
        ))
        .bind(status)
        .bind(&search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;

        let weddings: Vec<Wedding> = rows
            .into_iter()
            .map(WeddingRow::into_wedding)
            .collect::<Result<_, _>>()?;
        Ok(Page::new(weddings, total as u64, page))
    }

    async fn update_deployment(
        &self,
        id: &Uuid,
        status: DeploymentStatus,
        site_url: Option<String>,
    ) -> Result<(), String> {
        // site_url is only touched when the builder reports a new one.
        sqlx::query(
            "UPDATE weddings \
             SET deployment = $2, site_url = COALESCE($3, site_url), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(status.as_db_str())
        .bind(site_url)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update deployment: {e}"))?;
        Ok(())
    }

    async fn count_by_status(&self) -> Result<StatusCounts, String> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT deployment, COUNT(*) FROM weddings GROUP BY deployment")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| format!("Database error: {e}"))?;

        let mut counts = StatusCounts::default();
        for (status, count) in rows {
            match DeploymentStatus::from_db_str(&status)? {
                DeploymentStatus::Draft => counts.draft = count,
                DeploymentStatus::Building => counts.building = count,
                DeploymentStatus::Published => counts.published = count,
                DeploymentStatus::Failed => counts.failed = count,
            }
        }
        Ok(counts)
    }
}
