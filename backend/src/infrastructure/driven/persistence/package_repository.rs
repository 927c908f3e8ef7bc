use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::application::ports::PackageRepository;
use crate::domain::entities::package::Package;
use crate::infrastructure::driven::persistence::db_types::PackageRow;

pub struct PostgresPackageRepository {
    pool: PgPool,
}

impl PostgresPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackageRepository for PostgresPackageRepository {
    async fn save(&self, package: &Package) -> Result<(), String> {
        let features = serde_json::to_value(&package.features)
            .map_err(|e| format!("Failed to serialize features: {e}"))?;
        let template_ids = serde_json::to_value(&package.template_ids)
            .map_err(|e| format!("Failed to serialize template_ids: {e}"))?;
        sqlx::query(
            "INSERT INTO packages (id, name, price_vnd, features, template_ids, enabled, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = excluded.name, \
                 price_vnd = excluded.price_vnd, \
                 features = excluded.features, \
                 template_ids = excluded.template_ids, \
                 enabled = excluded.enabled",
        )
        .bind(package.id)
        .bind(&package.name)
        .bind(package.price_vnd)
        .bind(features)
        .bind(template_ids)
        .bind(package.enabled)
        .bind(package.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save package: {e}"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Package>, String> {
        let row: Option<PackageRow> = sqlx::query_as(
            "SELECT id, name, price_vnd, features, template_ids, enabled, created_at \
             FROM packages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;
        row.map(PackageRow::into_package).transpose()
    }

    async fn list(&self, only_enabled: bool) -> Result<Vec<Package>, String> {
        let rows: Vec<PackageRow> = sqlx::query_as(
            "SELECT id, name, price_vnd, features, template_ids, enabled, created_at \
             FROM packages \
             WHERE ($1 = false OR enabled) \
             ORDER BY price_vnd",
        )
        .bind(only_enabled)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;
        rows.into_iter().map(PackageRow::into_package).collect()
    }
}
