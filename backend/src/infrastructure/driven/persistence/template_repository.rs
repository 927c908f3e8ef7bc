use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::application::ports::TemplateRepository;
use crate::domain::entities::template::Template;
use crate::infrastructure::driven::persistence::db_types::TemplateRow;

pub struct PostgresTemplateRepository {
    pool: PgPool,
}

impl PostgresTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for PostgresTemplateRepository {
    async fn save(&self, template: &Template) -> Result<(), String> {
        sqlx::query(
            "INSERT INTO templates (id, name, branch, thumbnail_url, enabled, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = excluded.name, \
                 branch = excluded.branch, \
                 thumbnail_url = excluded.thumbnail_url, \
                 enabled = excluded.enabled",
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.branch)
        .bind(&template.thumbnail_url)
        .bind(template.enabled)
        .bind(template.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save template: {e}"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Template>, String> {
        let row: Option<TemplateRow> = sqlx::query_as(
            "SELECT id, name, branch, thumbnail_url, enabled, created_at \
             FROM templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;
        Ok(row.map(TemplateRow::into_template))
    }

    async fn list(&self, only_enabled: bool) -> Result<Vec<Template>, String> {
        let rows: Vec<TemplateRow> = sqlx::query_as(
            "SELECT id, name, branch, thumbnail_url, enabled, created_at \
             FROM templates \
             WHERE ($1 = false OR enabled) \
             ORDER BY name",
        )
        .bind(only_enabled)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;
        Ok(rows.into_iter().map(TemplateRow::into_template).collect())
    }
}
