use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::application::pagination::{Page, PageParams};
use crate::application::ports::{RsvpCounts, RsvpFilter, RsvpRepository};
use crate::domain::entities::rsvp::Rsvp;
use crate::infrastructure::driven::persistence::db_types::RsvpRow;

pub struct PostgresRsvpRepository {
    pool: PgPool,
}

impl PostgresRsvpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepository {
    async fn save(&self, rsvp: &Rsvp) -> Result<(), String> {
        sqlx::query(
            "INSERT INTO rsvps (id, wedding_id, guest_name, attending, party_size, wish, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(rsvp.id)
        .bind(rsvp.wedding_id)
        .bind(&rsvp.guest_name)
        .bind(rsvp.attending)
        .bind(rsvp.party_size)
        .bind(&rsvp.wish)
        .bind(rsvp.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save rsvp: {e}"))?;
        Ok(())
    }

    async fn find_by_wedding(
        &self,
        wedding_id: &Uuid,
        filter: RsvpFilter,
        page: PageParams,
    ) -> Result<Page<Rsvp>, String> {
        let search = filter.search.filter(|s| !s.trim().is_empty());

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM rsvps \
             WHERE wedding_id = $1 \
               AND ($2::bool IS NULL OR attending = $2) \
               AND ($3::text IS NULL OR guest_name ILIKE '%' || $3 || '%')",
        )
        .bind(wedding_id)
        .bind(filter.attending)
        .bind(&search)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;

        let rows: Vec<RsvpRow> = sqlx::query_as(
            "SELECT id, wedding_id, guest_name, attending, party_size, wish, created_at \
             FROM rsvps \
             WHERE wedding_id = $1 \
               AND ($2::bool IS NULL OR attending = $2) \
               AND ($3::text IS NULL OR guest_name ILIKE '%' || $3 || '%') \
             ORDER BY created_at DESC \
             LIMIT $4 OFFSET $5",
        )
        .bind(wedding_id)
        .bind(filter.attending)
        .bind(&search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;

        let rsvps = rows.into_iter().map(RsvpRow::into_rsvp).collect();
        Ok(Page::new(rsvps, total as u64, page))
    }

    async fn counts_for_wedding(&self, wedding_id: &Uuid) -> Result<RsvpCounts, String> {
        let (total, attending, declined, guests): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE attending), \
                    COUNT(*) FILTER (WHERE NOT attending), \
                    COALESCE(SUM(party_size) FILTER (WHERE attending), 0) \
             FROM rsvps WHERE wedding_id = $1",
        )
        .bind(wedding_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Database error: {e}"))?;

        Ok(RsvpCounts {
            total,
            attending,
            declined,
            guests,
        })
    }
}
