use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Pricing tier. Gates which templates a host may pick.
#[derive(Debug, Clone)]
pub struct Package {
    pub id: Uuid,
    pub name: String,
    pub price_vnd: i64,
    pub features: Vec<String>,
    /// Templates unlocked by this tier.
    pub template_ids: Vec<Uuid>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Package {
    pub fn new(name: String, price_vnd: i64, features: Vec<String>, template_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price_vnd,
            features,
            template_ids,
            enabled: true,
            created_at: Utc::now(),
        }
    }

    pub fn unlocks_template(&self, template_id: &Uuid) -> bool {
        self.template_ids.contains(template_id)
    }
}
