use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A visual theme for the public page. `branch` is the git ref the site
/// builder checks out when building a wedding that selected this template.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub branch: String,
    pub thumbnail_url: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Template {
    pub fn new(name: String, branch: String, thumbnail_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            branch,
            thumbnail_url,
            enabled: true,
            created_at: Utc::now(),
        }
    }
}
