use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::template::Template;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn save(&self, template: &Template) -> Result<(), String>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Template>, String>;
    async fn list(&self, only_enabled: bool) -> Result<Vec<Template>, String>;
}
