use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::package::Package;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn save(&self, package: &Package) -> Result<(), String>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Package>, String>;
    async fn list(&self, only_enabled: bool) -> Result<Vec<Package>, String>;
}
