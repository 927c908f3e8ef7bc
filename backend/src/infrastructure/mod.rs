// Infrastructure layer - external concerns (database, media CDN, builder)
// Implements interfaces defined in application layer

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::ports::{
    BackofficeData, MediaStore, PackageRepository, RsvpRepository, SiteDeployer,
    TemplateRepository, WeddingRepository,
};

pub mod config;
pub mod driven; // Output adapters (repositories, media CDN, site builder)
pub mod driving; // Input adapters (HTTP)

use self::config::Settings;
use self::driven::backoffice::MockBackofficeLedger;
use self::driven::deploy::WebhookSiteDeployer;
use self::driven::media::CdnMediaStore;
use self::driven::persistence::{
    PostgresPackageRepository, PostgresRsvpRepository, PostgresTemplateRepository,
    PostgresWeddingRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub weddings: Arc<dyn WeddingRepository>,
    pub rsvps: Arc<dyn RsvpRepository>,
    pub templates: Arc<dyn TemplateRepository>,
    pub packages: Arc<dyn PackageRepository>,
    pub media: Arc<dyn MediaStore>,
    pub deployer: Arc<dyn SiteDeployer>,
    pub backoffice: Arc<dyn BackofficeData>,
}

impl AppState {
    pub fn new(settings: Settings, pool: PgPool) -> Self {
        let media = CdnMediaStore::new(
            settings.media.base_url.clone(),
            settings.media.api_key.clone(),
        );
        let deployer = WebhookSiteDeployer::new(settings.deployer.webhook_url.clone());
        Self {
            settings: Arc::new(settings),
            weddings: Arc::new(PostgresWeddingRepository::new(pool.clone())),
            rsvps: Arc::new(PostgresRsvpRepository::new(pool.clone())),
            templates: Arc::new(PostgresTemplateRepository::new(pool.clone())),
            packages: Arc::new(PostgresPackageRepository::new(pool)),
            media: Arc::new(media),
            deployer: Arc::new(deployer),
            backoffice: Arc::new(MockBackofficeLedger::new()),
        }
    }
}
