pub mod wedding_repository;
pub mod rsvp_repository;
pub mod template_repository;
pub mod package_repository;
pub mod media_store;
pub mod site_deployer;
pub mod backoffice_data;

pub use wedding_repository::{StatusCounts, WeddingFilter, WeddingRepository};
pub use rsvp_repository::{RsvpCounts, RsvpFilter, RsvpRepository};
pub use template_repository::TemplateRepository;
pub use package_repository::PackageRepository;
pub use media_store::{MediaAsset, MediaStore};
pub use site_deployer::SiteDeployer;
pub use backoffice_data::{BackofficeData, CareTicket, Payment, TicketStatus};
