pub mod db_types;
pub mod wedding_repository;
pub mod rsvp_repository;
pub mod template_repository;
pub mod package_repository;

pub use wedding_repository::PostgresWeddingRepository;
pub use rsvp_repository::PostgresRsvpRepository;
pub use template_repository::PostgresTemplateRepository;
pub use package_repository::PostgresPackageRepository;
