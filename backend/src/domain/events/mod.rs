pub mod domain_event;
pub mod rsvp_submitted;
pub mod wedding_published;
pub mod deployment_finished;

pub use domain_event::DomainEvent;
pub use rsvp_submitted::RsvpSubmitted;
pub use wedding_published::WeddingPublished;
pub use deployment_finished::DeploymentFinished;
