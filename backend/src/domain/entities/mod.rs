pub mod wedding;
pub mod rsvp;
pub mod template;
pub mod package;

pub use wedding::{DeploymentStateError, DeploymentStatus, Photo, Wedding};
pub use rsvp::Rsvp;
pub use template::Template;
pub use package::Package;
