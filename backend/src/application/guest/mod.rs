pub mod view_invitation;
pub mod submit_rsvp;
