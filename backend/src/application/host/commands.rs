pub mod create_wedding;
pub mod update_wedding;
pub mod publish_wedding;
pub mod upload_photo;
pub mod delete_photo;
pub mod list_rsvps;
