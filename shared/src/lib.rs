pub mod protocol;

pub use protocol::{BuildOutcome, BuildRequest, BuildEvent, GiftBlock, InvitationPage, UploadPhotoRequest};
