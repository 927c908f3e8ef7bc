use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::ports::{MediaStore, WeddingRepository};
use crate::domain::entities::wedding::Photo;
use crate::domain::value_objects::UserId;

/// Decoded payload cap; the studio downsizes before uploading.
const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

pub struct UploadPhotoCommand {
    pub wedding_id: Uuid,
    pub host_id: UserId,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    media: &dyn MediaStore,
    cmd: UploadPhotoCommand,
) -> Result<Photo, CommandError> {
    let mut wedding = weddings
        .find_by_id(&cmd.wedding_id)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Wedding"))?;
    if !wedding.is_owned_by(&cmd.host_id) {
        return Err(errors::forbidden("This wedding belongs to another host"));
    }

    if cmd.data.is_empty() {
        return Err(errors::bad_request("Photo payload is empty"));
    }
    if cmd.data.len() > MAX_PHOTO_BYTES {
        return Err(errors::bad_request("Photo exceeds the 5 MiB limit"));
    }
    if !ALLOWED_CONTENT_TYPES.contains(&cmd.content_type.as_str()) {
        return Err(errors::bad_request(
            "Only JPEG, PNG and WebP images are accepted",
        ));
    }

    let asset = media
        .upload(&cmd.filename, &cmd.content_type, &cmd.data)
        .await
        .map_err(errors::internal)?;

    let photo = Photo {
        public_id: asset.public_id,
        url: asset.url,
    };
    wedding.album.push(photo.clone());
    wedding.updated_at = chrono::Utc::now();
    weddings.save(&wedding).await.map_err(errors::internal)?;

    tracing::info!(wedding_id = %wedding.id, public_id = %photo.public_id, "photo added to album");
    Ok(photo)
}
