use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::ports::{MediaStore, WeddingRepository};
use crate::domain::value_objects::UserId;

pub struct DeletePhotoCommand {
    pub wedding_id: Uuid,
    pub host_id: UserId,
    pub public_id: String,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    media: &dyn MediaStore,
    cmd: DeletePhotoCommand,
) -> Result<(), CommandError> {
    let mut wedding = weddings
        .find_by_id(&cmd.wedding_id)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Wedding"))?;
    if !wedding.is_owned_by(&cmd.host_id) {
        return Err(errors::forbidden("This wedding belongs to another host"));
    }
    if wedding.find_photo(&cmd.public_id).is_none() {
        return Err(errors::not_found("Photo"));
    }

    // CDN first; the album keeps the photo if the delete does not go through.
    media
        .delete(&cmd.public_id)
        .await
        .map_err(errors::internal)?;

    wedding.remove_photo(&cmd.public_id);
    weddings.save(&wedding).await.map_err(errors::internal)?;
    tracing::info!(wedding_id = %wedding.id, public_id = %cmd.public_id, "photo removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::media_store::MockMediaStore;
    use crate::application::ports::wedding_repository::MockWeddingRepository;
    use crate::domain::entities::wedding::{Photo, Wedding};
    use crate::domain::value_objects::Slug;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_deletes_from_cdn_and_album() {
        let host_id = UserId::new();
        let mut wedding = Wedding::new(host_id.clone(), Slug::new("an-va-binh".into()).unwrap());
        wedding.album.push(Photo {
            public_id: "album/abc123".to_string(),
            url: "https://media.example/album/abc123.jpg".to_string(),
        });
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        weddings
            .expect_save()
            .withf(|w| w.album.is_empty())
            .returning(|_| Ok(()));
        let mut media = MockMediaStore::new();
        media
            .expect_delete()
            .withf(|public_id| public_id == "album/abc123")
            .returning(|_| Ok(()));

        execute(
            &weddings,
            &media,
            DeletePhotoCommand {
                wedding_id,
                host_id,
                public_id: "album/abc123".to_string(),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_missing_photo_is_not_found() {
        let host_id = UserId::new();
        let wedding = Wedding::new(host_id.clone(), Slug::new("an-va-binh".into()).unwrap());
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        let media = MockMediaStore::new();

        let (status, _) = execute(
            &weddings,
            &media,
            DeletePhotoCommand {
                wedding_id,
                host_id,
                public_id: "album/missing".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
