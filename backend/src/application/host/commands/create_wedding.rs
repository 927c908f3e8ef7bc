use crate::application::errors::{self, CommandError};
use crate::application::ports::WeddingRepository;
use crate::domain::entities::wedding::Wedding;
use crate::domain::value_objects::{Slug, UserId};

pub struct CreateWeddingCommand {
    pub host_id: UserId,
    pub slug: String,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    cmd: CreateWeddingCommand,
) -> Result<Wedding, CommandError> {
    let slug = Slug::new(cmd.slug).map_err(errors::bad_request)?;
    let taken = weddings
        .find_by_slug(slug.as_str())
        .await
        .map_err(errors::internal)?;
    if taken.is_some() {
        return Err(errors::conflict(format!("Slug '{slug}' is already taken")));
    }

    let wedding = Wedding::new(cmd.host_id, slug);
    weddings.save(&wedding).await.map_err(errors::internal)?;
    tracing::info!(wedding_id = %wedding.id, slug = %wedding.slug, "wedding created");
    Ok(wedding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::wedding_repository::MockWeddingRepository;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_creates_draft_wedding_with_guest_link() {
        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_slug()
            .returning(|_| Ok(None));
        weddings.expect_save().returning(|_| Ok(()));

        let wedding = execute(
            &weddings,
            CreateWeddingCommand {
                host_id: UserId::new(),
                slug: "an-va-binh".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(wedding.slug.as_str(), "an-va-binh");
        assert!(!wedding.guest_link_token.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_taken_slug() {
        let mut weddings = MockWeddingRepository::new();
        weddings.expect_find_by_slug().returning(|slug| {
            Ok(Some(Wedding::new(
                UserId::new(),
                Slug::new(slug.to_string()).unwrap(),
            )))
        });

        let (status, _) = execute(
            &weddings,
            CreateWeddingCommand {
                host_id: UserId::new(),
                slug: "an-va-binh".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_rejects_invalid_slug() {
        let weddings = MockWeddingRepository::new();
        let (status, _) = execute(
            &weddings,
            CreateWeddingCommand {
                host_id: UserId::new(),
                slug: "đám cưới".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
