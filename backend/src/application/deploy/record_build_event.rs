use shared::protocol::{BuildEvent, BuildOutcome};

use crate::application::errors::{self, CommandError};
use crate::application::ports::WeddingRepository;
use crate::domain::events::{DeploymentFinished, DomainEvent, WeddingPublished};

/// Applies a builder callback to the wedding's deployment state. Callbacks
/// for weddings that are not mid-build are stale and rejected.
pub async fn execute(
    weddings: &dyn WeddingRepository,
    event: BuildEvent,
) -> Result<(), CommandError> {
    let mut wedding = weddings
        .find_by_id(&event.wedding_id)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Wedding"))?;

    match event.outcome {
        BuildOutcome::Succeeded { site_url } => {
            wedding
                .mark_published(site_url.clone())
                .map_err(errors::conflict)?;
            weddings
                .update_deployment(&wedding.id, wedding.deployment, Some(site_url.clone()))
                .await
                .map_err(errors::internal)?;
            let published = DomainEvent::new(WeddingPublished {
                wedding_id: wedding.id,
                site_url,
            });
            tracing::info!(
                wedding_id = %published.data.wedding_id,
                site_url = %published.data.site_url,
                "wedding published"
            );
        }
        BuildOutcome::Failed { reason } => {
            wedding.mark_failed().map_err(errors::conflict)?;
            tracing::warn!(wedding_id = %wedding.id, "build failed: {reason}");
            weddings
                .update_deployment(&wedding.id, wedding.deployment, None)
                .await
                .map_err(errors::internal)?;
        }
    }

    let finished = DomainEvent::new(DeploymentFinished {
        wedding_id: wedding.id,
        status: wedding.deployment,
    });
    tracing::info!(
        wedding_id = %finished.data.wedding_id,
        status = ?finished.data.status,
        "deployment finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::wedding_repository::MockWeddingRepository;
    use crate::domain::entities::wedding::{DeploymentStatus, Wedding};
    use crate::domain::value_objects::{Slug, UserId};
    use axum::http::StatusCode;

    fn building_wedding() -> Wedding {
        let mut wedding = Wedding::new(UserId::new(), Slug::new("an-va-binh".into()).unwrap());
        wedding.begin_publish().unwrap();
        wedding
    }

    #[tokio::test]
    async fn test_success_publishes_and_records_site_url() {
        let wedding = building_wedding();
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        weddings
            .expect_update_deployment()
            .withf(|_, status, site_url| {
                *status == DeploymentStatus::Published
                    && site_url.as_deref() == Some("https://thiep.example/an-va-binh")
            })
            .returning(|_, _, _| Ok(()));

        execute(
            &weddings,
            BuildEvent {
                wedding_id,
                outcome: BuildOutcome::Succeeded {
                    site_url: "https://thiep.example/an-va-binh".to_string(),
                },
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_failure_moves_to_failed() {
        let wedding = building_wedding();
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        weddings
            .expect_update_deployment()
            .withf(|_, status, site_url| {
                *status == DeploymentStatus::Failed && site_url.is_none()
            })
            .returning(|_, _, _| Ok(()));

        execute(
            &weddings,
            BuildEvent {
                wedding_id,
                outcome: BuildOutcome::Failed {
                    reason: "template branch missing".to_string(),
                },
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_stale_callback_is_rejected() {
        // Wedding is back in Draft; a late callback must not flip it.
        let wedding = Wedding::new(UserId::new(), Slug::new("an-va-binh".into()).unwrap());
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));

        let (status, _) = execute(
            &weddings,
            BuildEvent {
                wedding_id,
                outcome: BuildOutcome::Succeeded {
                    site_url: "https://thiep.example/an-va-binh".to_string(),
                },
            },
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
