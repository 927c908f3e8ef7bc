use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::pagination::{Page, PageParams};
use crate::application::ports::{RsvpCounts, RsvpFilter, RsvpRepository, WeddingRepository};
use crate::domain::entities::rsvp::Rsvp;
use crate::domain::value_objects::UserId;

pub struct ListRsvpsCommand {
    pub wedding_id: Uuid,
    pub host_id: UserId,
    pub filter: RsvpFilter,
    pub page: PageParams,
}

#[derive(Debug, serde::Serialize)]
pub struct RsvpView {
    pub id: Uuid,
    pub guest_name: String,
    pub attending: bool,
    pub party_size: i32,
    pub wish: Option<String>,
    pub created_at: String,
}

#[derive(Debug, serde::Serialize)]
pub struct RsvpListing {
    pub counts: RsvpCounts,
    #[serde(flatten)]
    pub page: Page<RsvpView>,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    rsvps: &dyn RsvpRepository,
    cmd: ListRsvpsCommand,
) -> Result<RsvpListing, CommandError> {
    let wedding = weddings
        .find_by_id(&cmd.wedding_id)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Wedding"))?;
    if !wedding.is_owned_by(&cmd.host_id) {
        return Err(errors::forbidden("This wedding belongs to another host"));
    }

    let page = rsvps
        .find_by_wedding(&cmd.wedding_id, cmd.filter, cmd.page)
        .await
        .map_err(errors::internal)?;
    let counts = rsvps
        .counts_for_wedding(&cmd.wedding_id)
        .await
        .map_err(errors::internal)?;

    Ok(RsvpListing {
        counts,
        page: page.map(view),
    })
}

fn view(rsvp: Rsvp) -> RsvpView {
    RsvpView {
        id: rsvp.id,
        guest_name: rsvp.guest_name,
        attending: rsvp.attending,
        party_size: rsvp.party_size,
        wish: rsvp.wish,
        created_at: rsvp.created_at.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::rsvp_repository::MockRsvpRepository;
    use crate::application::ports::wedding_repository::MockWeddingRepository;
    use crate::domain::entities::wedding::Wedding;
    use crate::domain::value_objects::Slug;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_listing_includes_counts_and_page() {
        let host_id = UserId::new();
        let wedding = Wedding::new(host_id.clone(), Slug::new("an-va-binh".into()).unwrap());
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        let mut rsvps = MockRsvpRepository::new();
        rsvps.expect_find_by_wedding().returning(move |id, _, page| {
            let rsvp = Rsvp::new(*id, "Trần Thị Mai".to_string(), true, 2, None).unwrap();
            Ok(Page::new(vec![rsvp], 41, page))
        });
        rsvps.expect_counts_for_wedding().returning(|_| {
            Ok(RsvpCounts {
                total: 41,
                attending: 30,
                declined: 11,
                guests: 72,
            })
        });

        let listing = execute(
            &weddings,
            &rsvps,
            ListRsvpsCommand {
                wedding_id,
                host_id,
                filter: RsvpFilter::default(),
                page: PageParams::new(Some(1), Some(20)),
            },
        )
        .await
        .unwrap();

        assert_eq!(listing.counts.guests, 72);
        assert_eq!(listing.page.total, 41);
        assert_eq!(listing.page.page_count, 3);
        assert_eq!(listing.page.items[0].guest_name, "Trần Thị Mai");
    }

    #[tokio::test]
    async fn test_listing_requires_ownership() {
        let wedding = Wedding::new(UserId::new(), Slug::new("an-va-binh".into()).unwrap());
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        let rsvps = MockRsvpRepository::new();

        let (status, _) = execute(
            &weddings,
            &rsvps,
            ListRsvpsCommand {
                wedding_id,
                host_id: UserId::new(),
                filter: RsvpFilter::default(),
                page: PageParams::default(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
