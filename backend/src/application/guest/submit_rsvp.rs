use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::ports::{RsvpRepository, WeddingRepository};
use crate::domain::entities::rsvp::Rsvp;
use crate::domain::events::{DomainEvent, RsvpSubmitted};

const MAX_PARTY_SIZE: i32 = 20;
const MAX_WISH_CHARS: usize = 500;

pub struct SubmitRsvpCommand {
    pub slug: String,
    pub guest_name: String,
    pub attending: bool,
    pub party_size: i32,
    pub wish: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct SubmitRsvpResult {
    pub rsvp_id: Uuid,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    rsvps: &dyn RsvpRepository,
    cmd: SubmitRsvpCommand,
) -> Result<SubmitRsvpResult, CommandError> {
    let wedding = weddings
        .find_by_slug(&cmd.slug)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Invitation"))?;
    if !wedding.is_live() {
        return Err(errors::conflict("This invitation is not accepting responses yet"));
    }

    if cmd.attending && cmd.party_size > MAX_PARTY_SIZE {
        return Err(errors::bad_request(format!(
            "Party size cannot exceed {MAX_PARTY_SIZE}"
        )));
    }
    if let Some(wish) = &cmd.wish {
        if wish.chars().count() > MAX_WISH_CHARS {
            return Err(errors::bad_request(format!(
                "Wish cannot exceed {MAX_WISH_CHARS} characters"
            )));
        }
    }

    let rsvp = Rsvp::new(
        wedding.id,
        cmd.guest_name,
        cmd.attending,
        cmd.party_size,
        cmd.wish,
    )
    .map_err(errors::bad_request)?;
    rsvps.save(&rsvp).await.map_err(errors::internal)?;

    let event = DomainEvent::new(RsvpSubmitted {
        wedding_id: wedding.id,
        rsvp_id: rsvp.id,
        attending: rsvp.attending,
        party_size: rsvp.party_size,
    });
    tracing::info!(
        wedding_id = %event.data.wedding_id,
        rsvp_id = %event.data.rsvp_id,
        attending = event.data.attending,
        "rsvp submitted"
    );

    Ok(SubmitRsvpResult { rsvp_id: rsvp.id })
}
