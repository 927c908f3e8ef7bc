use shared::protocol::{GiftBlock, InvitationPage};

use crate::application::errors::{self, CommandError};
use crate::application::ports::{TemplateRepository, WeddingRepository};
use crate::domain::banks;
use crate::domain::entities::wedding::Wedding;

/// Resolves the public page payload for a slug. Unpublished weddings are
/// only visible with the matching guest-link token (studio preview).
pub async fn execute(
    weddings: &dyn WeddingRepository,
    templates: &dyn TemplateRepository,
    slug: &str,
    guest_token: Option<&str>,
) -> Result<InvitationPage, CommandError> {
    let wedding = weddings
        .find_by_slug(slug)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Invitation"))?;

    let previewing = guest_token.is_some_and(|t| t == wedding.guest_link_token);
    if !wedding.is_live() && !previewing {
        return Err(errors::not_found("Invitation"));
    }

    let template_branch = match wedding.template_id {
        Some(template_id) => templates
            .find_by_id(&template_id)
            .await
            .map_err(errors::internal)?
            .map(|t| t.branch),
        None => None,
    };

    Ok(page_for(&wedding, template_branch))
}

fn page_for(wedding: &Wedding, template_branch: Option<String>) -> InvitationPage {
    let gift = wedding.gift_account.as_ref().and_then(|account| {
        banks::lookup_by_bin(account.bin()).map(|bank| GiftBlock {
            bank_short_name: bank.short_name.to_string(),
            bank_bin: account.bin().to_string(),
            account_number: account.grouped_number(),
            account_holder: account.holder().to_string(),
        })
    });

    InvitationPage {
        slug: wedding.slug.to_string(),
        template_branch,
        content: wedding.content.clone(),
        album: wedding.album.iter().map(|p| p.url.clone()).collect(),
        gift,
        rsvp_path: format!("/api/invitations/{}/rsvps", wedding.slug),
    }
}
