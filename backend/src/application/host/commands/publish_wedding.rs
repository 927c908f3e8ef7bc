use shared::protocol::BuildRequest;
use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::ports::{SiteDeployer, TemplateRepository, WeddingRepository};
use crate::domain::entities::wedding::DeploymentStatus;
use crate::domain::value_objects::UserId;

pub struct PublishWeddingCommand {
    pub wedding_id: Uuid,
    pub host_id: UserId,
}

#[derive(Debug, serde::Serialize)]
pub struct PublishView {
    pub deployment: DeploymentStatus,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    templates: &dyn TemplateRepository,
    deployer: &dyn SiteDeployer,
    cmd: PublishWeddingCommand,
    callback_url: &str,
) -> Result<PublishView, CommandError> {
    let mut wedding = weddings
        .find_by_id(&cmd.wedding_id)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Wedding"))?;
    if !wedding.is_owned_by(&cmd.host_id) {
        return Err(errors::forbidden("This wedding belongs to another host"));
    }

    let template_id = wedding
        .template_id
        .ok_or_else(|| errors::bad_request("Select a template before publishing"))?;
    let template = templates
        .find_by_id(&template_id)
        .await
        .map_err(errors::internal)?
        .filter(|t| t.enabled)
        .ok_or_else(|| errors::bad_request("The selected template is no longer available"))?;

    wedding.begin_publish().map_err(errors::conflict)?;
    weddings
        .update_deployment(&wedding.id, DeploymentStatus::Building, None)
        .await
        .map_err(errors::internal)?;

    let request = BuildRequest {
        wedding_id: wedding.id,
        slug: wedding.slug.to_string(),
        template_branch: template.branch,
        content: wedding.content.clone(),
        album: wedding.album.iter().map(|p| p.url.clone()).collect(),
        callback_url: callback_url.to_string(),
    };

    if let Err(e) = deployer.trigger(request).await {
        // Leave the wedding retryable instead of stuck in Building.
        tracing::error!(wedding_id = %wedding.id, "deploy trigger failed: {e}");
        weddings
            .update_deployment(&wedding.id, DeploymentStatus::Failed, None)
            .await
            .map_err(errors::internal)?;
        return Err(errors::internal(e));
    }

    tracing::info!(wedding_id = %wedding.id, slug = %wedding.slug, "build triggered");
    Ok(PublishView {
        deployment: DeploymentStatus::Building,
    })
}
