use url::Url;
use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::ports::TemplateRepository;
use crate::domain::entities::template::Template;

/// Create (`id: None`) or update (`id: Some`) a theme.
pub struct UpsertTemplateCommand {
    pub id: Option<Uuid>,
    pub name: String,
    pub branch: String,
    pub thumbnail_url: String,
    pub enabled: bool,
}

pub async fn execute(
    templates: &dyn TemplateRepository,
    cmd: UpsertTemplateCommand,
) -> Result<Template, CommandError> {
    let name = cmd.name.trim().to_string();
    if name.is_empty() {
        return Err(errors::bad_request("Template name cannot be blank"));
    }
    let branch = cmd.branch.trim().to_string();
    if branch.is_empty() {
        return Err(errors::bad_request("Template branch cannot be blank"));
    }
    let thumbnail = Url::parse(&cmd.thumbnail_url)
        .map_err(|e| errors::bad_request(format!("Invalid thumbnail URL: {e}")))?;
    if thumbnail.scheme() != "https" && thumbnail.scheme() != "http" {
        return Err(errors::bad_request("Thumbnail URL must be http(s)"));
    }

    let mut template = match cmd.id {
        Some(id) => templates
            .find_by_id(&id)
            .await
            .map_err(errors::internal)?
            .ok_or_else(|| errors::not_found("Template"))?,
        None => Template::new(name.clone(), branch.clone(), cmd.thumbnail_url.clone()),
    };
    template.name = name;
    template.branch = branch;
    template.thumbnail_url = cmd.thumbnail_url;
    template.enabled = cmd.enabled;

    templates.save(&template).await.map_err(errors::internal)?;
    Ok(template)
}
