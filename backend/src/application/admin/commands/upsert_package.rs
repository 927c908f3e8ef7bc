use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::ports::{PackageRepository, TemplateRepository};
use crate::domain::entities::package::Package;

pub struct UpsertPackageCommand {
    pub id: Option<Uuid>,
    pub name: String,
    pub price_vnd: i64,
    pub features: Vec<String>,
    pub template_ids: Vec<Uuid>,
    pub enabled: bool,
}

pub async fn execute(
    packages: &dyn PackageRepository,
    templates: &dyn TemplateRepository,
    cmd: UpsertPackageCommand,
) -> Result<Package, CommandError> {
    let name = cmd.name.trim().to_string();
    if name.is_empty() {
        return Err(errors::bad_request("Package name cannot be blank"));
    }
    if cmd.price_vnd < 0 {
        return Err(errors::bad_request("Price cannot be negative"));
    }
    for template_id in &cmd.template_ids {
        templates
            .find_by_id(template_id)
            .await
            .map_err(errors::internal)?
            .ok_or_else(|| {
                errors::bad_request(format!("Unknown template in package: {template_id}"))
            })?;
    }

    let features: Vec<String> = cmd
        .features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();

    let mut package = match cmd.id {
        Some(id) => packages
            .find_by_id(&id)
            .await
            .map_err(errors::internal)?
            .ok_or_else(|| errors::not_found("Package"))?,
        None => Package::new(name.clone(), cmd.price_vnd, vec![], vec![]),
    };
    package.name = name;
    package.price_vnd = cmd.price_vnd;
    package.features = features;
    package.template_ids = cmd.template_ids;
    package.enabled = cmd.enabled;

    packages.save(&package).await.map_err(errors::internal)?;
    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::package_repository::MockPackageRepository;
    use crate::application::ports::template_repository::MockTemplateRepository;
    use crate::domain::entities::template::Template;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_rejects_unknown_template_reference() {
        let packages = MockPackageRepository::new();
        let mut templates = MockTemplateRepository::new();
        templates.expect_find_by_id().returning(|_| Ok(None));

        let (status, message) = execute(
            &packages,
            &templates,
            UpsertPackageCommand {
                id: None,
                name: "Cao cấp".to_string(),
                price_vnd: 590_000,
                features: vec![],
                template_ids: vec![Uuid::new_v4()],
                enabled: true,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("template"));
    }

    #[tokio::test]
    async fn test_creates_package_with_trimmed_features() {
        let mut packages = MockPackageRepository::new();
        packages.expect_save().returning(|_| Ok(()));
        let mut templates = MockTemplateRepository::new();
        let theme = Template::new(
            "Mẫu Đơn".to_string(),
            "theme/mau-don".to_string(),
            "https://media.example/thumbs/mau-don.jpg".to_string(),
        );
        let theme_id = theme.id;
        templates
            .expect_find_by_id()
            .returning(move |_| Ok(Some(theme.clone())));

        let package = execute(
            &packages,
            &templates,
            UpsertPackageCommand {
                id: None,
                name: "Cao cấp".to_string(),
                price_vnd: 590_000,
                features: vec!["  Album không giới hạn ".to_string(), "".to_string()],
                template_ids: vec![theme_id],
                enabled: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(package.features, vec!["Album không giới hạn".to_string()]);
        assert!(package.unlocks_template(&theme_id));
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let packages = MockPackageRepository::new();
        let templates = MockTemplateRepository::new();
        let (status, _) = execute(
            &packages,
            &templates,
            UpsertPackageCommand {
                id: None,
                name: "Cơ bản".to_string(),
                price_vnd: -1,
                features: vec![],
                template_ids: vec![],
                enabled: true,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
