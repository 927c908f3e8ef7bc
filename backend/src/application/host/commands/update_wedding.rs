use uuid::Uuid;

use crate::application::errors::{self, CommandError};
use crate::application::ports::{PackageRepository, TemplateRepository, WeddingRepository};
use crate::domain::banks;
use crate::domain::entities::wedding::Wedding;
use crate::domain::value_objects::{BankAccount, UserId};

/// Full editable state of the studio form; each save replaces it wholesale.
pub struct UpdateWeddingCommand {
    pub wedding_id: Uuid,
    pub host_id: UserId,
    pub content: serde_json::Value,
    pub gift_account: Option<GiftAccountInput>,
    pub template_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
}

pub struct GiftAccountInput {
    pub bin: String,
    pub number: String,
    pub holder: String,
}

pub async fn execute(
    weddings: &dyn WeddingRepository,
    templates: &dyn TemplateRepository,
    packages: &dyn PackageRepository,
    cmd: UpdateWeddingCommand,
) -> Result<Wedding, CommandError> {
    let mut wedding = weddings
        .find_by_id(&cmd.wedding_id)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Wedding"))?;
    if !wedding.is_owned_by(&cmd.host_id) {
        return Err(errors::forbidden("This wedding belongs to another host"));
    }

    let gift_account = match cmd.gift_account {
        Some(input) => {
            let account = BankAccount::new(input.bin, input.number, input.holder)
                .map_err(errors::bad_request)?;
            if banks::lookup_by_bin(account.bin()).is_none() {
                return Err(errors::bad_request("Unknown bank BIN"));
            }
            Some(account)
        }
        None => None,
    };

    if let Some(template_id) = &cmd.template_id {
        let template = templates
            .find_by_id(template_id)
            .await
            .map_err(errors::internal)?
            .filter(|t| t.enabled)
            .ok_or_else(|| errors::not_found("Template"))?;

        // Templates are gated by the pricing tier.
        let package_id = cmd
            .package_id
            .as_ref()
            .ok_or_else(|| errors::bad_request("Selecting a template requires a package"))?;
        let package = packages
            .find_by_id(package_id)
            .await
            .map_err(errors::internal)?
            .filter(|p| p.enabled)
            .ok_or_else(|| errors::not_found("Package"))?;
        if !package.unlocks_template(&template.id) {
            return Err(errors::forbidden(format!(
                "Package '{}' does not include template '{}'",
                package.name, template.name
            )));
        }
    } else if let Some(package_id) = &cmd.package_id {
        packages
            .find_by_id(package_id)
            .await
            .map_err(errors::internal)?
            .filter(|p| p.enabled)
            .ok_or_else(|| errors::not_found("Package"))?;
    }

    wedding.content = cmd.content;
    wedding.gift_account = gift_account;
    wedding.template_id = cmd.template_id;
    wedding.package_id = cmd.package_id;
    wedding.updated_at = chrono::Utc::now();

    weddings.save(&wedding).await.map_err(errors::internal)?;
    Ok(wedding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::package_repository::MockPackageRepository;
    use crate::application::ports::template_repository::MockTemplateRepository;
    use crate::application::ports::wedding_repository::MockWeddingRepository;
    use crate::domain::entities::package::Package;
    use crate::domain::entities::template::Template;
    use crate::domain::value_objects::Slug;
    use axum::http::StatusCode;

    fn wedding_for(host_id: &UserId) -> Wedding {
        Wedding::new(host_id.clone(), Slug::new("an-va-binh".to_string()).unwrap())
    }

    fn base_cmd(wedding_id: Uuid, host_id: UserId) -> UpdateWeddingCommand {
        UpdateWeddingCommand {
            wedding_id,
            host_id,
            content: serde_json::json!({ "groom": "An", "bride": "Bình" }),
            gift_account: None,
            template_id: None,
            package_id: None,
        }
    }

    #[tokio::test]
    async fn test_other_hosts_cannot_edit() {
        let owner = UserId::new();
        let wedding = wedding_for(&owner);
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        let templates = MockTemplateRepository::new();
        let packages = MockPackageRepository::new();

        let (status, _) = execute(
            &weddings,
            &templates,
            &packages,
            base_cmd(wedding_id, UserId::new()),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_bank_bin_rejected() {
        let owner = UserId::new();
        let wedding = wedding_for(&owner);
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        let templates = MockTemplateRepository::new();
        let packages = MockPackageRepository::new();

        let mut cmd = base_cmd(wedding_id, owner);
        cmd.gift_account = Some(GiftAccountInput {
            bin: "123456".to_string(),
            number: "0123456789".to_string(),
            holder: "NGUYEN VAN AN".to_string(),
        });

        let (status, message) = execute(&weddings, &templates, &packages, cmd)
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("BIN"));
    }

    #[tokio::test]
    async fn test_template_outside_package_is_forbidden() {
        let owner = UserId::new();
        let wedding = wedding_for(&owner);
        let wedding_id = wedding.id;
        let template = Template::new(
            "Mẫu Đơn".to_string(),
            "theme/mau-don".to_string(),
            "https://media.example/thumbs/mau-don.jpg".to_string(),
        );
        let template_id = template.id;
        let package = Package::new("Cơ bản".to_string(), 290_000, vec![], vec![]);
        let package_id = package.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        let mut templates = MockTemplateRepository::new();
        templates
            .expect_find_by_id()
            .returning(move |_| Ok(Some(template.clone())));
        let mut packages = MockPackageRepository::new();
        packages
            .expect_find_by_id()
            .returning(move |_| Ok(Some(package.clone())));

        let mut cmd = base_cmd(wedding_id, owner);
        cmd.template_id = Some(template_id);
        cmd.package_id = Some(package_id);

        let (status, _) = execute(&weddings, &templates, &packages, cmd)
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_saves_gift_account_and_content() {
        let owner = UserId::new();
        let wedding = wedding_for(&owner);
        let wedding_id = wedding.id;

        let mut weddings = MockWeddingRepository::new();
        weddings
            .expect_find_by_id()
            .returning(move |_| Ok(Some(wedding.clone())));
        weddings.expect_save().returning(|_| Ok(()));
        let templates = MockTemplateRepository::new();
        let packages = MockPackageRepository::new();

        let mut cmd = base_cmd(wedding_id, owner);
        cmd.gift_account = Some(GiftAccountInput {
            bin: "970436".to_string(),
            number: "0123 4567 89".to_string(),
            holder: "NGUYEN VAN AN".to_string(),
        });

        let updated = execute(&weddings, &templates, &packages, cmd).await.unwrap();
        let account = updated.gift_account.unwrap();
        assert_eq!(account.number(), "0123456789");
        assert_eq!(updated.content["groom"], "An");
    }
}
