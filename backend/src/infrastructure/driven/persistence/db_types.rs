use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::package::Package;
use crate::domain::entities::rsvp::Rsvp;
use crate::domain::entities::template::Template;
use crate::domain::entities::wedding::{DeploymentStatus, Photo, Wedding};
use crate::domain::value_objects::{BankAccount, Slug, UserId};

#[derive(Debug, FromRow)]
pub struct WeddingRow {
    pub id: Uuid,
    pub host_id: Uuid,
    pub slug: String,
    pub template_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
    pub content: serde_json::Value,
    pub gift_bin: Option<String>,
    pub gift_number: Option<String>,
    pub gift_holder: Option<String>,
    pub album: serde_json::Value,
    pub guest_link_token: String,
    pub deployment: String,
    pub site_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeddingRow {
    pub fn into_wedding(self) -> Result<Wedding, String> {
        let slug = Slug::new(self.slug)?;
        let gift_account = match (self.gift_bin, self.gift_number, self.gift_holder) {
            (Some(bin), Some(number), Some(holder)) => Some(BankAccount::new(bin, number, holder)?),
            _ => None,
        };
        let album: Vec<Photo> = serde_json::from_value(self.album)
            .map_err(|e| format!("Failed to parse album: {e}"))?;
        let deployment = DeploymentStatus::from_db_str(&self.deployment)?;

        Ok(Wedding {
            id: self.id,
            host_id: UserId::from_uuid(self.host_id),
            slug,
            template_id: self.template_id,
            package_id: self.package_id,
            content: self.content,
            gift_account,
            album,
            guest_link_token: self.guest_link_token,
            deployment,
            site_url: self.site_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct RsvpRow {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub guest_name: String,
    pub attending: bool,
    pub party_size: i32,
    pub wish: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RsvpRow {
    pub fn into_rsvp(self) -> Rsvp {
        Rsvp {
            id: self.id,
            wedding_id: self.wedding_id,
            guest_name: self.guest_name,
            attending: self.attending,
            party_size: self.party_size,
            wish: self.wish,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TemplateRow {
    pub id: Uuid,
    pub name: String,
    pub branch: String,
    pub thumbnail_url: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl TemplateRow {
    pub fn into_template(self) -> Template {
        Template {
            id: self.id,
            name: self.name,
            branch: self.branch,
            thumbnail_url: self.thumbnail_url,
            enabled: self.enabled,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct PackageRow {
    pub id: Uuid,
    pub name: String,
    pub price_vnd: i64,
    pub features: serde_json::Value,
    pub template_ids: serde_json::Value,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl PackageRow {
    pub fn into_package(self) -> Result<Package, String> {
        let features: Vec<String> = serde_json::from_value(self.features)
            .map_err(|e| format!("Failed to parse features: {e}"))?;
        let template_ids: Vec<Uuid> = serde_json::from_value(self.template_ids)
            .map_err(|e| format!("Failed to parse template_ids: {e}"))?;
        Ok(Package {
            id: self.id,
            name: self.name,
            price_vnd: self.price_vnd,
            features,
            template_ids,
            enabled: self.enabled,
            created_at: self.created_at,
        })
    }
}
