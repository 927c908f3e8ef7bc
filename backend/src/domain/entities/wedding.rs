use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{BankAccount, Slug, UserId};

/// Wedding aggregate root
/// Owns the page content a host edits in the studio and the publication
/// lifecycle of the public invitation site.
#[derive(Debug, Clone)]
pub struct Wedding {
    pub id: Uuid,
    pub host_id: UserId,
    pub slug: Slug,
    pub template_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
    /// Free-form page blob (couple names, date, venue, schedule...).
    pub content: serde_json::Value,
    pub gift_account: Option<BankAccount>,
    pub album: Vec<Photo>,
    /// Token baked into the private guest link; allows previewing the page
    /// before it is published.
    pub guest_link_token: String,
    pub deployment: DeploymentStatus,
    pub site_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An album image hosted on the media CDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub public_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Draft,
    Building,
    Published,
    Failed,
}

impl DeploymentStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            DeploymentStatus::Draft => "draft",
            DeploymentStatus::Building => "building",
            DeploymentStatus::Published => "published",
            DeploymentStatus::Failed => "failed",
        }
    }

    pub fn from_db_str(s: &str) -> Result<Self, String> {
        match s {
            "draft" => Ok(DeploymentStatus::Draft),
            "building" => Ok(DeploymentStatus::Building),
            "published" => Ok(DeploymentStatus::Published),
            "failed" => Ok(DeploymentStatus::Failed),
            other => Err(format!("Unknown deployment status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move deployment from {from:?} to {to:?}")]
pub struct DeploymentStateError {
    pub from: DeploymentStatus,
    pub to: DeploymentStatus,
}

impl Wedding {
    pub fn new(host_id: UserId, slug: Slug) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            host_id,
            slug,
            template_id: None,
            package_id: None,
            content: serde_json::json!({}),
            gift_account: None,
            album: Vec::new(),
            guest_link_token: generate_guest_link_token(),
            deployment: DeploymentStatus::Draft,
            site_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Host asked for a (re)publish. Valid from `Draft`, `Published` and
    /// `Failed`; a build already in flight cannot be restarted.
    pub fn begin_publish(&mut self) -> Result<(), DeploymentStateError> {
        match self.deployment {
            DeploymentStatus::Draft | DeploymentStatus::Published | DeploymentStatus::Failed => {
                self.deployment = DeploymentStatus::Building;
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(DeploymentStateError {
                from,
                to: DeploymentStatus::Building,
            }),
        }
    }

    /// Builder reported a successful deploy.
    pub fn mark_published(&mut self, site_url: String) -> Result<(), DeploymentStateError> {
        match self.deployment {
            DeploymentStatus::Building => {
                self.deployment = DeploymentStatus::Published;
                self.site_url = Some(site_url);
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(DeploymentStateError {
                from,
                to: DeploymentStatus::Published,
            }),
        }
    }

    /// Builder reported a failed deploy.
    pub fn mark_failed(&mut self) -> Result<(), DeploymentStateError> {
        match self.deployment {
            DeploymentStatus::Building => {
                self.deployment = DeploymentStatus::Failed;
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(DeploymentStateError {
                from,
                to: DeploymentStatus::Failed,
            }),
        }
    }

    /// Guests can reach the page without the guest link only once published.
    pub fn is_live(&self) -> bool {
        self.deployment == DeploymentStatus::Published
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.host_id == user_id
    }

    pub fn find_photo(&self, public_id: &str) -> Option<&Photo> {
        self.album.iter().find(|p| p.public_id == public_id)
    }

    pub fn remove_photo(&mut self, public_id: &str) -> Option<Photo> {
        let idx = self.album.iter().position(|p| p.public_id == public_id)?;
        self.updated_at = Utc::now();
        Some(self.album.remove(idx))
    }
}

fn generate_guest_link_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(22)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_wedding() -> Wedding {
        Wedding::new(
            UserId::new(),
            Slug::new("an-va-binh".to_string()).unwrap(),
        )
    }

    #[test]
    fn test_new_wedding_starts_as_draft() {
        let wedding = draft_wedding();
        assert_eq!(wedding.deployment, DeploymentStatus::Draft);
        assert!(wedding.site_url.is_none());
        assert!(!wedding.is_live());
        assert_eq!(wedding.guest_link_token.len(), 22);
    }

    #[test]
    fn test_publish_lifecycle() {
        let mut wedding = draft_wedding();

        wedding.begin_publish().unwrap();
        assert_eq!(wedding.deployment, DeploymentStatus::Building);

        wedding
            .mark_published("https://thiep.example/an-va-binh".to_string())
            .unwrap();
        assert!(wedding.is_live());
        assert_eq!(
            wedding.site_url.as_deref(),
            Some("https://thiep.example/an-va-binh")
        );

        // Republish after edits
        wedding.begin_publish().unwrap();
        assert_eq!(wedding.deployment, DeploymentStatus::Building);
    }

    #[test]
    fn test_failed_build_can_be_retried() {
        let mut wedding = draft_wedding();
        wedding.begin_publish().unwrap();
        wedding.mark_failed().unwrap();
        assert_eq!(wedding.deployment, DeploymentStatus::Failed);

        wedding.begin_publish().unwrap();
        assert_eq!(wedding.deployment, DeploymentStatus::Building);
    }

    #[test]
    fn test_cannot_publish_while_building() {
        let mut wedding = draft_wedding();
        wedding.begin_publish().unwrap();

        let err = wedding.begin_publish().unwrap_err();
        assert_eq!(err.from, DeploymentStatus::Building);
    }

    #[test]
    fn test_build_outcome_requires_building_state() {
        let mut wedding = draft_wedding();
        assert!(wedding.mark_published("x".to_string()).is_err());
        assert!(wedding.mark_failed().is_err());
        assert_eq!(wedding.deployment, DeploymentStatus::Draft);
    }

    #[test]
    fn test_deployment_status_db_round_trip() {
        for status in [
            DeploymentStatus::Draft,
            DeploymentStatus::Building,
            DeploymentStatus::Published,
            DeploymentStatus::Failed,
        ] {
            assert_eq!(
                DeploymentStatus::from_db_str(status.as_db_str()).unwrap(),
                status
            );
        }
        assert!(DeploymentStatus::from_db_str("queued").is_err());
    }

    #[test]
    fn test_remove_photo() {
        let mut wedding = draft_wedding();
        wedding.album.push(Photo {
            public_id: "album/abc123".to_string(),
            url: "https://media.example/album/abc123.jpg".to_string(),
        });

        assert!(wedding.remove_photo("album/missing").is_none());
        let removed = wedding.remove_photo("album/abc123").unwrap();
        assert_eq!(removed.public_id, "album/abc123");
        assert!(wedding.album.is_empty());
    }
}
