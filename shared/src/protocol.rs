use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Build job sent from the studio server to the site builder webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    pub wedding_id: Uuid,
    /// Public URL key of the wedding; the builder publishes under this path.
    pub slug: String,
    /// Git branch of the selected template the builder checks out.
    pub template_branch: String,
    /// Free-form page content blob edited in the studio.
    pub content: serde_json::Value,
    /// Album image URLs already hosted on the media CDN.
    pub album: Vec<String>,
    /// Where the builder reports the build outcome.
    pub callback_url: String,
}

/// Outcome callback sent from the site builder back to the studio server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildEvent {
    pub wedding_id: Uuid,
    pub outcome: BuildOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BuildOutcome {
    /// Site is live at `site_url`.
    Succeeded { site_url: String },
    /// Build or deploy step failed; `reason` is shown in the studio.
    Failed { reason: String },
}

/// Payload the published invitation page renders.
///
/// This is what guests fetch; the bank block is omitted entirely when the
/// host has not configured a gift account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationPage {
    pub slug: String,
    pub template_branch: Option<String>,
    pub content: serde_json::Value,
    pub album: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<GiftBlock>,
    /// Relative path guests POST their RSVP to.
    pub rsvp_path: String,
}

/// Gift/bank details rendered as a VietQR block on the public page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GiftBlock {
    pub bank_short_name: String,
    /// VietQR BIN code of the bank.
    pub bank_bin: String,
    /// Account number grouped in blocks of four digits for display.
    pub account_number: String,
    pub account_holder: String,
}

/// Photo upload sent from the studio editor to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPhotoRequest {
    pub filename: String,
    pub content_type: String,
    #[serde(with = "base64_serde")]
    pub data: Vec<u8>,
}

/// Helper module for base64 encoding/decoding with serde
pub mod base64_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use base64::{engine::general_purpose::STANDARD, Engine};
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_outcome_wire_shape() {
        let event = BuildEvent {
            wedding_id: Uuid::new_v4(),
            outcome: BuildOutcome::Succeeded {
                site_url: "https://thiep.example/an-binh".to_string(),
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["outcome"]["type"], "succeeded");
        assert_eq!(json["outcome"]["site_url"], "https://thiep.example/an-binh");

        let back: BuildEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.outcome, event.outcome);
    }

    #[test]
    fn test_upload_photo_round_trips_base64() {
        let req = UploadPhotoRequest {
            filename: "album-01.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![0xff, 0xd8, 0xff, 0xe0],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"data\":\"/9j/4A==\""));

        let back: UploadPhotoRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data, req.data);
    }

    #[test]
    fn test_invitation_page_omits_empty_gift() {
        let page = InvitationPage {
            slug: "an-binh".to_string(),
            template_branch: Some("theme/mau-don".to_string()),
            content: serde_json::json!({ "groom": "An", "bride": "Bình" }),
            album: vec![],
            gift: None,
            rsvp_path: "/api/invitations/an-binh/rsvps".to_string(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("gift").is_none());
    }
}
