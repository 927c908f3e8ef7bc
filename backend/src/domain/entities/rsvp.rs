use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A guest's attendance response for one wedding.
#[derive(Debug, Clone)]
pub struct Rsvp {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub guest_name: String,
    pub attending: bool,
    /// Number of seats the guest claims. Always 0 when not attending.
    pub party_size: i32,
    pub wish: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    /// Builds a response, enforcing the attendance/party-size invariant:
    /// declining zeroes the party size, accepting requires at least one seat.
    pub fn new(
        wedding_id: Uuid,
        guest_name: String,
        attending: bool,
        party_size: i32,
        wish: Option<String>,
    ) -> Result<Self, String> {
        let guest_name = guest_name.trim().to_string();
        if guest_name.is_empty() {
            return Err("Guest name cannot be blank".to_string());
        }
        let party_size = if attending {
            if party_size < 1 {
                return Err("Party size must be at least 1 when attending".to_string());
            }
            party_size
        } else {
            0
        };
        let wish = wish
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());
        Ok(Self {
            id: Uuid::new_v4(),
            wedding_id,
            guest_name,
            attending,
            party_size,
            wish,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let err = Rsvp::new(Uuid::new_v4(), "   ".to_string(), true, 2, None).unwrap_err();
        assert!(err.contains("blank"));
    }

    #[test]
    fn test_declining_zeroes_party_size() {
        let rsvp = Rsvp::new(
            Uuid::new_v4(),
            "Trần Thị Mai".to_string(),
            false,
            4,
            Some("Chúc hai bạn trăm năm hạnh phúc".to_string()),
        )
        .unwrap();
        assert!(!rsvp.attending);
        assert_eq!(rsvp.party_size, 0);
    }

    #[test]
    fn test_attending_requires_at_least_one_seat() {
        assert!(Rsvp::new(Uuid::new_v4(), "Mai".to_string(), true, 0, None).is_err());
        let rsvp = Rsvp::new(Uuid::new_v4(), "Mai".to_string(), true, 1, None).unwrap();
        assert_eq!(rsvp.party_size, 1);
    }

    #[test]
    fn test_empty_wish_is_dropped() {
        let rsvp = Rsvp::new(
            Uuid::new_v4(),
            "Mai".to_string(),
            true,
            2,
            Some("   ".to_string()),
        )
        .unwrap();
        assert!(rsvp.wish.is_none());
    }
}
