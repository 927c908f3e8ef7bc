use serde::{Deserialize, Serialize};
use std::fmt;

/// Public URL key of a wedding page, e.g. `an-va-binh-2026`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    pub fn new(slug: String) -> Result<Self, String> {
        let slug = slug.trim().to_lowercase();
        if slug.len() < 3 || slug.len() > 63 {
            return Err("Slug must be between 3 and 63 characters".to_string());
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err("Slug may only contain a-z, 0-9 and '-'".to_string());
        }
        if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
            return Err("Slug cannot start or end with '-' or contain '--'".to_string());
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_slug() {
        let slug = Slug::new("An-Va-Binh-2026".to_string()).unwrap();
        assert_eq!(slug.as_str(), "an-va-binh-2026");
    }

    #[test]
    fn test_rejects_bad_characters_and_shape() {
        assert!(Slug::new("ăn-cưới".to_string()).is_err());
        assert!(Slug::new("a".to_string()).is_err());
        assert!(Slug::new("-leading".to_string()).is_err());
        assert!(Slug::new("trailing-".to_string()).is_err());
        assert!(Slug::new("double--dash".to_string()).is_err());
        assert!(Slug::new("under_score".to_string()).is_err());
    }
}
