use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Host,
    Admin,
    Finance,
    CustomerCare,
}

impl UserRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "host" => Some(UserRole::Host),
            "admin" => Some(UserRole::Admin),
            "finance" => Some(UserRole::Finance),
            "customer_care" => Some(UserRole::CustomerCare),
            _ => None,
        }
    }
}
