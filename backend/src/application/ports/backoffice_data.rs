use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::value_objects::Email;

/// A settled order in the billing ledger.
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: Uuid,
    pub wedding_slug: String,
    pub package_name: String,
    pub amount_vnd: i64,
    pub method: String,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
}

impl TicketStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TicketStatus::Open),
            "pending" => Some(TicketStatus::Pending),
            "resolved" => Some(TicketStatus::Resolved),
            _ => None,
        }
    }
}

/// A customer-care ticket.
#[derive(Debug, Clone, Serialize)]
pub struct CareTicket {
    pub id: Uuid,
    pub host_email: Email,
    pub subject: String,
    pub status: TicketStatus,
    pub opened_at: DateTime<Utc>,
}

/// Source of the back-office dashboard data. Currently fed by the mock
/// ledger; the billing and ticketing integrations will implement this.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackofficeData: Send + Sync {
    async fn payments(&self) -> Result<Vec<Payment>, String>;
    async fn care_tickets(&self) -> Result<Vec<CareTicket>, String>;
}
