use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::application::ports::{BackofficeData, CareTicket, Payment, TicketStatus};
use crate::domain::value_objects::Email;

/// Deterministic stand-in for the billing and ticketing systems while the
/// back-office dashboards are developed against fixed data.
pub struct MockBackofficeLedger;

const PAYMENT_SEED: &[(&str, &str, i64, &str, (i32, u32, u32))] = &[
    ("an-va-binh", "Cao cấp", 590_000, "vietqr", (2026, 1, 12)),
    ("minh-va-thu", "Cơ bản", 290_000, "vietqr", (2026, 1, 28)),
    ("khoa-va-linh", "Cao cấp", 590_000, "card", (2026, 2, 3)),
    ("tuan-va-ha", "Cơ bản", 290_000, "vietqr", (2026, 2, 17)),
    ("duc-va-ngoc", "Cao cấp", 590_000, "vietqr", (2026, 3, 2)),
    ("long-va-trang", "Cao cấp", 590_000, "card", (2026, 3, 9)),
    ("hieu-va-van", "Cơ bản", 290_000, "vietqr", (2026, 3, 21)),
    ("nam-va-quynh", "Cao cấp", 590_000, "vietqr", (2026, 4, 5)),
    ("phuc-va-nhi", "Cơ bản", 290_000, "card", (2026, 4, 19)),
    ("quan-va-uyen", "Cao cấp", 590_000, "vietqr", (2026, 5, 8)),
];

const TICKET_SEED: &[(&str, &str, TicketStatus, (i32, u32, u32))] = &[
    ("anbinh@example.com", "Không đổi được ảnh bìa", TicketStatus::Open, (2026, 4, 2)),
    ("minhthu@example.com", "Trang khách báo lỗi 404", TicketStatus::Open, (2026, 4, 6)),
    ("khoalinh@example.com", "Muốn đổi gói Cơ bản lên Cao cấp", TicketStatus::Pending, (2026, 4, 8)),
    ("tuanha@example.com", "Sai số tài khoản mừng cưới", TicketStatus::Resolved, (2026, 3, 28)),
    ("ducngoc@example.com", "Link khách mời không mở được", TicketStatus::Resolved, (2026, 3, 30)),
    ("longtrang@example.com", "Xin xuất danh sách RSVP", TicketStatus::Pending, (2026, 4, 10)),
    ("hieuvan@example.com", "Đổi ngày cưới trên thiệp", TicketStatus::Open, (2026, 4, 12)),
];

impl MockBackofficeLedger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockBackofficeLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_date(y: i32, m: u32, d: u32, hour: u32) -> Result<DateTime<Utc>, String> {
    Utc.with_ymd_and_hms(y, m, d, hour, 30, 0)
        .single()
        .ok_or_else(|| format!("Invalid seed date: {y}-{m}-{d}"))
}

#[async_trait]
impl BackofficeData for MockBackofficeLedger {
    async fn payments(&self) -> Result<Vec<Payment>, String> {
        PAYMENT_SEED
            .iter()
            .enumerate()
            .map(|(i, (slug, package, amount, method, (y, m, d)))| {
                Ok(Payment {
                    id: Uuid::from_u128(0x5eed_0000_0000_0000 + i as u128),
                    wedding_slug: (*slug).to_string(),
                    package_name: (*package).to_string(),
                    amount_vnd: *amount,
                    method: (*method).to_string(),
                    paid_at: seed_date(*y, *m, *d, 9)?,
                })
            })
            .collect()
    }

    async fn care_tickets(&self) -> Result<Vec<CareTicket>, String> {
        TICKET_SEED
            .iter()
            .enumerate()
            .map(|(i, (email, subject, status, (y, m, d)))| {
                Ok(CareTicket {
                    id: Uuid::from_u128(0x71c7_0000_0000_0000 + i as u128),
                    host_email: Email::new((*email).to_string())?,
                    subject: (*subject).to_string(),
                    status: *status,
                    opened_at: seed_date(*y, *m, *d, 14)?,
                })
            })
            .collect()
    }
}
