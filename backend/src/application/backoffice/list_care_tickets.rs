use crate::application::errors::{self, CommandError};
use crate::application::pagination::{Page, PageParams};
use crate::application::ports::{BackofficeData, CareTicket, TicketStatus};

pub async fn execute(
    data: &dyn BackofficeData,
    status: Option<&str>,
    page: PageParams,
) -> Result<Page<CareTicket>, CommandError> {
    let status = status
        .map(|s| {
            TicketStatus::parse(s)
                .ok_or_else(|| errors::bad_request(format!("Unknown ticket status: {s}")))
        })
        .transpose()?;

    let mut tickets = data.care_tickets().await.map_err(errors::internal)?;
    if let Some(status) = status {
        tickets.retain(|t| t.status == status);
    }
    tickets.sort_by(|a, b| b.opened_at.cmp(&a.opened_at));

    Ok(Page::from_slice(&tickets, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::backoffice_data::MockBackofficeData;
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn tickets() -> Vec<CareTicket> {
        let statuses = [TicketStatus::Open, TicketStatus::Pending, TicketStatus::Resolved];
        (0..9)
            .map(|i| CareTicket {
                id: Uuid::new_v4(),
                host_email: crate::domain::value_objects::Email::new(format!(
                    "host{i}@example.com"
                ))
                .unwrap(),
                subject: "Không đổi được ảnh bìa".to_string(),
                status: statuses[i % 3],
                opened_at: Utc::now() - Duration::hours(i as i64),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_filters_by_status() {
        let mut data = MockBackofficeData::new();
        data.expect_care_tickets().returning(|| Ok(tickets()));

        let page = execute(&data, Some("open"), PageParams::default())
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert!(page.items.iter().all(|t| t.status == TicketStatus::Open));
    }

    #[tokio::test]
    async fn test_unknown_status_rejected() {
        let data = MockBackofficeData::new();
        let (status, _) = execute(&data, Some("escalated"), PageParams::default())
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
