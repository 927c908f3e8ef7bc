use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::application::backoffice::{finance_summary, list_care_tickets, list_payments};
use crate::application::pagination::{Page, PageParams};
use crate::application::ports::{CareTicket, Payment};
use crate::domain::value_objects::UserRole;
use crate::infrastructure::driving::http::middleware::auth::AuthenticatedUser;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct PaymentListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub package: Option<String>,
}

#[derive(Deserialize)]
pub struct TicketListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/finance/summary", get(summary))
        .route("/api/admin/finance/payments", get(payments))
        .route("/api/admin/care/tickets", get(tickets))
}

async fn summary(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<finance_summary::FinanceSummary>, (StatusCode, String)> {
    user.require_any(&[UserRole::Finance, UserRole::Admin])?;
    let summary = finance_summary::execute(&*state.backoffice).await?;
    Ok(Json(summary))
}

async fn payments(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<PaymentListQuery>,
) -> Result<Json<Page<Payment>>, (StatusCode, String)> {
    user.require_any(&[UserRole::Finance, UserRole::Admin])?;
    let page = list_payments::execute(
        &*state.backoffice,
        query.package.as_deref(),
        PageParams::new(query.page, query.page_size),
    )
    .await?;
    Ok(Json(page))
}

async fn tickets(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<Page<CareTicket>>, (StatusCode, String)> {
    user.require_any(&[UserRole::CustomerCare, UserRole::Admin])?;
    let page = list_care_tickets::execute(
        &*state.backoffice,
        query.status.as_deref(),
        PageParams::new(query.page, query.page_size),
    )
    .await?;
    Ok(Json(page))
}
