use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::protocol::InvitationPage;

use crate::application::guest::{submit_rsvp, view_invitation};
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct InviteQuery {
    pub guest_token: Option<String>,
}

#[derive(Deserialize)]
pub struct SubmitRsvpRequest {
    pub guest_name: String,
    pub attending: bool,
    #[serde(default)]
    pub party_size: i32,
    pub wish: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/invitations/:slug", get(view))
        .route("/api/invitations/:slug/rsvps", post(submit))
}

async fn view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<InviteQuery>,
) -> Result<Json<InvitationPage>, (StatusCode, String)> {
    let page = view_invitation::execute(
        &*state.weddings,
        &*state.templates,
        &slug,
        query.guest_token.as_deref(),
    )
    .await?;
    Ok(Json(page))
}

async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<SubmitRsvpRequest>,
) -> Result<(StatusCode, Json<submit_rsvp::SubmitRsvpResult>), (StatusCode, String)> {
    let result = submit_rsvp::execute(
        &*state.weddings,
        &*state.rsvps,
        submit_rsvp::SubmitRsvpCommand {
            slug,
            guest_name: payload.guest_name,
            attending: payload.attending,
            party_size: payload.party_size,
            wish: payload.wish,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(result)))
}
