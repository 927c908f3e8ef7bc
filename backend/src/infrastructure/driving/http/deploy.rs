use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use shared::protocol::BuildEvent;

use crate::application::deploy::record_build_event;
use crate::infrastructure::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/deploy/events", post(build_event))
}

/// Callback endpoint the site builder hits when a build settles. Guarded
/// by the shared callback token rather than a user session.
async fn build_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<BuildEvent>,
) -> Result<StatusCode, (StatusCode, String)> {
    let token = headers
        .get("X-Deploy-Token")
        .and_then(|v| v.to_str().ok())
        .ok_or((
            StatusCode::UNAUTHORIZED,
            "Missing X-Deploy-Token header".to_string(),
        ))?;
    if token != state.settings.deployer.callback_token {
        return Err((StatusCode::UNAUTHORIZED, "Invalid deploy token".to_string()));
    }

    record_build_event::execute(&*state.weddings, event).await?;
    Ok(StatusCode::NO_CONTENT)
}
