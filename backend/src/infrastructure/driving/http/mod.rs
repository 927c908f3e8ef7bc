use axum::{http::StatusCode, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::infrastructure::AppState;

pub mod middleware;
pub mod banks;
pub mod invite;
pub mod studio;
pub mod deploy;
pub mod admin;
pub mod backoffice;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(banks::routes())
        .merge(invite::routes())
        .merge(studio::routes())
        .merge(deploy::routes())
        .merge(admin::routes())
        .merge(backoffice::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}
