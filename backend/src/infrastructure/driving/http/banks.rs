use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::banks;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct BankQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct BankView {
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub bin: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/banks", get(search_banks))
}

/// Bank picker for the studio's gift-account form.
async fn search_banks(Query(query): Query<BankQuery>) -> Json<Vec<BankView>> {
    let results = banks::search(query.q.as_deref().unwrap_or(""));
    Json(
        results
            .into_iter()
            .map(|bank| BankView {
                short_name: bank.short_name,
                full_name: bank.full_name,
                bin: bank.bin,
            })
            .collect(),
    )
}
