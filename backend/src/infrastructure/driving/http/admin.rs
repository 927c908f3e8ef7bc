use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::admin::commands::{list_weddings, upsert_package, upsert_template};
use crate::application::errors;
use crate::application::pagination::PageParams;
use crate::domain::entities::package::Package;
use crate::domain::entities::template::Template;
use crate::domain::value_objects::UserRole;
use crate::infrastructure::driving::http::middleware::auth::AuthenticatedUser;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct WeddingListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct TemplateRequest {
    pub name: String,
    pub branch: String,
    pub thumbnail_url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Deserialize)]
pub struct PackageRequest {
    pub name: String,
    pub price_vnd: i64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub template_ids: Vec<Uuid>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Serialize)]
pub struct TemplateView {
    pub id: Uuid,
    pub name: String,
    pub branch: String,
    pub thumbnail_url: String,
    pub enabled: bool,
}

#[derive(Serialize)]
pub struct PackageView {
    pub id: Uuid,
    pub name: String,
    pub price_vnd: i64,
    pub features: Vec<String>,
    pub template_ids: Vec<Uuid>,
    pub enabled: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/weddings", get(weddings))
        .route(
            "/api/admin/templates",
            get(list_templates).post(create_template),
        )
        .route("/api/admin/templates/:id", put(update_template))
        .route(
            "/api/admin/packages",
            get(list_packages).post(create_package),
        )
        .route("/api/admin/packages/:id", put(update_package))
}

async fn weddings(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<WeddingListQuery>,
) -> Result<Json<list_weddings::WeddingListing>, (StatusCode, String)> {
    user.require(UserRole::Admin)?;
    let listing = list_weddings::execute(
        &*state.weddings,
        list_weddings::ListWeddingsCommand {
            status: query.status,
            slug_search: query.search,
            page: PageParams::new(query.page, query.page_size),
        },
    )
    .await?;
    Ok(Json(listing))
}

async fn list_templates(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<TemplateView>>, (StatusCode, String)> {
    user.require(UserRole::Admin)?;
    let templates = state
        .templates
        .list(false)
        .await
        .map_err(errors::internal)?;
    Ok(Json(templates.into_iter().map(template_view).collect()))
}

async fn create_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<TemplateRequest>,
) -> Result<(StatusCode, Json<TemplateView>), (StatusCode, String)> {
    user.require(UserRole::Admin)?;
    let template = upsert_template::execute(
        &*state.templates,
        upsert_template::UpsertTemplateCommand {
            id: None,
            name: payload.name,
            branch: payload.branch,
            thumbnail_url: payload.thumbnail_url,
            enabled: payload.enabled,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(template_view(template))))
}

async fn update_template(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<TemplateRequest>,
) -> Result<Json<TemplateView>, (StatusCode, String)> {
    user.require(UserRole::Admin)?;
    let template = upsert_template::execute(
        &*state.templates,
        upsert_template::UpsertTemplateCommand {
            id: Some(id),
            name: payload.name,
            branch: payload.branch,
            thumbnail_url: payload.thumbnail_url,
            enabled: payload.enabled,
        },
    )
    .await?;
    Ok(Json(template_view(template)))
}

async fn list_packages(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<PackageView>>, (StatusCode, String)> {
    user.require(UserRole::Admin)?;
    let packages = state.packages.list(false).await.map_err(errors::internal)?;
    Ok(Json(packages.into_iter().map(package_view).collect()))
}

async fn create_package(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<PackageRequest>,
) -> Result<(StatusCode, Json<PackageView>), (StatusCode, String)> {
    user.require(UserRole::Admin)?;
    let package = upsert_package::execute(
        &*state.packages,
        &*state.templates,
        upsert_package::UpsertPackageCommand {
            id: None,
            name: payload.name,
            price_vnd: payload.price_vnd,
            features: payload.features,
            template_ids: payload.template_ids,
            enabled: payload.enabled,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(package_view(package))))
}

async fn update_package(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<PackageRequest>,
) -> Result<Json<PackageView>, (StatusCode, String)> {
    user.require(UserRole::Admin)?;
    let package = upsert_package::execute(
        &*state.packages,
        &*state.templates,
        upsert_package::UpsertPackageCommand {
            id: Some(id),
            name: payload.name,
            price_vnd: payload.price_vnd,
            features: payload.features,
            template_ids: payload.template_ids,
            enabled: payload.enabled,
        },
    )
    .await?;
    Ok(Json(package_view(package)))
}

fn template_view(template: Template) -> TemplateView {
    TemplateView {
        id: template.id,
        name: template.name,
        branch: template.branch,
        thumbnail_url: template.thumbnail_url,
        enabled: template.enabled,
    }
}

fn package_view(package: Package) -> PackageView {
    PackageView {
        id: package.id,
        name: package.name,
        price_vnd: package.price_vnd,
        features: package.features,
        template_ids: package.template_ids,
        enabled: package.enabled,
    }
}
