use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::errors;
use crate::application::host::commands::{
    create_wedding, delete_photo, list_rsvps, publish_wedding, update_wedding, upload_photo,
};
use crate::application::pagination::PageParams;
use crate::application::ports::RsvpFilter;
use crate::domain::entities::wedding::{DeploymentStatus, Photo, Wedding};
use crate::domain::value_objects::UserRole;
use crate::infrastructure::config::Settings;
use crate::infrastructure::driving::http::middleware::auth::AuthenticatedUser;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct CreateWeddingRequest {
    pub slug: String,
}

#[derive(Deserialize)]
pub struct UpdateWeddingRequest {
    pub content: serde_json::Value,
    pub gift_account: Option<GiftAccountRequest>,
    pub template_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct GiftAccountRequest {
    pub bin: String,
    pub number: String,
    pub holder: String,
}

#[derive(Deserialize)]
pub struct RsvpListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub attending: Option<bool>,
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct WeddingView {
    pub id: Uuid,
    pub slug: String,
    pub template_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
    pub content: serde_json::Value,
    pub gift_account: Option<GiftAccountView>,
    pub album: Vec<Photo>,
    /// Shareable preview link carrying the guest token.
    pub guest_link: String,
    pub deployment: DeploymentStatus,
    pub site_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct GiftAccountView {
    pub bin: String,
    pub number: String,
    pub holder: String,
}

#[derive(Serialize)]
pub struct TemplateOption {
    pub id: Uuid,
    pub name: String,
    pub thumbnail_url: String,
}

#[derive(Serialize)]
pub struct PackageOption {
    pub id: Uuid,
    pub name: String,
    pub price_vnd: i64,
    pub features: Vec<String>,
    pub template_ids: Vec<Uuid>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/studio/weddings", post(create).get(mine))
        .route("/api/studio/weddings/:id", get(get_one).put(update))
        .route("/api/studio/weddings/:id/publish", post(publish))
        .route("/api/studio/weddings/:id/rsvps", get(rsvps))
        .route("/api/studio/weddings/:id/photos", post(add_photo))
        .route(
            "/api/studio/weddings/:id/photos/*public_id",
            delete(remove_photo),
        )
        .route("/api/studio/templates", get(template_options))
        .route("/api/studio/packages", get(package_options))
}

async fn create(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateWeddingRequest>,
) -> Result<(StatusCode, Json<WeddingView>), (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let wedding = create_wedding::execute(
        &*state.weddings,
        create_wedding::CreateWeddingCommand {
            host_id: user.id,
            slug: payload.slug,
        },
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(wedding_view(&state.settings, wedding)),
    ))
}

async fn mine(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<WeddingView>>, (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let weddings = state
        .weddings
        .find_by_host(&user.id)
        .await
        .map_err(errors::internal)?;
    Ok(Json(
        weddings
            .into_iter()
            .map(|w| wedding_view(&state.settings, w))
            .collect(),
    ))
}

async fn get_one(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<WeddingView>, (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let wedding = state
        .weddings
        .find_by_id(&id)
        .await
        .map_err(errors::internal)?
        .ok_or_else(|| errors::not_found("Wedding"))?;
    if !wedding.is_owned_by(&user.id) {
        return Err(errors::forbidden("This wedding belongs to another host"));
    }
    Ok(Json(wedding_view(&state.settings, wedding)))
}

async fn update(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWeddingRequest>,
) -> Result<Json<WeddingView>, (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let wedding = update_wedding::execute(
        &*state.weddings,
        &*state.templates,
        &*state.packages,
        update_wedding::UpdateWeddingCommand {
            wedding_id: id,
            host_id: user.id,
            content: payload.content,
            gift_account: payload.gift_account.map(|g| {
                update_wedding::GiftAccountInput {
                    bin: g.bin,
                    number: g.number,
                    holder: g.holder,
                }
            }),
            template_id: payload.template_id,
            package_id: payload.package_id,
        },
    )
    .await?;
    Ok(Json(wedding_view(&state.settings, wedding)))
}

async fn publish(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<publish_wedding::PublishView>), (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let view = publish_wedding::execute(
        &*state.weddings,
        &*state.templates,
        &*state.deployer,
        publish_wedding::PublishWeddingCommand {
            wedding_id: id,
            host_id: user.id,
        },
        &state.settings.deploy_callback_url(),
    )
    .await?;
    Ok((StatusCode::ACCEPTED, Json(view)))
}

async fn rsvps(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<RsvpListQuery>,
) -> Result<Json<list_rsvps::RsvpListing>, (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let listing = list_rsvps::execute(
        &*state.weddings,
        &*state.rsvps,
        list_rsvps::ListRsvpsCommand {
            wedding_id: id,
            host_id: user.id,
            filter: RsvpFilter {
                attending: query.attending,
                search: query.search,
            },
            page: PageParams::new(query.page, query.page_size),
        },
    )
    .await?;
    Ok(Json(listing))
}

async fn add_photo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<shared::protocol::UploadPhotoRequest>,
) -> Result<(StatusCode, Json<Photo>), (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let photo = upload_photo::execute(
        &*state.weddings,
        &*state.media,
        upload_photo::UploadPhotoCommand {
            wedding_id: id,
            host_id: user.id,
            filename: payload.filename,
            content_type: payload.content_type,
            data: payload.data,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

async fn remove_photo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path((id, public_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, (StatusCode, String)> {
    user.require(UserRole::Host)?;
    delete_photo::execute(
        &*state.weddings,
        &*state.media,
        delete_photo::DeletePhotoCommand {
            wedding_id: id,
            host_id: user.id,
            public_id,
        },
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Enabled templates for the studio's theme picker.
async fn template_options(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<TemplateOption>>, (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let templates = state
        .templates
        .list(true)
        .await
        .map_err(errors::internal)?;
    Ok(Json(
        templates
            .into_iter()
            .map(|t| TemplateOption {
                id: t.id,
                name: t.name,
                thumbnail_url: t.thumbnail_url,
            })
            .collect(),
    ))
}

/// Enabled packages for the studio's upgrade screen.
async fn package_options(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<PackageOption>>, (StatusCode, String)> {
    user.require(UserRole::Host)?;
    let packages = state.packages.list(true).await.map_err(errors::internal)?;
    Ok(Json(
        packages
            .into_iter()
            .map(|p| PackageOption {
                id: p.id,
                name: p.name,
                price_vnd: p.price_vnd,
                features: p.features,
                template_ids: p.template_ids,
            })
            .collect(),
    ))
}

fn wedding_view(settings: &Settings, wedding: Wedding) -> WeddingView {
    let guest_link = settings.guest_link(wedding.slug.as_str(), &wedding.guest_link_token);
    WeddingView {
        id: wedding.id,
        slug: wedding.slug.to_string(),
        template_id: wedding.template_id,
        package_id: wedding.package_id,
        content: wedding.content,
        gift_account: wedding.gift_account.map(|a| GiftAccountView {
            bin: a.bin().to_string(),
            number: a.number().to_string(),
            holder: a.holder().to_string(),
        }),
        album: wedding.album,
        guest_link,
        deployment: wedding.deployment,
        site_url: wedding.site_url,
        created_at: wedding.created_at.to_rfc3339(),
        updated_at: wedding.updated_at.to_rfc3339(),
    }
}
