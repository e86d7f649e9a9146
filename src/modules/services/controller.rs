use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use gescom_core::catalogue::slugs;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::permission::authorize;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateServiceDto, Service, UpdateServiceDto};
use super::service::ServicesService;

#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "List of services", body = Vec<Service>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing SERVICE_CONSULT permission")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
pub async fn get_services(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Service>>, AppError> {
    authorize(&state, &auth_user, slugs::SERVICE_CONSULT).await?;

    let services = ServicesService::get_services(&state.db).await?;
    Ok(Json(services))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = Service),
        (status = 403, description = "Missing SERVICE_CONSULT permission"),
        (status = 404, description = "Service not found")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
pub async fn get_service(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>, AppError> {
    authorize(&state, &auth_user, slugs::SERVICE_CONSULT).await?;

    let service = ServicesService::get_service(&state.db, id).await?;
    Ok(Json(service))
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "Duplicate reference"),
        (status = 403, description = "Missing SERVICE_CREATE_UPDATE permission")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
pub async fn create_service(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateServiceDto>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    authorize(&state, &auth_user, slugs::SERVICE_CREATE_UPDATE).await?;

    let service = ServicesService::create_service(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 403, description = "Missing SERVICE_CREATE_UPDATE permission"),
        (status = 404, description = "Service not found")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
pub async fn update_service(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateServiceDto>,
) -> Result<Json<Service>, AppError> {
    authorize(&state, &auth_user, slugs::SERVICE_CREATE_UPDATE).await?;

    let service = ServicesService::update_service(&state.db, id, dto).await?;
    Ok(Json(service))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 403, description = "Missing SERVICE_DELETE permission"),
        (status = 404, description = "Service not found")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
pub async fn delete_service(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    authorize(&state, &auth_user, slugs::SERVICE_DELETE).await?;

    ServicesService::delete_service(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
