use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use gescom_core::{
    PermissionSet, catalogue::slugs, is_known_slug, list_permissions, toggle_permission,
};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::permission::authorize;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    ChangePasswordDto, CreateUserDto, PermissionCategoryDto, PermissionEntryDto,
    TogglePermissionDto, UpdateUserDto, User, UserPermissionsResponse,
};
use super::service::UserService;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing USER_CONSULT permission")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    authorize(&state, &auth_user, slugs::USER_CONSULT).await?;

    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 403, description = "Missing USER_CONSULT permission"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    authorize(&state, &auth_user, slugs::USER_CONSULT).await?;

    let user = UserService::get_user(&state.db, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Email already exists"),
        (status = 403, description = "Missing USER_CREATE_UPDATE permission")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    authorize(&state, &auth_user, slugs::USER_CREATE_UPDATE).await?;

    let user = UserService::create_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 403, description = "Missing USER_CREATE_UPDATE permission"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    authorize(&state, &auth_user, slugs::USER_CREATE_UPDATE).await?;

    let user = UserService::update_user(&state.db, id, dto).await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password updated"),
        (status = 403, description = "Missing USER_UPDATE_PWD permission"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<StatusCode, AppError> {
    authorize(&state, &auth_user, slugs::USER_UPDATE_PWD).await?;

    UserService::update_password(&state.db, id, &dto.password).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Missing USER_DELETE permission"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    authorize(&state, &auth_user, slugs::USER_DELETE).await?;

    UserService::delete_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============ Permission management ============

#[utoipa::path(
    get,
    path = "/api/users/{id}/permissions",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Catalogue with the user's grants", body = UserPermissionsResponse),
        (status = 403, description = "Missing USER_PERMISSIONS permission"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn get_user_permissions(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UserPermissionsResponse>, AppError> {
    authorize(&state, &auth_user, slugs::USER_PERMISSIONS).await?;

    let target = UserService::get_user(&state.db, id).await?;
    Ok(Json(permissions_response(&target)))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/permissions",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = TogglePermissionDto,
    responses(
        (status = 200, description = "Updated catalogue with the user's grants", body = UserPermissionsResponse),
        (status = 403, description = "Missing USER_PERMISSIONS permission"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn toggle_user_permission(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<TogglePermissionDto>,
) -> Result<Json<UserPermissionsResponse>, AppError> {
    authorize(&state, &auth_user, slugs::USER_PERMISSIONS).await?;

    // Slugs outside the catalogue are toggled mechanically; worth a trace
    // when it happens, since it usually means a stale UI or a removed slug.
    if !is_known_slug(&dto.permission) {
        tracing::debug!(slug = %dto.permission, "toggling slug not present in catalogue");
    }

    let mut target = UserService::get_user(&state.db, id).await?;
    let raw = toggle_permission(&mut target, &dto.permission, dto.checked);
    let target = UserService::update_permissions(&state.db, id, &raw).await?;

    Ok(Json(permissions_response(&target)))
}

/// Projects the static catalogue onto one user's grants, preserving
/// catalogue declaration order.
fn permissions_response(target: &User) -> UserPermissionsResponse {
    let granted = PermissionSet::decode(&target.permissions);

    let categories = list_permissions()
        .iter()
        .map(|category| PermissionCategoryDto {
            name: category.name.to_string(),
            permissions: category
                .entries
                .iter()
                .map(|entry| PermissionEntryDto {
                    slug: entry.slug.to_string(),
                    label: entry.label.to_string(),
                    granted: granted.contains(entry.slug),
                })
                .collect(),
        })
        .collect();

    UserPermissionsResponse {
        user_id: target.id,
        categories,
        raw: target.permissions.clone(),
    }
}
