use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::services::model::{CreateServiceDto, Service, UpdateServiceDto};
use crate::modules::users::model::{
    ChangePasswordDto, CreateUserDto, PermissionCategoryDto, PermissionEntryDto,
    TogglePermissionDto, UpdateUserDto, User, UserPermissionsResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gescom API",
        description = "Business management API with string-based permission gating",
        version = "0.1.0"
    ),
    paths(
        crate::modules::auth::controller::login,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::change_password,
        crate::modules::users::controller::delete_user,
        crate::modules::users::controller::get_user_permissions,
        crate::modules::users::controller::toggle_user_permission,
        crate::modules::services::controller::get_services,
        crate::modules::services::controller::get_service,
        crate::modules::services::controller::create_service,
        crate::modules::services::controller::update_service,
        crate::modules::services::controller::delete_service,
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        User,
        CreateUserDto,
        UpdateUserDto,
        ChangePasswordDto,
        TogglePermissionDto,
        PermissionEntryDto,
        PermissionCategoryDto,
        UserPermissionsResponse,
        Service,
        CreateServiceDto,
        UpdateServiceDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication"),
        (name = "Users", description = "User management and permission toggles"),
        (name = "Services", description = "Service management")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
