//! User data models and DTOs.
//!
//! [`User`] is the account entity. It implements
//! [`gescom_core::AccessSubject`], which is the only view of it the
//! authorization core ever sees: role labels plus the raw `;`-delimited
//! permission string.

use gescom_core::AccessSubject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An account. The password hash is never selected into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Role labels, e.g. `ROLE_ADMIN`, `ROLE_USER`.
    pub roles: Vec<String>,
    /// 0 = active, 1 = disabled.
    pub status: i16,
    pub employee: bool,
    /// Persisted permission string, slugs joined by `;`.
    pub permissions: String,
    pub last_connection: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AccessSubject for User {
    fn roles(&self) -> &[String] {
        &self.roles
    }

    fn raw_permissions(&self) -> &str {
        &self.permissions
    }

    fn set_raw_permissions(&mut self, raw: String) {
        self.permissions = raw;
    }
}

// DTOs

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub first_name: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Role labels to assign; defaults to `ROLE_USER` when empty.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub employee: bool,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub roles: Option<Vec<String>>,
    pub status: Option<i16>,
    pub employee: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordDto {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// One toggle from the permission-management UI: grant (`checked = true`)
/// or revoke (`checked = false`) a single slug.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TogglePermissionDto {
    #[validate(length(min = 1, message = "Permission slug must not be empty"))]
    pub permission: String,
    pub checked: bool,
}

/// A catalogue entry decorated with the target user's grant state.
#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionEntryDto {
    pub slug: String,
    pub label: String,
    pub granted: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionCategoryDto {
    pub name: String,
    pub permissions: Vec<PermissionEntryDto>,
}

/// The full catalogue plus the target user's current grants, in catalogue
/// declaration order. Drives the toggle UI.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserPermissionsResponse {
    pub user_id: Uuid,
    pub categories: Vec<PermissionCategoryDto>,
    /// The persisted raw string, for diagnostics.
    pub raw: String,
}
