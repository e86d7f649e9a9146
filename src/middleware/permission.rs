//! Permission checks for controller handlers.
//!
//! Every guarded handler calls [`authorize`] before doing any work. The
//! caller's record is loaded fresh so the gate always sees the currently
//! persisted permission string, and a deny becomes a 403 carrying the
//! notice the gate emitted.

use gescom_core::{ACCESS_DENIED_NOTICE, FlashBag};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks that the authenticated caller may perform the action guarded by
/// `slug`, returning the caller's user record so handlers can reuse it
/// without a second query.
pub async fn authorize(
    state: &AppState,
    auth_user: &AuthUser,
    slug: &str,
) -> Result<User, AppError> {
    let user = UserService::get_user(&state.db, auth_user.user_id()?).await?;

    let mut flash = FlashBag::new();
    if !state.gate.is_allowed(&user, slug, &mut flash) {
        let message = flash
            .take()
            .into_iter()
            .next()
            .map(|notice| notice.message)
            .unwrap_or_else(|| ACCESS_DENIED_NOTICE.to_string());
        return Err(AppError::Forbidden(message));
    }

    Ok(user)
}
