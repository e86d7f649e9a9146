use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    change_password, create_user, delete_user, get_user, get_user_permissions, get_users,
    toggle_user_permission, update_user,
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/password", put(change_password))
        .route(
            "/{id}/permissions",
            get(get_user_permissions).post(toggle_user_permission),
        )
}
