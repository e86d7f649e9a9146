use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_service, delete_service, get_service, get_services, update_service,
};

pub fn init_services_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_services).post(create_service))
        .route(
            "/{id}",
            get(get_service).put(update_service).delete(delete_service),
        )
}
