use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::advisory::{
    create_advisory, show_advisory, show_advisory_list, update_advisory_status,
};

pub fn build_advisory_routers() -> Router<AppRegistry> {
    let advisories_routers = Router::new()
        .route("/", post(create_advisory))
        .route("/", get(show_advisory_list))
        .route("/:advisory_id", get(show_advisory))
        .route("/:advisory_id/status", put(update_advisory_status));

    Router::new().nest("/advisories", advisories_routers)
}
