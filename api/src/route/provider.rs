use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    advisory::show_provider_advisories,
    portfolio::{show_portfolio, upsert_portfolio},
    project::{create_project, show_provider_projects},
    provider::{delete_provider, show_provider, show_provider_list, upsert_provider},
    schedule::{check_availability, check_availability_now, show_schedule, update_schedule},
};

pub fn build_provider_routers() -> Router<AppRegistry> {
    let providers_routers = Router::new()
        .route("/", get(show_provider_list))
        .route("/:provider_id", get(show_provider))
        .route("/:provider_id", put(upsert_provider))
        .route("/:provider_id", delete(delete_provider))
        .route("/:provider_id/schedule", get(show_schedule))
        .route("/:provider_id/schedule", put(update_schedule))
        .route("/:provider_id/availability", get(check_availability))
        .route("/:provider_id/availability/now", get(check_availability_now))
        .route("/:provider_id/advisories", get(show_provider_advisories))
        .route("/:provider_id/projects", get(show_provider_projects))
        .route("/:provider_id/projects", post(create_project))
        .route("/:provider_id/portfolio", get(show_portfolio))
        .route("/:provider_id/portfolio", put(upsert_portfolio));

    Router::new().nest("/providers", providers_routers)
}
