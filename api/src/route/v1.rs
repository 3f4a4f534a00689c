use super::{
    advisory::build_advisory_routers, project::build_project_routers,
    provider::build_provider_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_provider_routers())
        .merge(build_advisory_routers())
        .merge(build_project_routers());
    Router::new().nest("/api/v1", router)
}
