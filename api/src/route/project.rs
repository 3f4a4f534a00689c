use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::project::{show_project_list, update_project};

pub fn build_project_routers() -> Router<AppRegistry> {
    let projects_routers = Router::new()
        .route("/", get(show_project_list))
        .route("/:project_id", put(update_project));

    Router::new().nest("/projects", projects_routers)
}
