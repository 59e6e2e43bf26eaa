use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::resource::{
    check_resources_availability, show_resource, show_resource_list,
};

pub fn build_resource_routers() -> Router<AppRegistry> {
    let resources_routers = Router::new()
        .route("/", get(show_resource_list))
        .route("/availability", post(check_resources_availability))
        .route("/:resource_id", get(show_resource));

    Router::new().nest("/resources", resources_routers)
}
