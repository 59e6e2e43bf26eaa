use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::user::{show_departments, show_user, show_user_list};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", get(show_user_list))
        .route("/departments", get(show_departments))
        .route("/:user_id", get(show_user));

    Router::new().nest("/users", users_routers)
}
