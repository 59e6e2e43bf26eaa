use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::booking::{show_booking, show_booking_list};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", get(show_booking_list))
        .route("/:booking_id", get(show_booking));

    Router::new().nest("/bookings", bookings_routers)
}
