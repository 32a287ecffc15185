use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    delete_reservation, register_reservation, show_customer_reservation_list, show_reservation,
    show_reservation_list, show_reservation_list_between_dates, update_reservation,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservations_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/", get(show_reservation_list))
        .route("/between-dates", get(show_reservation_list_between_dates))
        .route("/customer/:customer_id", get(show_customer_reservation_list))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", put(update_reservation))
        .route("/:reservation_id", delete(delete_reservation));

    Router::new().nest("/reservations", reservations_routers)
}
