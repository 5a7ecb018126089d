use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::destination::{quote_stay, show_destination, show_destination_list};

pub fn build_destination_routers() -> Router<AppRegistry> {
    let destinations_routers = Router::new()
        .route("/", get(show_destination_list))
        .route("/:destination_id", get(show_destination))
        .route("/:destination_id/quote", get(quote_stay));

    Router::new().nest("/destinations", destinations_routers)
}
