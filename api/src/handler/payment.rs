use axum::{extract::State, Json};
use registry::AppRegistry;

use super::view::or_empty;
use crate::{extractor::AuthorizedUser, model::payment::PaymentsResponse};

pub async fn show_payment_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> Json<PaymentsResponse> {
    let payments = registry.payment_repository().find_all().await;
    Json(or_empty(payments, "payments").into())
}
