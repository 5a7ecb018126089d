use axum::{
    extract::{Path, Query, State},
    Json,
};
use kernel::model::{destination::Destination, id::DestinationId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::view::or_empty;
use crate::{
    extractor::AuthorizedUser,
    model::destination::{DestinationResponse, DestinationsResponse, QuoteQuery, QuoteResponse},
};

pub async fn show_destination_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> Json<DestinationsResponse> {
    let destinations = registry.destination_repository().find_all().await;
    Json(or_empty(destinations, "destinations").into())
}

async fn find_destination(
    registry: &AppRegistry,
    destination_id: DestinationId,
) -> AppResult<Destination> {
    registry
        .destination_repository()
        .find_by_id(destination_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("destination not found".into()))
}

pub async fn show_destination(
    _user: AuthorizedUser,
    Path(destination_id): Path<DestinationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DestinationResponse>> {
    find_destination(&registry, destination_id)
        .await
        .map(DestinationResponse::from)
        .map(Json)
}

pub async fn quote_stay(
    _user: AuthorizedUser,
    Path(destination_id): Path<DestinationId>,
    Query(query): Query<QuoteQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<QuoteResponse>> {
    let destination = find_destination(&registry, destination_id).await?;
    Ok(Json(QuoteResponse::new(query, destination.price_per_night)))
}
