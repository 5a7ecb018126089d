use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    customer::event::DeleteCustomer,
    id::CustomerId,
    list::CustomerListFilter,
    view::ViewPath,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::view::{cached, invalidate, or_empty};
use crate::{
    extractor::AuthorizedUser,
    model::{
        booking::BookingResponse,
        customer::{
            CustomerDetailResponse, CustomerListQuery, CustomerRequest, CustomerRequestWithId,
            CustomerResponse, CustomerSearchQuery, CustomersResponse,
        },
    },
};

pub async fn register_customer(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CustomerRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let customer_id = registry.customer_repository().create(req.into()).await?;
    invalidate(&registry, &[ViewPath::Customers]).await;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, ViewPath::Customer(customer_id).location())],
    ))
}

pub async fn show_customer_list(
    _user: AuthorizedUser,
    Query(query): Query<CustomerListQuery>,
    State(registry): State<AppRegistry>,
) -> Json<CustomersResponse> {
    let filter = CustomerListFilter::from(query);

    let customers = cached(&registry, ViewPath::Customers, || async {
        registry
            .customer_repository()
            .find_all()
            .await
            .map(CustomersResponse::from)
    })
    .await
    .map(|res| res.items);

    Json(CustomersResponse {
        items: filter.apply(or_empty(customers, "customers")),
    })
}

pub async fn search_customers(
    _user: AuthorizedUser,
    Query(query): Query<CustomerSearchQuery>,
    State(registry): State<AppRegistry>,
) -> Json<CustomersResponse> {
    let customers = registry
        .customer_repository()
        .search(query.q.trim(), CustomerListFilter::MAX_SEARCH_RESULTS)
        .await;
    Json(or_empty(customers, "customer search results").into())
}

pub async fn show_customer(
    _user: AuthorizedUser,
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CustomerDetailResponse>> {
    cached(&registry, ViewPath::Customer(customer_id), || async {
        let customer_repository = registry.customer_repository();
        let booking_repository = registry.booking_repository();
        let (customer, bookings) = tokio::try_join!(
            customer_repository.find_by_id(customer_id),
            booking_repository.find_by_customer_id(customer_id),
        )?;
        let customer =
            customer.ok_or_else(|| AppError::EntityNotFound("customer not found".into()))?;

        Ok::<_, AppError>(CustomerDetailResponse::new(
            CustomerResponse::from(customer),
            bookings.into_iter().map(BookingResponse::from).collect(),
        ))
    })
    .await
    .map(Json)
}

pub async fn update_customer(
    _user: AuthorizedUser,
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CustomerRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .customer_repository()
        .update(CustomerRequestWithId::new(customer_id, req).into())
        .await?;

    // booking views embed the customer's contact details
    let bookings = registry
        .booking_repository()
        .find_by_customer_id(customer_id)
        .await;
    let mut stale = vec![
        ViewPath::Customers,
        ViewPath::Customer(customer_id),
        ViewPath::Bookings,
    ];
    stale.extend(
        or_empty(bookings, "bookings of the updated customer")
            .into_iter()
            .map(|b| ViewPath::Booking(b.id)),
    );
    invalidate(&registry, &stale).await;
    Ok(StatusCode::OK)
}

pub async fn delete_customer(
    _user: AuthorizedUser,
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .customer_repository()
        .delete(DeleteCustomer::new(customer_id))
        .await?;

    invalidate(
        &registry,
        &[ViewPath::Customers, ViewPath::Customer(customer_id)],
    )
    .await;

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, ViewPath::Customers.location())],
    ))
}
