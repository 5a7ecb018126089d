mod helper;

use axum::http::{header, StatusCode};
use kernel::model::{
    booking::{BookingStatus, PaymentStatus},
    id::{BookingId, CustomerId, DestinationId},
    view::ViewPath,
};
use rstest::rstest;
use serde_json::json;
use tower::ServiceExt;

use helper::{body_text, booking, request, TestApp, TOKEN};

fn create_body(check_in: &str, check_out: &str, guests: i32) -> serde_json::Value {
    json!({
        "customerId": CustomerId::new().to_string(),
        "destinationId": DestinationId::new().to_string(),
        "checkInDate": check_in,
        "checkOutDate": check_out,
        "guests": guests,
        "specialRequests": "",
        "totalAmount": 360.0,
    })
}

#[tokio::test]
async fn create_booking_without_principal_is_rejected_and_writes_nothing() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "POST",
            "/api/v1/bookings",
            None,
            Some(create_body("2024-03-01", "2024-03-04", 2)),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.bookings.len(), 0);
    Ok(())
}

#[tokio::test]
async fn create_booking_with_unknown_token_is_rejected() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "POST",
            "/api/v1/bookings",
            Some("not-a-live-token"),
            Some(create_body("2024-03-01", "2024-03-04", 2)),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.bookings.len(), 0);
    Ok(())
}

#[tokio::test]
async fn create_booking_starts_pending_and_points_to_its_detail() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "POST",
            "/api/v1/bookings",
            Some(TOKEN),
            Some(create_body("2024-03-01", "2024-03-04", 2)),
        ))
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let stored = app.bookings.rows.lock().unwrap()[0].clone();
    let location = res.headers()[header::LOCATION].to_str()?;
    assert_eq!(location, format!("/api/v1/bookings/{}", stored.id));

    assert!(stored.booking_reference.starts_with("TRV-"));
    assert_eq!(stored.booking_reference.len(), 10);
    assert!(stored.booking_reference[4..].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(stored.status, BookingStatus::Pending);
    assert_eq!(stored.payment_status, PaymentStatus::Pending);
    assert_eq!(stored.agent_id, app.user.user_id);
    assert_eq!(stored.special_requests, None);
    Ok(())
}

#[rstest]
#[case("2024-03-04", "2024-03-04", 2)]
#[case("2024-03-04", "2024-03-01", 2)]
#[case("2024-03-01", "2024-03-04", 0)]
#[tokio::test]
async fn invalid_booking_requests_are_bad_requests(
    #[case] check_in: &str,
    #[case] check_out: &str,
    #[case] guests: i32,
) -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "POST",
            "/api/v1/bookings",
            Some(TOKEN),
            Some(create_body(check_in, check_out, guests)),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.bookings.len(), 0);
    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_booking_returns_the_store_message() -> anyhow::Result<()> {
    let app = TestApp::new();
    let missing = BookingId::new();

    let res = app
        .router
        .oneshot(request(
            "DELETE",
            &format!("/api/v1/bookings/{missing}"),
            Some(TOKEN),
            None,
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(res).await,
        format!("Failed to delete booking: no booking with id {missing}")
    );
    Ok(())
}

#[tokio::test]
async fn deleting_a_booking_redirects_to_the_list() -> anyhow::Result<()> {
    let app = TestApp::new();
    let existing = booking("TRV-100001", "Ada Lovelace", "Alfama Loft");
    let id = existing.id;
    app.bookings.insert(existing);

    let res = app
        .router
        .oneshot(request(
            "DELETE",
            &format!("/api/v1/bookings/{id}"),
            Some(TOKEN),
            None,
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/api/v1/bookings");
    assert_eq!(app.bookings.len(), 0);
    Ok(())
}

#[tokio::test]
async fn booking_list_is_cached_filtered_and_invalidated() -> anyhow::Result<()> {
    let app = TestApp::new();
    app.bookings
        .insert(booking("TRV-100001", "Ada Lovelace", "Alfama Loft"));
    app.bookings
        .insert(booking("TRV-100002", "Grace Hopper", "Gion Ryokan"));

    let res = app
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/api/v1/bookings?search=GION&status=all",
            Some(TOKEN),
            None,
        ))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(res).await)?;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["bookingReference"], "TRV-100002");
    assert!(app.views.contains(ViewPath::Bookings));

    let res = app
        .router
        .oneshot(request(
            "POST",
            "/api/v1/bookings",
            Some(TOKEN),
            Some(create_body("2024-03-01", "2024-03-04", 2)),
        ))
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(!app.views.contains(ViewPath::Bookings));
    Ok(())
}

#[tokio::test]
async fn status_update_of_a_missing_booking_is_a_persistence_error() -> anyhow::Result<()> {
    let app = TestApp::new();
    let missing = BookingId::new();

    let res = app
        .router
        .oneshot(request(
            "PUT",
            &format!("/api/v1/bookings/{missing}/status"),
            Some(TOKEN),
            Some(json!({ "status": "confirmed" })),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(res).await,
        format!("Failed to update booking status: no booking with id {missing}")
    );
    Ok(())
}

#[tokio::test]
async fn health_needs_no_principal() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request("GET", "/api/v1/health", None, None))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[rstest]
#[case("PUT", "/status", Some(json!({ "status": "cancelled" })))]
#[case("PUT", "/payment-status", Some(json!({ "paymentStatus": "paid" })))]
#[case("DELETE", "", None)]
#[tokio::test]
async fn booking_writes_clear_the_owning_customer_view(
    #[case] method: &str,
    #[case] suffix: &str,
    #[case] body: Option<serde_json::Value>,
) -> anyhow::Result<()> {
    let app = TestApp::new();
    let existing = booking("TRV-100001", "Ada Lovelace", "Alfama Loft");
    let (id, customer_id) = (existing.id, existing.customer.customer_id);
    app.bookings.insert(existing);
    app.views.seed(ViewPath::Customer(customer_id));
    app.views.seed(ViewPath::Booking(id));

    let res = app
        .router
        .oneshot(request(
            method,
            &format!("/api/v1/bookings/{id}{suffix}"),
            Some(TOKEN),
            body,
        ))
        .await?;

    assert!(res.status().is_success() || res.status().is_redirection());
    assert!(!app.views.contains(ViewPath::Customer(customer_id)));
    assert!(!app.views.contains(ViewPath::Booking(id)));
    Ok(())
}

#[tokio::test]
async fn customer_update_clears_the_detail_of_each_of_their_bookings() -> anyhow::Result<()> {
    let app = TestApp::new();
    let first = booking("TRV-100001", "Ada Lovelace", "Alfama Loft");
    let mut second = booking("TRV-100002", "Ada Lovelace", "Gion Ryokan");
    second.customer.customer_id = first.customer.customer_id;
    let other = booking("TRV-100003", "Grace Hopper", "Gion Ryokan");
    let customer_id = first.customer.customer_id;
    let (first_id, second_id, other_id) = (first.id, second.id, other.id);
    for b in [first, second, other] {
        app.bookings.insert(b);
    }
    for path in [
        ViewPath::Booking(first_id),
        ViewPath::Booking(second_id),
        ViewPath::Booking(other_id),
    ] {
        app.views.seed(path);
    }

    let res = app
        .router
        .oneshot(request(
            "PUT",
            &format!("/api/v1/customers/{customer_id}"),
            Some(TOKEN),
            Some(json!({ "fullName": "Ada King", "email": "ada@example.com" })),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(!app.views.contains(ViewPath::Booking(first_id)));
    assert!(!app.views.contains(ViewPath::Booking(second_id)));
    assert!(app.views.contains(ViewPath::Booking(other_id)));
    Ok(())
}
