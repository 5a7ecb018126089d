mod helper;

use axum::http::{header, StatusCode};
use kernel::model::{booking::PaymentStatus, id::CustomerId};
use serde_json::json;
use tower::ServiceExt;

use helper::{body_text, booking, request, TestApp, TOKEN};

#[tokio::test]
async fn dashboard_sums_paid_bookings_only() -> anyhow::Result<()> {
    let app = TestApp::new();
    let mut paid = booking("TRV-100001", "Ada Lovelace", "Alfama Loft");
    paid.payment_status = PaymentStatus::Paid;
    app.bookings.insert(paid);
    app.bookings
        .insert(booking("TRV-100002", "Grace Hopper", "Gion Ryokan"));

    let res = app
        .router
        .oneshot(request("GET", "/api/v1/dashboard", Some(TOKEN), None))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(res).await)?;
    assert_eq!(body["profile"]["fullName"], "Test Agent");
    assert_eq!(body["profile"]["role"], "agent");
    assert_eq!(body["stats"]["totalBookings"], 2);
    assert_eq!(body["stats"]["totalRevenue"], 120.0);
    assert_eq!(body["recentBookings"].as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn missing_customer_detail_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "GET",
            &format!("/api/v1/customers/{}", CustomerId::new()),
            Some(TOKEN),
            None,
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn created_customer_with_blank_optional_fields_points_to_its_detail() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "POST",
            "/api/v1/customers",
            Some(TOKEN),
            Some(json!({
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "",
                "dateOfBirth": "",
            })),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()[header::LOCATION].to_str()?;
    assert!(location.starts_with("/api/v1/customers/"));
    Ok(())
}

#[tokio::test]
async fn customer_with_invalid_email_is_a_bad_request() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "POST",
            "/api/v1/customers",
            Some(TOKEN),
            Some(json!({ "fullName": "Ada Lovelace", "email": "ada" })),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_list_filter_is_unprocessable() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request(
            "GET",
            "/api/v1/bookings?paymentStatus=overdue",
            Some(TOKEN),
            None,
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn analytics_without_data_is_all_zero() -> anyhow::Result<()> {
    let app = TestApp::new();

    let res = app
        .router
        .oneshot(request("GET", "/api/v1/analytics?months=6", Some(TOKEN), None))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(res).await)?;
    assert_eq!(body["stats"]["bookingsGrowth"], 0.0);
    assert_eq!(body["stats"]["revenueGrowth"], 0.0);
    assert!(body["revenueByMonth"].as_array().unwrap().is_empty());
    assert!(body["topCustomers"].as_array().unwrap().is_empty());
    Ok(())
}
