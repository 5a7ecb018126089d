use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::Utc;
use kernel::{
    model::{
        analytics::{CustomerSummary, DestinationSummary, RevenueEntry, SpendEntry, StatusEntry},
        auth::{event::CreateToken, AccessToken},
        booking::{
            event::{CreateBooking, DeleteBooking, UpdateBookingStatus, UpdatePaymentStatus},
            Booking, BookingCustomer, BookingDestination, BookingStatus, PaymentStatus,
        },
        customer::{
            event::{CreateCustomer, DeleteCustomer, UpdateCustomer},
            Customer,
        },
        destination::Destination,
        id::{BookingId, CustomerId, DestinationId, UserId},
        list::{BookingSearch, CreatedRange},
        payment::Payment,
        role::Role,
        user::{
            event::{CreateUser, UpdateProfile, UpdateUserPassword},
            User,
        },
        view::ViewPath,
    },
    repository::{
        auth::AuthRepository, booking::BookingRepository, customer::CustomerRepository,
        destination::DestinationRepository, health::HealthCheckRepository,
        payment::PaymentRepository, user::UserRepository, view_cache::ViewCacheRepository,
    },
};
use registry::{AppRegistry, Repositories};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

pub const TOKEN: &str = "0f5c2a7e9b3d4c1a8e6f2b7d9c4a1e3f";

pub fn agent() -> User {
    User {
        user_id: UserId::new(),
        email: "agent@example.com".into(),
        full_name: "Test Agent".into(),
        role: Role::Agent,
        avatar_url: None,
    }
}

struct InMemoryAuth {
    user_id: UserId,
}

#[async_trait]
impl AuthRepository for InMemoryAuth {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        Ok((access_token.0 == TOKEN).then_some(self.user_id))
    }

    async fn verify_user(&self, _email: &str, _password: &str) -> AppResult<UserId> {
        Ok(self.user_id)
    }

    async fn create_token(&self, _event: CreateToken) -> AppResult<AccessToken> {
        Ok(AccessToken(TOKEN.into()))
    }

    async fn delete_token(&self, _access_token: AccessToken) -> AppResult<()> {
        Ok(())
    }
}

struct InMemoryUsers {
    user: User,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        Ok((current_user_id == self.user.user_id).then(|| self.user.clone()))
    }

    async fn create(&self, _event: CreateUser) -> AppResult<User> {
        Ok(self.user.clone())
    }

    async fn update_profile(&self, _event: UpdateProfile) -> AppResult<()> {
        Ok(())
    }

    async fn update_password(&self, _event: UpdateUserPassword) -> AppResult<()> {
        Ok(())
    }
}

/// Bookings held in memory, newest first.
#[derive(Default)]
pub struct InMemoryBookings {
    pub rows: Mutex<Vec<Booking>>,
}

impl InMemoryBookings {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert(&self, booking: Booking) {
        self.rows.lock().unwrap().insert(0, booking);
    }

    fn missing(action: &str, booking_id: BookingId) -> AppError {
        AppError::PersistenceError(format!(
            "Failed to {action}: no booking with id {booking_id}"
        ))
    }
}

pub fn booking(reference: &str, customer: &str, destination: &str) -> Booking {
    let check_in = Utc::now().date_naive();
    Booking {
        id: BookingId::new(),
        booking_reference: reference.into(),
        agent_id: UserId::new(),
        stay: kernel::model::booking::Stay::new(check_in, check_in.succ_opt().unwrap()),
        guests: 2,
        total_amount: Decimal::from(120),
        special_requests: None,
        status: BookingStatus::Pending,
        payment_status: PaymentStatus::Pending,
        created_at: Utc::now(),
        customer: BookingCustomer {
            customer_id: CustomerId::new(),
            full_name: customer.into(),
            email: "customer@example.com".into(),
            phone: None,
            address: None,
        },
        destination: BookingDestination {
            destination_id: DestinationId::new(),
            name: destination.into(),
            city: "City".into(),
            country: "Country".into(),
            description: String::new(),
            image_url: None,
            price_per_night: Decimal::from(120),
        },
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut row = booking(event.booking_reference.as_str(), "Ada Lovelace", "Alfama Loft");
        row.agent_id = event.agent_id;
        row.stay = event.stay;
        row.guests = event.guests;
        row.total_amount = event.total_amount;
        row.special_requests = event.special_requests;
        row.customer.customer_id = event.customer_id;
        row.destination.destination_id = event.destination_id;
        let id = row.id;
        self.insert(row);
        Ok(id)
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Booking>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().take(limit as usize).cloned().collect())
    }

    async fn search(&self, _search: BookingSearch) -> AppResult<Vec<Booking>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|b| b.id == booking_id).cloned())
    }

    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Booking>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|b| b.customer.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<CustomerId> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|b| b.id == event.booking_id)
            .ok_or_else(|| Self::missing("update booking status", event.booking_id))?;
        row.status = event.status;
        Ok(row.customer.customer_id)
    }

    async fn update_payment_status(&self, event: UpdatePaymentStatus) -> AppResult<CustomerId> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|b| b.id == event.booking_id)
            .ok_or_else(|| Self::missing("update payment status", event.booking_id))?;
        row.payment_status = event.payment_status;
        Ok(row.customer.customer_id)
    }

    async fn delete(&self, event: DeleteBooking) -> AppResult<CustomerId> {
        let mut rows = self.rows.lock().unwrap();
        let index = rows
            .iter()
            .position(|b| b.id == event.booking_id)
            .ok_or_else(|| Self::missing("delete booking", event.booking_id))?;
        Ok(rows.remove(index).customer.customer_id)
    }

    async fn count(&self, _range: CreatedRange) -> AppResult<i64> {
        Ok(self.len() as i64)
    }

    async fn find_paid_revenue(&self, _range: CreatedRange) -> AppResult<Vec<RevenueEntry>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Paid)
            .map(|b| RevenueEntry {
                total_amount: b.total_amount,
                created_at: b.created_at,
            })
            .collect())
    }

    async fn find_status_entries(&self, _range: CreatedRange) -> AppResult<Vec<StatusEntry>> {
        Ok(Vec::new())
    }

    async fn find_paid_spend_by_customer(&self) -> AppResult<Vec<SpendEntry<CustomerSummary>>> {
        Ok(Vec::new())
    }

    async fn find_paid_spend_by_destination(
        &self,
    ) -> AppResult<Vec<SpendEntry<DestinationSummary>>> {
        Ok(Vec::new())
    }
}

struct NoCustomers;

#[async_trait]
impl CustomerRepository for NoCustomers {
    async fn create(&self, _event: CreateCustomer) -> AppResult<CustomerId> {
        Ok(CustomerId::new())
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        Ok(Vec::new())
    }

    async fn search(&self, _query: &str, _limit: i64) -> AppResult<Vec<Customer>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _customer_id: CustomerId) -> AppResult<Option<Customer>> {
        Ok(None)
    }

    async fn update(&self, _event: UpdateCustomer) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _event: DeleteCustomer) -> AppResult<()> {
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(0)
    }
}

struct NoDestinations;

#[async_trait]
impl DestinationRepository for NoDestinations {
    async fn find_all(&self) -> AppResult<Vec<Destination>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _destination_id: DestinationId) -> AppResult<Option<Destination>> {
        Ok(None)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(0)
    }
}

struct NoPayments;

#[async_trait]
impl PaymentRepository for NoPayments {
    async fn find_all(&self) -> AppResult<Vec<Payment>> {
        Ok(Vec::new())
    }
}

struct AlwaysHealthy;

#[async_trait]
impl HealthCheckRepository for AlwaysHealthy {
    async fn check_db(&self) -> bool {
        true
    }
}

#[derive(Default)]
pub struct InMemoryViews {
    pub views: Mutex<HashMap<String, String>>,
}

impl InMemoryViews {
    pub fn contains(&self, path: ViewPath) -> bool {
        self.views.lock().unwrap().contains_key(&path.cache_key())
    }

    pub fn seed(&self, path: ViewPath) {
        self.views
            .lock()
            .unwrap()
            .insert(path.cache_key(), "{}".into());
    }
}

#[async_trait]
impl ViewCacheRepository for InMemoryViews {
    async fn get(&self, path: ViewPath) -> AppResult<Option<String>> {
        Ok(self.views.lock().unwrap().get(&path.cache_key()).cloned())
    }

    async fn store(&self, path: ViewPath, body: String) -> AppResult<()> {
        self.views.lock().unwrap().insert(path.cache_key(), body);
        Ok(())
    }

    async fn invalidate(&self, paths: &[ViewPath]) -> AppResult<()> {
        let mut views = self.views.lock().unwrap();
        for path in paths {
            views.remove(&path.cache_key());
        }
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub user: User,
    pub bookings: Arc<InMemoryBookings>,
    pub views: Arc<InMemoryViews>,
}

impl TestApp {
    pub fn new() -> Self {
        let user = agent();
        let bookings = Arc::new(InMemoryBookings::default());
        let views = Arc::new(InMemoryViews::default());

        let registry = AppRegistry::from(Repositories {
            health_check: Arc::new(AlwaysHealthy),
            auth: Arc::new(InMemoryAuth {
                user_id: user.user_id,
            }),
            user: Arc::new(InMemoryUsers { user: user.clone() }),
            customer: Arc::new(NoCustomers),
            destination: Arc::new(NoDestinations),
            booking: bookings.clone(),
            payment: Arc::new(NoPayments),
            view_cache: views.clone(),
        });

        Self {
            router: api::route::v1::routes().with_state(registry),
            user,
            bookings,
            views,
        }
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_text(res: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
