use std::sync::Arc;

use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl, customer::CustomerRepositoryImpl,
    destination::DestinationRepositoryImpl, health::HealthCheckRepositoryImpl,
    payment::PaymentRepositoryImpl, user::UserRepositoryImpl,
    view_cache::ViewCacheRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, customer::CustomerRepository,
    destination::DestinationRepository, health::HealthCheckRepository,
    payment::PaymentRepository, user::UserRepository, view_cache::ViewCacheRepository,
};
use shared::config::AppConfig;

/// The repositories behind an [`AppRegistry`].
pub struct Repositories {
    pub health_check: Arc<dyn HealthCheckRepository>,
    pub auth: Arc<dyn AuthRepository>,
    pub user: Arc<dyn UserRepository>,
    pub customer: Arc<dyn CustomerRepository>,
    pub destination: Arc<dyn DestinationRepository>,
    pub booking: Arc<dyn BookingRepository>,
    pub payment: Arc<dyn PaymentRepository>,
    pub view_cache: Arc<dyn ViewCacheRepository>,
}

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
    destination_repository: Arc<dyn DestinationRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
    view_cache_repository: Arc<dyn ViewCacheRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        Repositories {
            health_check: Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            auth: Arc::new(AuthRepositoryImpl::new(
                pool.clone(),
                redis_client.clone(),
                app_config.auth.ttl,
            )),
            user: Arc::new(UserRepositoryImpl::new(pool.clone())),
            customer: Arc::new(CustomerRepositoryImpl::new(pool.clone())),
            destination: Arc::new(DestinationRepositoryImpl::new(pool.clone())),
            booking: Arc::new(BookingRepositoryImpl::new(pool.clone())),
            payment: Arc::new(PaymentRepositoryImpl::new(pool)),
            view_cache: Arc::new(ViewCacheRepositoryImpl::new(
                redis_client,
                app_config.view_cache.ttl,
            )),
        }
        .into()
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn customer_repository(&self) -> Arc<dyn CustomerRepository> {
        self.customer_repository.clone()
    }

    pub fn destination_repository(&self) -> Arc<dyn DestinationRepository> {
        self.destination_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn payment_repository(&self) -> Arc<dyn PaymentRepository> {
        self.payment_repository.clone()
    }

    pub fn view_cache_repository(&self) -> Arc<dyn ViewCacheRepository> {
        self.view_cache_repository.clone()
    }
}

impl From<Repositories> for AppRegistry {
    fn from(value: Repositories) -> Self {
        let Repositories {
            health_check,
            auth,
            user,
            customer,
            destination,
            booking,
            payment,
            view_cache,
        } = value;
        Self {
            health_check_repository: health_check,
            auth_repository: auth,
            user_repository: user,
            customer_repository: customer,
            destination_repository: destination,
            booking_repository: booking,
            payment_repository: payment,
            view_cache_repository: view_cache,
        }
    }
}
