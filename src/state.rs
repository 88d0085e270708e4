//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los stores y la política de acceso se
//! construyen una sola vez y se inyectan como capabilities.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::repositories::{BookingStore, ClientStore, VehicleStore};
use crate::services::access_policy::{AccessPolicy, StaticAccessPolicy};
use crate::services::auth_service::AuthService;
use crate::services::booking_service::BookingService;
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub jwt_config: JwtConfig,
    pub clients: Arc<dyn ClientStore>,
    pub vehicles: Arc<dyn VehicleStore>,
    pub bookings: Arc<dyn BookingStore>,
    pub policy: Arc<dyn AccessPolicy>,
    pub booking_service: Arc<BookingService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let clients: Arc<dyn ClientStore> = Arc::new(ClientRepository::new(pool.clone()));
        let vehicles: Arc<dyn VehicleStore> = Arc::new(VehicleRepository::new(pool.clone()));
        let bookings: Arc<dyn BookingStore> = Arc::new(BookingRepository::new(pool.clone()));
        let policy: Arc<dyn AccessPolicy> = Arc::new(StaticAccessPolicy::new());

        let booking_service = Arc::new(BookingService::new(
            clients.clone(),
            vehicles.clone(),
            bookings.clone(),
            policy.clone(),
        ));

        let jwt_config = JwtConfig {
            secret: config.jwt_secret.clone(),
            expiration_hours: config.jwt_expiration_hours,
        };
        let auth_service = Arc::new(AuthService::new(pool.clone(), jwt_config.clone()));

        Self {
            pool,
            config,
            jwt_config,
            clients,
            vehicles,
            bookings,
            policy,
            booking_service,
            auth_service,
        }
    }
}
