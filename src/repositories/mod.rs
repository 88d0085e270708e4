//! Entity Store
//!
//! Este módulo define los traits de almacenamiento que permiten intercambiar
//! backends (PostgreSQL en producción, memoria en tests) sin tocar la capa
//! de dominio, y las implementaciones concretas de cada uno.

pub mod booking_repository;
pub mod client_repository;
pub mod memory;
pub mod vehicle_repository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::models::client::Client;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

/// Operaciones de almacenamiento sobre clientes
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn insert(&self, client: &Client) -> Result<Client, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError>;

    /// Lista todos los clientes, más recientes primero
    async fn find_all(&self) -> Result<Vec<Client>, AppError>;

    async fn update(&self, client: &Client) -> Result<Client, AppError>;

    /// Devuelve true si el cliente existía y fue eliminado
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Busca un cliente que colisione con alguno de los campos únicos.
    /// `exclude` omite al propio cliente durante una edición.
    async fn find_duplicate(
        &self,
        id_or_passport: &str,
        phone: &str,
        license_number: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Client>, AppError>;
}

/// Operaciones de almacenamiento sobre vehículos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn insert(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError>;

    /// Lista todos los vehículos, más recientes primero
    async fn find_all(&self) -> Result<Vec<Vehicle>, AppError>;

    async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError>;

    /// Devuelve true si el vehículo existía y fue eliminado
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// `exclude` omite al propio vehículo durante una edición
    async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, AppError>;
}

/// Operaciones de almacenamiento sobre bookings
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert(&self, booking: &Booking) -> Result<Booking, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError>;

    /// Lista todos los bookings, más recientes primero
    async fn find_all(&self) -> Result<Vec<Booking>, AppError>;

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;

    /// Devuelve true si el booking existía y fue eliminado
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Bookings Active de un vehículo, excluyendo opcionalmente uno
    /// (usado al revalidar la edición de un booking existente)
    async fn find_active_for_vehicle(
        &self,
        vehicle_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<Vec<Booking>, AppError>;

    /// true si existe algún booking Active que referencie al cliente
    async fn active_exists_for_client(&self, client_id: Uuid) -> Result<bool, AppError>;

    /// true si existe algún booking Active que referencie al vehículo
    async fn active_exists_for_vehicle(&self, vehicle_id: Uuid) -> Result<bool, AppError>;
}
