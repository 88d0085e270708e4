//! Entity Store en memoria
//!
//! Implementación de los tres stores sobre HashMaps compartidos. Se usa en
//! los tests de integración del engine y sirve como doble de pruebas en
//! cualquier lugar donde se inyecte un store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::models::client::Client;
use crate::models::vehicle::Vehicle;
use crate::repositories::{BookingStore, ClientStore, VehicleStore};
use crate::utils::errors::AppError;

#[derive(Default, Clone)]
pub struct MemoryStore {
    clients: Arc<RwLock<HashMap<Uuid, Client>>>,
    vehicles: Arc<RwLock<HashMap<Uuid, Vehicle>>>,
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn insert(&self, client: &Client) -> Result<Client, AppError> {
        let mut clients = self.clients.write().await;
        clients.insert(client.id, client.clone());
        Ok(client.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        Ok(self.clients.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let mut all: Vec<Client> = self.clients.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, client: &Client) -> Result<Client, AppError> {
        let mut clients = self.clients.write().await;
        clients.insert(client.id, client.clone());
        Ok(client.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.clients.write().await.remove(&id).is_some())
    }

    async fn find_duplicate(
        &self,
        id_or_passport: &str,
        phone: &str,
        license_number: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Client>, AppError> {
        let clients = self.clients.read().await;
        Ok(clients
            .values()
            .find(|c| {
                Some(c.id) != exclude
                    && (c.id_or_passport == id_or_passport
                        || c.phone == phone
                        || c.license_number == license_number)
            })
            .cloned())
    }
}

#[async_trait]
impl VehicleStore for MemoryStore {
    async fn insert(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        Ok(self.vehicles.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let mut all: Vec<Vehicle> = self.vehicles.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.vehicles.write().await.remove(&id).is_some())
    }

    async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles
            .values()
            .any(|v| Some(v.id) != exclude && v.license_plate == license_plate))
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn insert(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let mut all: Vec<Booking> = self.bookings.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.bookings.write().await.remove(&id).is_some())
    }

    async fn find_active_for_vehicle(
        &self,
        vehicle_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        let mut active: Vec<Booking> = bookings
            .values()
            .filter(|b| {
                b.vehicle_id == vehicle_id
                    && b.status == BookingStatus::Active
                    && Some(b.id) != exclude
            })
            .cloned()
            .collect();
        active.sort_by_key(|b| b.start_date);
        Ok(active)
    }

    async fn active_exists_for_client(&self, client_id: Uuid) -> Result<bool, AppError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .any(|b| b.client_id == client_id && b.status == BookingStatus::Active))
    }

    async fn active_exists_for_vehicle(&self, vehicle_id: Uuid) -> Result<bool, AppError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .any(|b| b.vehicle_id == vehicle_id && b.status == BookingStatus::Active))
    }
}
