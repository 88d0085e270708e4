//! Manager del ciclo de vida del booking
//!
//! Orquesta validación, disponibilidad, precio y persistencia, y es el
//! dueño de la máquina de estados. La secuencia chequeo-de-disponibilidad
//! + escritura se serializa con un lock por vehículo: dos requests
//! concurrentes por el mismo vehículo nunca pueden pasar ambas el chequeo
//! antes de que una de ellas persista.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::dto::booking_dto::{CreateBookingRequest, UpdateBookingRequest};
use crate::models::auth::UserRole;
use crate::models::booking::{Booking, BookingStatus};
use crate::repositories::{BookingStore, ClientStore, VehicleStore};
use crate::services::access_policy::AccessPolicy;
use crate::services::availability::AvailabilityChecker;
use crate::services::booking_validator::{
    ensure_not_past, validate, validate_fields, BookingInput,
};
use crate::services::pricing::compute_total;
use crate::utils::errors::{not_found_error, AppError};

pub struct BookingService {
    clients: Arc<dyn ClientStore>,
    vehicles: Arc<dyn VehicleStore>,
    bookings: Arc<dyn BookingStore>,
    policy: Arc<dyn AccessPolicy>,
    availability: AvailabilityChecker,
    vehicle_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl BookingService {
    pub fn new(
        clients: Arc<dyn ClientStore>,
        vehicles: Arc<dyn VehicleStore>,
        bookings: Arc<dyn BookingStore>,
        policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        let availability = AvailabilityChecker::new(bookings.clone());
        Self {
            clients,
            vehicles,
            bookings,
            policy,
            availability,
            vehicle_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Lock de serialización por vehículo, creado bajo demanda
    async fn lock_for_vehicle(&self, vehicle_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.vehicle_locks.lock().await;
        locks
            .entry(vehicle_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    pub async fn create(
        &self,
        role: UserRole,
        request: CreateBookingRequest,
    ) -> Result<Booking, AppError> {
        self.policy.require(role, "bookings", "create")?;

        let input = BookingInput {
            client_id: request.client,
            vehicle_id: request.vehicle,
            start_date: request.start_date,
            end_date: request.end_date,
        };
        let validated = validate(&input, Utc::now().date_naive())?;

        let client = self
            .clients
            .find_by_id(validated.client_id)
            .await?
            .ok_or_else(|| not_found_error("Client", &validated.client_id.to_string()))?;
        let vehicle = self
            .vehicles
            .find_by_id(validated.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &validated.vehicle_id.to_string()))?;

        // El lock cubre chequeo + insert
        let lock = self.lock_for_vehicle(vehicle.id).await;
        let _guard = lock.lock().await;

        if !self
            .availability
            .is_available(vehicle.id, validated.start_date, validated.end_date, None)
            .await?
        {
            return Err(AppError::VehicleUnavailable(format!(
                "Vehicle {} is already booked between {} and {}",
                vehicle.license_plate, validated.start_date, validated.end_date
            )));
        }

        // El precio queda fijado acá; un cambio posterior de tarifa no lo toca
        let quote = compute_total(validated.start_date, validated.end_date, vehicle.daily_rate);

        let booking = Booking {
            id: Uuid::new_v4(),
            client_id: client.id,
            vehicle_id: vehicle.id,
            start_date: validated.start_date,
            end_date: validated.end_date,
            status: BookingStatus::Active,
            days: quote.days,
            daily_rate: vehicle.daily_rate,
            total_amount: quote.total,
            created_at: Utc::now(),
        };

        self.bookings.insert(&booking).await
    }

    pub async fn update(
        &self,
        role: UserRole,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<Booking, AppError> {
        self.policy.require(role, "bookings", "edit")?;

        let current = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        if current.status.is_terminal() {
            return Err(AppError::TerminalStateViolation(format!(
                "Booking {} is {} and can no longer be edited",
                id,
                current.status.as_str()
            )));
        }

        // Merge: los campos ausentes conservan el valor actual
        let input = BookingInput {
            client_id: Some(
                request
                    .client
                    .unwrap_or_else(|| current.client_id.to_string()),
            ),
            vehicle_id: Some(
                request
                    .vehicle
                    .unwrap_or_else(|| current.vehicle_id.to_string()),
            ),
            start_date: Some(
                request
                    .start_date
                    .unwrap_or_else(|| current.start_date.format("%Y-%m-%d").to_string()),
            ),
            end_date: Some(
                request
                    .end_date
                    .unwrap_or_else(|| current.end_date.format("%Y-%m-%d").to_string()),
            ),
        };
        let validated = validate_fields(&input)?;

        // El no-pasado se re-chequea solo si la fecha de inicio cambió; un
        // booking en curso puede seguir editándose en su fecha de fin
        if validated.start_date != current.start_date {
            ensure_not_past(validated.start_date, Utc::now().date_naive())?;
        }

        self.clients
            .find_by_id(validated.client_id)
            .await?
            .ok_or_else(|| not_found_error("Client", &validated.client_id.to_string()))?;
        let vehicle = self
            .vehicles
            .find_by_id(validated.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &validated.vehicle_id.to_string()))?;

        let lock = self.lock_for_vehicle(validated.vehicle_id).await;
        let _guard = lock.lock().await;

        if !self
            .availability
            .is_available(
                validated.vehicle_id,
                validated.start_date,
                validated.end_date,
                Some(current.id),
            )
            .await?
        {
            return Err(AppError::VehicleUnavailable(format!(
                "Vehicle {} is already booked between {} and {}",
                vehicle.license_plate, validated.start_date, validated.end_date
            )));
        }

        // La tarifa fijada solo cambia si el booking se mueve a otro vehículo
        let daily_rate = if validated.vehicle_id != current.vehicle_id {
            vehicle.daily_rate
        } else {
            current.daily_rate
        };
        let quote = compute_total(validated.start_date, validated.end_date, daily_rate);

        let updated = Booking {
            client_id: validated.client_id,
            vehicle_id: validated.vehicle_id,
            start_date: validated.start_date,
            end_date: validated.end_date,
            days: quote.days,
            daily_rate,
            total_amount: quote.total,
            ..current
        };

        self.bookings.update(&updated).await
    }

    pub async fn change_status(
        &self,
        role: UserRole,
        id: Uuid,
        new_status: &str,
    ) -> Result<Booking, AppError> {
        self.policy.require(role, "bookings", "edit")?;

        let next = BookingStatus::from_str(new_status).ok_or_else(|| {
            AppError::InvalidTransition(format!("Unknown booking status '{}'", new_status))
        })?;

        let current = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        if current.status.is_terminal() {
            return Err(AppError::TerminalStateViolation(format!(
                "Booking {} is {} and cannot transition to {}",
                id,
                current.status.as_str(),
                next.as_str()
            )));
        }

        if !current.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "Booking {} cannot transition from {} to {}",
                id,
                current.status.as_str(),
                next.as_str()
            )));
        }

        let updated = Booking {
            status: next,
            ..current
        };
        self.bookings.update(&updated).await
    }

    /// Eliminación incondicional: cualquier estado puede borrarse
    pub async fn delete(&self, role: UserRole, id: Uuid) -> Result<bool, AppError> {
        self.policy.require(role, "bookings", "delete")?;

        if !self.bookings.delete(id).await? {
            return Err(not_found_error("Booking", &id.to_string()));
        }
        Ok(true)
    }

    pub async fn get(&self, id: Uuid) -> Result<Booking, AppError> {
        self.bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Booking>, AppError> {
        self.bookings.find_all().await
    }

    /// Consulta de disponibilidad de solo lectura; no requiere permisos
    pub async fn check_availability(
        &self,
        vehicle_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<bool, AppError> {
        self.availability
            .is_available(vehicle_id, start_date, end_date, None)
            .await
    }
}
