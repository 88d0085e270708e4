use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::models::auth::UserRole;
use crate::models::vehicle::Vehicle;
use crate::repositories::{BookingStore, VehicleStore};
use crate::services::access_policy::AccessPolicy;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct VehicleController {
    vehicles: Arc<dyn VehicleStore>,
    bookings: Arc<dyn BookingStore>,
    policy: Arc<dyn AccessPolicy>,
}

impl VehicleController {
    pub fn new(
        vehicles: Arc<dyn VehicleStore>,
        bookings: Arc<dyn BookingStore>,
        policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            vehicles,
            bookings,
            policy,
        }
    }

    pub async fn create(
        &self,
        role: UserRole,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        self.policy.require(role, "vehicles", "create")?;
        request.validate()?;

        let license_plate = request.license_plate.trim().to_uppercase();
        if self
            .vehicles
            .license_plate_exists(&license_plate, None)
            .await?
        {
            return Err(conflict_error("Vehicle", "license plate"));
        }

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            make: request.make.trim().to_string(),
            model: request.model.trim().to_string(),
            year: request.year,
            color: request
                .color
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            license_plate,
            daily_rate: request.daily_rate,
            created_at: Utc::now(),
        };

        let created = self.vehicles.insert(&vehicle).await?;
        Ok(ApiResponse::success_with_message(
            created.into(),
            "Vehicle added successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, role: UserRole, id: Uuid) -> Result<VehicleResponse, AppError> {
        self.policy.require(role, "vehicles", "view")?;

        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;
        Ok(vehicle.into())
    }

    pub async fn list(&self, role: UserRole) -> Result<Vec<VehicleResponse>, AppError> {
        self.policy.require(role, "vehicles", "view")?;

        let vehicles = self.vehicles.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        role: UserRole,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        self.policy.require(role, "vehicles", "edit")?;
        request.validate()?;

        let current = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let license_plate = request
            .license_plate
            .map(|v| v.trim().to_uppercase())
            .unwrap_or(current.license_plate);
        if self
            .vehicles
            .license_plate_exists(&license_plate, Some(id))
            .await?
        {
            return Err(conflict_error("Vehicle", "license plate"));
        }

        // Cambiar la tarifa solo afecta bookings futuros: los existentes
        // conservan la tarifa fijada en su creación
        let vehicle = Vehicle {
            id,
            make: request
                .make
                .map(|v| v.trim().to_string())
                .unwrap_or(current.make),
            model: request
                .model
                .map(|v| v.trim().to_string())
                .unwrap_or(current.model),
            year: request.year.unwrap_or(current.year),
            color: match request.color {
                Some(c) => {
                    let c = c.trim().to_string();
                    if c.is_empty() {
                        None
                    } else {
                        Some(c)
                    }
                }
                None => current.color,
            },
            license_plate,
            daily_rate: request.daily_rate.unwrap_or(current.daily_rate),
            created_at: current.created_at,
        };

        let updated = self.vehicles.update(&vehicle).await?;
        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, role: UserRole, id: Uuid) -> Result<(), AppError> {
        self.policy.require(role, "vehicles", "delete")?;

        // No se puede eliminar un vehículo referenciado por un booking Active
        if self.bookings.active_exists_for_vehicle(id).await? {
            return Err(AppError::Conflict(
                "Vehicle has active bookings and cannot be deleted".to_string(),
            ));
        }

        if !self.vehicles.delete(id).await? {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryStore;
    use crate::services::access_policy::StaticAccessPolicy;
    use rust_decimal::Decimal;

    fn controller_with_store() -> (VehicleController, MemoryStore) {
        let store = MemoryStore::new();
        let controller = VehicleController::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(StaticAccessPolicy::new()),
        );
        (controller, store)
    }

    fn request(plate: &str) -> CreateVehicleRequest {
        CreateVehicleRequest {
            make: "Toyota".to_string(),
            model: "Vitz".to_string(),
            year: 2018,
            color: None,
            license_plate: plate.to_string(),
            daily_rate: Decimal::from(3500),
        }
    }

    #[tokio::test]
    async fn test_license_plate_must_be_unique() {
        let (controller, _store) = controller_with_store();

        controller
            .create(UserRole::Director, request("kda 123a"))
            .await
            .unwrap();

        // La matrícula se normaliza a mayúsculas antes del chequeo
        let err = controller
            .create(UserRole::Director, request("KDA 123A"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_staff_cannot_create_vehicles() {
        let (controller, _store) = controller_with_store();
        let err = controller
            .create(UserRole::Staff, request("KDB 555B"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PermissionDenied(_)));
    }
}
