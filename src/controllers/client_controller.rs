use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::ApiResponse;
use crate::models::auth::UserRole;
use crate::models::client::Client;
use crate::repositories::{BookingStore, ClientStore};
use crate::services::access_policy::AccessPolicy;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct ClientController {
    clients: Arc<dyn ClientStore>,
    bookings: Arc<dyn BookingStore>,
    policy: Arc<dyn AccessPolicy>,
}

impl ClientController {
    pub fn new(
        clients: Arc<dyn ClientStore>,
        bookings: Arc<dyn BookingStore>,
        policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            clients,
            bookings,
            policy,
        }
    }

    /// Nombre del campo único que colisiona, para el mensaje de conflicto
    fn duplicate_field(existing: &Client, id_or_passport: &str, phone: &str) -> &'static str {
        if existing.id_or_passport == id_or_passport {
            "ID/Passport number"
        } else if existing.phone == phone {
            "phone number"
        } else {
            "license number"
        }
    }

    pub async fn create(
        &self,
        role: UserRole,
        request: CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, AppError> {
        self.policy.require(role, "clients", "create")?;
        request.validate()?;

        // Normalización: id y licencia en mayúsculas, teléfono sin bordes
        let id_or_passport = request.id_or_passport.trim().to_uppercase();
        let phone = request.phone.trim().to_string();
        let license_number = request.license_number.trim().to_uppercase();

        if let Some(existing) = self
            .clients
            .find_duplicate(&id_or_passport, &phone, &license_number, None)
            .await?
        {
            let field = Self::duplicate_field(&existing, &id_or_passport, &phone);
            return Err(conflict_error("Client", field));
        }

        let client = Client {
            id: Uuid::new_v4(),
            full_name: request.full_name.trim().to_string(),
            id_or_passport,
            phone,
            address: request
                .address
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            license_number,
            created_at: Utc::now(),
        };

        let created = self.clients.insert(&client).await?;
        Ok(ApiResponse::success_with_message(
            created.into(),
            "Client added successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, role: UserRole, id: Uuid) -> Result<ClientResponse, AppError> {
        self.policy.require(role, "clients", "view")?;

        let client = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client", &id.to_string()))?;
        Ok(client.into())
    }

    pub async fn list(&self, role: UserRole) -> Result<Vec<ClientResponse>, AppError> {
        self.policy.require(role, "clients", "view")?;

        let clients = self.clients.find_all().await?;
        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    pub async fn update(
        &self,
        role: UserRole,
        id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, AppError> {
        self.policy.require(role, "clients", "edit")?;
        request.validate()?;

        let current = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client", &id.to_string()))?;

        let id_or_passport = request
            .id_or_passport
            .map(|v| v.trim().to_uppercase())
            .unwrap_or(current.id_or_passport);
        let phone = request
            .phone
            .map(|v| v.trim().to_string())
            .unwrap_or(current.phone);
        let license_number = request
            .license_number
            .map(|v| v.trim().to_uppercase())
            .unwrap_or(current.license_number);

        if let Some(existing) = self
            .clients
            .find_duplicate(&id_or_passport, &phone, &license_number, Some(id))
            .await?
        {
            let field = Self::duplicate_field(&existing, &id_or_passport, &phone);
            return Err(conflict_error("Client", field));
        }

        let client = Client {
            id,
            full_name: request
                .full_name
                .map(|v| v.trim().to_string())
                .unwrap_or(current.full_name),
            id_or_passport,
            phone,
            address: match request.address {
                Some(a) => {
                    let a = a.trim().to_string();
                    if a.is_empty() {
                        None
                    } else {
                        Some(a)
                    }
                }
                None => current.address,
            },
            license_number,
            created_at: current.created_at,
        };

        let updated = self.clients.update(&client).await?;
        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Client updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, role: UserRole, id: Uuid) -> Result<(), AppError> {
        self.policy.require(role, "clients", "delete")?;

        // No se puede eliminar un cliente referenciado por un booking Active
        if self.bookings.active_exists_for_client(id).await? {
            return Err(AppError::Conflict(
                "Client has active bookings and cannot be deleted".to_string(),
            ));
        }

        if !self.clients.delete(id).await? {
            return Err(not_found_error("Client", &id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryStore;
    use crate::services::access_policy::StaticAccessPolicy;

    fn controller_with_store() -> (ClientController, MemoryStore) {
        let store = MemoryStore::new();
        let controller = ClientController::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(StaticAccessPolicy::new()),
        );
        (controller, store)
    }

    fn request(id_or_passport: &str, phone: &str, license: &str) -> CreateClientRequest {
        CreateClientRequest {
            full_name: "John Kamau".to_string(),
            id_or_passport: id_or_passport.to_string(),
            phone: phone.to_string(),
            address: None,
            license_number: license.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_detection_is_case_insensitive() {
        let (controller, _store) = controller_with_store();

        controller
            .create(UserRole::Staff, request("ab123", "+254700000001", "dl-9"))
            .await
            .unwrap();

        // Mismo id/passport con otra capitalización colisiona
        let err = controller
            .create(UserRole::Staff, request("AB123", "+254700000002", "dl-10"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_owner_cannot_view_clients() {
        let (controller, _store) = controller_with_store();
        let err = controller.list(UserRole::Owner).await.unwrap_err();
        assert!(matches!(err, AppError::PermissionDenied(_)));
    }
}
