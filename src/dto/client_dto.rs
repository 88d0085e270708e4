use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::client::Client;

/// Request para registrar un cliente nuevo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    #[validate(length(min = 3, max = 30))]
    pub id_or_passport: String,

    #[validate(length(min = 5, max = 20))]
    pub phone: String,

    #[validate(length(max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 3, max = 30))]
    pub license_number: String,
}

/// Request para editar un cliente existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: Option<String>,

    #[validate(length(min = 3, max = 30))]
    pub id_or_passport: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 3, max = 30))]
    pub license_number: Option<String>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: String,
    pub full_name: String,
    pub id_or_passport: String,
    pub phone: String,
    pub address: Option<String>,
    pub license_number: String,
    pub created_at: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.to_string(),
            full_name: client.full_name,
            id_or_passport: client.id_or_passport,
            phone: client.phone,
            address: client.address,
            license_number: client.license_number,
            created_at: client.created_at.to_rfc3339(),
        }
    }
}
