//! Modelo de Client
//!
//! Mapea exactamente a la tabla clients. Los campos idOrPassport y
//! licenseNumber se almacenan en mayúsculas para que la unicidad sea
//! case-insensitive; el teléfono se almacena sin espacios en los bordes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub full_name: String,
    pub id_or_passport: String,
    pub phone: String,
    pub address: Option<String>,
    pub license_number: String,
    pub created_at: DateTime<Utc>,
}
