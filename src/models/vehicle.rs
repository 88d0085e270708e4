//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla vehicles. La tarifa diaria es un Decimal
//! positivo; la matrícula es única en toda la flota.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub license_plate: String,
    pub daily_rate: Decimal,
    pub created_at: DateTime<Utc>,
}
