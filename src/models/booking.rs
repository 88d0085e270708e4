//! Modelo de Booking
//!
//! Mapea exactamente a la tabla bookings. El booking referencia a un
//! cliente y a un vehículo por id; la tarifa diaria, los días y el monto
//! total quedan fijados en la fila al momento de la creación, de modo que
//! un cambio posterior en la tarifa del vehículo nunca altera el precio de
//! un booking ya creado.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del booking - mapea al ENUM booking_status
///
/// Máquina de estados: Active es el estado inicial; Completed y Cancelled
/// son terminales y no admiten ninguna transición de salida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "Active",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(BookingStatus::Active),
            "Completed" => Some(BookingStatus::Completed),
            "Cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Un estado terminal no admite transiciones de salida
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Active)
    }

    /// Tabla de transiciones: Active -> Completed, Active -> Cancelled
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Active, BookingStatus::Completed)
                | (BookingStatus::Active, BookingStatus::Cancelled)
        )
    }
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub days: i64,
    pub daily_rate: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_is_the_only_non_terminal_state() {
        assert!(!BookingStatus::Active.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_transition_table() {
        assert!(BookingStatus::Active.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Active.can_transition_to(BookingStatus::Cancelled));

        // Ninguna transición sale de un estado terminal
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Active));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Active));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Completed));

        // Tampoco hay auto-transiciones
        assert!(!BookingStatus::Active.can_transition_to(BookingStatus::Active));
    }

    #[test]
    fn test_status_str_roundtrip() {
        for status in [
            BookingStatus::Active,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::from_str("Pending"), None);
    }
}
