//! Chequeo de disponibilidad
//!
//! Dos rangos de días se solapan bajo comparación inclusiva-inclusiva:
//! `s1 <= e2 && s2 <= e1`. Un booking que termina el día N bloquea a otro
//! que empieza el día N (no hay entrega y retiro el mismo día).

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::repositories::BookingStore;
use crate::utils::errors::AppError;

/// Predicado de solapamiento de rangos inclusivos
pub fn ranges_overlap(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 <= e2 && s2 <= e1
}

/// Consulta de solo lectura sobre los bookings Active de un vehículo
pub struct AvailabilityChecker {
    bookings: Arc<dyn BookingStore>,
}

impl AvailabilityChecker {
    pub fn new(bookings: Arc<dyn BookingStore>) -> Self {
        Self { bookings }
    }

    /// true si ningún booking Active del vehículo solapa el rango pedido.
    /// `exclude` omite un booking concreto, para revalidar su propia edición.
    pub async fn is_available(
        &self,
        vehicle_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let active = self
            .bookings
            .find_active_for_vehicle(vehicle_id, exclude)
            .await?;

        Ok(!active
            .iter()
            .any(|b| ranges_overlap(b.start_date, b.end_date, start_date, end_date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(day(1), day(5), day(7), day(9)));
        assert!(!ranges_overlap(day(7), day(9), day(1), day(5)));
    }

    #[test]
    fn test_contained_and_partial_overlaps() {
        assert!(ranges_overlap(day(10), day(12), day(11), day(13)));
        assert!(ranges_overlap(day(10), day(20), day(12), day(14)));
        assert!(ranges_overlap(day(12), day(14), day(10), day(20)));
    }

    #[test]
    fn test_shared_boundary_day_counts_as_overlap() {
        // El día de devolución bloquea un inicio ese mismo día
        assert!(ranges_overlap(day(10), day(12), day(12), day(15)));
        assert!(ranges_overlap(day(12), day(15), day(10), day(12)));
    }

    #[test]
    fn test_single_day_ranges() {
        assert!(ranges_overlap(day(10), day(10), day(10), day(10)));
        assert!(!ranges_overlap(day(10), day(10), day(11), day(11)));
    }
}
