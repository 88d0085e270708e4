//! Validador de bookings
//!
//! Funciones puras: sin I/O y deterministas para un mismo `today`. El
//! orden de los chequeos es estable: campos requeridos, luego rango de
//! fechas, luego fecha de inicio en el pasado.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::validation::{parse_date, parse_uuid};

/// Input crudo de un booking, tal como llega del layer HTTP
#[derive(Debug, Clone, Default)]
pub struct BookingInput {
    pub client_id: Option<String>,
    pub vehicle_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Booking normalizado: ids parseados y fechas a granularidad de día
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingField(format!("{} is required", field))),
    }
}

/// Valida presencia y formato de los campos y el orden de las fechas.
/// No chequea el pasado: para eso está [`ensure_not_past`] o [`validate`].
pub fn validate_fields(input: &BookingInput) -> Result<ValidatedBooking, AppError> {
    let client_id = parse_uuid("client", required("client", &input.client_id)?)?;
    let vehicle_id = parse_uuid("vehicle", required("vehicle", &input.vehicle_id)?)?;
    let start_date = parse_date("startDate", required("startDate", &input.start_date)?)?;
    let end_date = parse_date("endDate", required("endDate", &input.end_date)?)?;

    if start_date > end_date {
        return Err(AppError::InvalidDateRange(format!(
            "startDate {} is after endDate {}",
            start_date, end_date
        )));
    }

    Ok(ValidatedBooking {
        client_id,
        vehicle_id,
        start_date,
        end_date,
    })
}

/// La fecha de inicio no puede ser anterior al día de hoy (reloj del
/// servidor, granularidad de día)
pub fn ensure_not_past(start_date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    if start_date < today {
        return Err(AppError::PastStartDate(format!(
            "startDate {} is before today {}",
            start_date, today
        )));
    }
    Ok(())
}

/// Validación completa para la creación de un booking
pub fn validate(input: &BookingInput, today: NaiveDate) -> Result<ValidatedBooking, AppError> {
    let validated = validate_fields(input)?;
    ensure_not_past(validated.start_date, today)?;
    Ok(validated)
}
