//! Utilidades de validación
//!
//! Funciones helper para validación de datos y conversión de tipos.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::ValidationError;

/// Validar y convertir string a UUID
pub fn parse_uuid(field: &str, value: &str) -> Result<Uuid, crate::utils::errors::AppError> {
    Uuid::parse_str(value.trim()).map_err(|_| {
        crate::utils::errors::AppError::MissingField(format!("{} is missing or invalid", field))
    })
}

/// Validar y convertir string a fecha (formato YYYY-MM-DD, sin hora)
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, crate::utils::errors::AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        crate::utils::errors::AppError::MissingField(format!("{} is missing or invalid", field))
    })
}

/// Validador custom para montos que deben ser positivos
pub fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_iso_day() {
        assert_eq!(
            parse_date("startDate", "2026-09-10").unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("startDate", "10/09/2026").is_err());
        assert!(parse_date("startDate", "").is_err());
    }

    #[test]
    fn test_positive_decimal() {
        assert!(validate_positive_decimal(&Decimal::from(5000)).is_ok());
        assert!(validate_positive_decimal(&Decimal::ZERO).is_err());
        assert!(validate_positive_decimal(&Decimal::from(-1)).is_err());
    }
}
