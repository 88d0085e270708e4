//! Cálculo de precios
//!
//! Los días se cuentan de forma inclusiva sobre fechas a granularidad de
//! día: un booking del día 10 al 12 ocupa los días 10, 11 y 12 y cuesta
//! 3 tarifas diarias; un booking del mismo día cuenta como 1 día. El total
//! se fija con la tarifa vigente al momento de la creación.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Cotización derivada de un rango de fechas y una tarifa diaria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub days: i64,
    pub total: Decimal,
}

pub fn compute_total(start_date: NaiveDate, end_date: NaiveDate, daily_rate: Decimal) -> Quote {
    // Conteo inclusivo: |end - start| + 1, nunca menos de 1 día
    let days = ((end_date - start_date).num_days().abs() + 1).max(1);
    Quote {
        days,
        total: Decimal::from(days) * daily_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    #[test]
    fn test_same_day_counts_as_one_day() {
        let rate = Decimal::from(5000);
        let quote = compute_total(day(10), day(10), rate);
        assert_eq!(quote.days, 1);
        assert_eq!(quote.total, rate);
    }

    #[test]
    fn test_start_plus_four_days_is_five_days() {
        let quote = compute_total(day(10), day(14), Decimal::from(5000));
        assert_eq!(quote.days, 5);
        assert_eq!(quote.total, Decimal::from(25000));
    }

    #[test]
    fn test_reference_scenario_three_days_at_5000() {
        // Día 10 al 12 ocupa los días 10, 11 y 12
        let quote = compute_total(day(10), day(12), Decimal::from(5000));
        assert_eq!(quote.days, 3);
        assert_eq!(quote.total, Decimal::from(15000));
    }

    #[test]
    fn test_reversed_dates_use_absolute_difference() {
        let a = compute_total(day(10), day(14), Decimal::from(100));
        let b = compute_total(day(14), day(10), Decimal::from(100));
        assert_eq!(a, b);
    }
}
