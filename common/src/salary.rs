//! Salary estimation: one midpoint rule, two field layouts.

use crate::{Currency, SalaryRange, VacancyRecord};
use serde_json::Value;

/// Collapses a salary range into one comparable number.
///
/// - both bounds: their mean
/// - only the lower bound: `from * 1.2`
/// - only the upper bound: `to * 0.8`
/// - neither: `None`
pub fn predict_salary(range: SalaryRange) -> Option<f64> {
    match (range.from, range.to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

/// Estimates a salary only when it is quoted in the accepted currency.
fn estimate_in(range: SalaryRange, currency: Option<&str>, accepted: Currency) -> Option<f64> {
    if currency != Some(accepted.code()) {
        return None;
    }
    predict_salary(range)
}

fn amount(record: &Value, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

/// HeadHunter keeps the salary in a nested object:
/// `{"salary": {"from": .., "to": .., "currency": "RUR"}}`.
pub fn estimate_hh(vacancy: &VacancyRecord) -> Option<f64> {
    let salary = vacancy.get("salary").filter(|s| is_present(s))?;

    let range = SalaryRange::new(amount(salary, "from"), amount(salary, "to"));
    let currency = salary.get("currency").and_then(Value::as_str);

    estimate_in(range, currency, Currency::HeadHunterRouble)
}

/// SuperJob keeps flat fields: `payment_from`, `payment_to`, `currency`.
pub fn estimate_superjob(vacancy: &VacancyRecord) -> Option<f64> {
    let range = SalaryRange::new(
        amount(vacancy, "payment_from"),
        amount(vacancy, "payment_to"),
    );
    let currency = vacancy.get("currency").and_then(Value::as_str);

    estimate_in(range, currency, Currency::SuperJobRouble)
}

// An empty salary object carries no more information than a missing one.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
