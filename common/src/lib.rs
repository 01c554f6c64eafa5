//! Shared vacancy model and salary estimation.
//!
//! Everything here is pure: no network, no environment. The collector
//! feeds raw vacancy records in and gets comparable salary numbers out.

pub mod salary;

pub use salary::{estimate_hh, estimate_superjob, predict_salary};

/// One raw posting exactly as the job board returned it.
pub type VacancyRecord = serde_json::Value;

/// Salary bounds pulled out of a vacancy record.
///
/// A bound of `0` is stored as `None`: job boards use zero to mean
/// "not specified", never an actual zero salary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            from: from.filter(|v| *v != 0.0),
            to: to.filter(|v| *v != 0.0),
        }
    }
}

/// Currency codes as each board spells the Russian rouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// HeadHunter: `"RUR"`
    HeadHunterRouble,
    /// SuperJob: `"rub"`
    SuperJobRouble,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::HeadHunterRouble => "RUR",
            Self::SuperJobRouble => "rub",
        }
    }
}

/// Per-language statistics for one job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: i64,
}

impl LanguageStats {
    /// Folds the usable estimates for one keyword into statistics.
    ///
    /// `declared_total` is what the board reported as matching. It is raised
    /// to the number of estimates if the board under-reported, so
    /// `vacancies_processed <= vacancies_found` always holds.
    pub fn from_estimates(declared_total: u64, estimates: &[f64]) -> Self {
        let processed = estimates.len() as u64;
        let average_salary = if estimates.is_empty() {
            0
        } else {
            (estimates.iter().sum::<f64>() / estimates.len() as f64) as i64
        };

        Self {
            vacancies_found: declared_total.max(processed),
            vacancies_processed: processed,
            average_salary,
        }
    }
}
