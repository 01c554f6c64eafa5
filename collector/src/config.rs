//! Collector configuration, read once from the environment.
//!
//! `.env` is loaded by `main` before this runs.
//!
//! Required:
//! - `SUPERJOB_API_KEY` - SuperJob application key
//!
//! Optional:
//! - `HH_API_URL`, `HH_AREA` (1), `HH_PERIOD` (30), `HH_PER_PAGE` (100)
//! - `SUPERJOB_API_URL`, `SUPERJOB_CATALOGUE` (48), `SUPERJOB_TOWN` (4), `SUPERJOB_COUNT` (100)
//! - `LANGUAGES` - comma separated keywords
//! - `HTTP_USER_AGENT`
//! - `RUST_LOG` - log filter (default: `info`)

use crate::sources::{HeadHunterParams, SuperJobParams};
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_LANGUAGES: [&str; 16] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "CSS",
    "C#",
    "C",
    "Go",
    "Shell",
    "Objective-C",
    "Scala",
    "Swift",
    "TypeScript",
    "1C",
];

pub const DEFAULT_USER_AGENT: &str = "vacancy-stats-collector/0.1 (salary statistics by language)";

#[derive(Debug, Clone)]
pub struct Config {
    pub headhunter: HeadHunterParams,
    pub superjob: SuperJobParams,
    pub languages: Vec<String>,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("SUPERJOB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("SUPERJOB_API_KEY must be set")?;

        let hh_defaults = HeadHunterParams::default();
        let headhunter = HeadHunterParams {
            api_url: lookup("HH_API_URL").unwrap_or(hh_defaults.api_url),
            area: parse_or(&lookup, "HH_AREA", hh_defaults.area)?,
            period: parse_or(&lookup, "HH_PERIOD", hh_defaults.period)?,
            per_page: parse_or(&lookup, "HH_PER_PAGE", hh_defaults.per_page)?,
        };

        let sj_defaults = SuperJobParams::new(api_key);
        let superjob = SuperJobParams {
            api_url: lookup("SUPERJOB_API_URL").unwrap_or_else(|| sj_defaults.api_url.clone()),
            catalogue: parse_or(&lookup, "SUPERJOB_CATALOGUE", sj_defaults.catalogue)?,
            town: parse_or(&lookup, "SUPERJOB_TOWN", sj_defaults.town)?,
            count: parse_or(&lookup, "SUPERJOB_COUNT", sj_defaults.count)?,
            ..sj_defaults
        };

        let languages = match lookup("LANGUAGES") {
            Some(list) => parse_languages(&list),
            None => DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        };

        Ok(Self {
            headhunter,
            superjob,
            languages,
            user_agent: lookup("HTTP_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

/// Splits a comma separated keyword list, dropping blanks.
pub fn parse_languages(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
