//! Vacancy Salary Collector
//!
//! Queries HeadHunter and SuperJob for vacancies per programming language,
//! estimates a monthly salary for each vacancy and prints average salaries
//! per language as two tables.

mod aggregator;
mod config;
mod error;
mod fetcher;
mod report;
mod sources;
#[cfg(test)]
mod testing;
mod transport;

use aggregator::aggregate;
use anyhow::Context;
use config::Config;
use fetcher::Fetcher;
use report::render_table;
use sources::{HeadHunter, SuperJob};
use tracing::info;
use tracing_subscriber::EnvFilter;
use transport::HttpTransport;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::from_env()?;
    info!(languages = cfg.languages.len(), "🔍 Starting vacancy salary collector");

    let transport = HttpTransport::new(&cfg.user_agent)?;

    let headhunter = Fetcher::new(HeadHunter::new(cfg.headhunter.clone()), &transport);
    let headhunter_stats =
        aggregate(&headhunter, &cfg.languages).context("collecting HeadHunter statistics")?;

    let superjob = Fetcher::new(SuperJob::new(cfg.superjob.clone()), &transport);
    let superjob_stats =
        aggregate(&superjob, &cfg.languages).context("collecting SuperJob statistics")?;

    println!("{}", render_table("HeadHunter Moscow", &headhunter_stats));
    println!("{}", render_table("SuperJob Moscow", &superjob_stats));

    info!("✨ Collection complete!");
    Ok(())
}
