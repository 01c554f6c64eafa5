use crate::error::FetchError;
use crate::fetcher::{Fetcher, VacancySource};
use crate::transport::Transport;
use common::LanguageStats;
use tracing::{error, info};

/// Statistics per keyword, in the order the keywords were given.
pub type LanguageTable = Vec<(String, LanguageStats)>;

/// Fetches and prices vacancies for every keyword on one job board.
///
/// A keyword with nothing found still gets a row of zeros. The first fetch
/// error aborts the whole board.
pub fn aggregate<S, T>(
    fetcher: &Fetcher<S, T>,
    keywords: &[String],
) -> Result<LanguageTable, FetchError>
where
    S: VacancySource,
    T: Transport,
{
    let source = fetcher.source();
    let mut table = Vec::with_capacity(keywords.len());

    for keyword in keywords {
        let fetched = fetcher.fetch(keyword).inspect_err(|e| {
            error!(
                source = source.name(),
                keyword = %keyword,
                error = %e,
                "❌ Fetch failed"
            )
        })?;

        let estimates: Vec<f64> = fetched
            .vacancies
            .iter()
            .filter_map(|vacancy| source.estimate(vacancy))
            .collect();

        let stats = LanguageStats::from_estimates(fetched.total_found, &estimates);
        info!(
            source = source.name(),
            keyword = %keyword,
            found = stats.vacancies_found,
            processed = stats.vacancies_processed,
            average = stats.average_salary,
            "📊 Language aggregated"
        );

        table.push((keyword.clone(), stats));
    }

    Ok(table)
}
