//! Paginated fetching shared by both job boards.
//!
//! The loop itself is generic. Each board decides how its pages look and
//! when to stop through [`VacancySource::parse_page`] and [`PageCursor`].

use crate::error::FetchError;
use crate::transport::{PageRequest, Transport};
use common::VacancyRecord;
use serde_json::Value;
use tracing::{debug, info};

/// Where a board says we are in the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCursor {
    /// Page index plus the page count the server declared.
    Counted { page: u32, pages: u32 },
    /// The server's "more results" flag.
    MoreFlag { more: bool },
}

/// One parsed page of a board's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub items: Vec<VacancyRecord>,
    pub declared_total: u64,
    pub cursor: PageCursor,
}

impl PageResponse {
    /// Counted pages stop on an empty page or once the declared page count
    /// is reached. Flagged pages stop as soon as the flag is false,
    /// whatever the page held.
    pub fn has_more_pages(&self) -> bool {
        match self.cursor {
            PageCursor::Counted { page, pages } => {
                !self.items.is_empty() && page.saturating_add(1) < pages
            }
            PageCursor::MoreFlag { more } => more,
        }
    }
}

/// A job board: how to ask for a page, how to read it, how to price a
/// vacancy.
pub trait VacancySource {
    fn name(&self) -> &'static str;

    fn page_request(&self, keyword: &str, page: u32) -> PageRequest;

    fn parse_page(&self, page: u32, body: &Value) -> PageResponse;

    fn estimate(&self, vacancy: &VacancyRecord) -> Option<f64>;
}

/// Every vacancy a board returned for one keyword.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchedVacancies {
    pub vacancies: Vec<VacancyRecord>,
    /// The board's own count of matches, read from the first page.
    pub total_found: u64,
}

pub struct Fetcher<S, T> {
    source: S,
    transport: T,
}

impl<S, T> Fetcher<S, T>
where
    S: VacancySource,
    T: Transport,
{
    pub fn new(source: S, transport: T) -> Self {
        Self { source, transport }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Walks every page for `keyword`, starting at page 0.
    ///
    /// Any transport or HTTP error aborts the walk and is returned as is.
    pub fn fetch(&self, keyword: &str) -> Result<FetchedVacancies, FetchError> {
        let mut fetched = FetchedVacancies::default();
        let mut page = 0;

        loop {
            debug!(source = self.source.name(), keyword, page, "Requesting page");

            let request = self.source.page_request(keyword, page);
            let body = self.transport.get_json(&request)?;
            let response = self.source.parse_page(page, &body);

            if page == 0 {
                fetched.total_found = response.declared_total;
            }

            let has_more = response.has_more_pages();
            fetched.vacancies.extend(response.items);

            if !has_more {
                break;
            }
            page += 1;
        }

        info!(
            source = self.source.name(),
            keyword,
            total_found = fetched.total_found,
            fetched = fetched.vacancies.len(),
            pages = page + 1,
            "✅ Fetched vacancies"
        );

        Ok(fetched)
    }
}

/// Array field, or empty when absent or not an array.
pub(crate) fn array_field(body: &Value, key: &str) -> Vec<Value> {
    body.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Non-negative integer field, or zero.
pub(crate) fn count_field(body: &Value, key: &str) -> u64 {
    body.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// Boolean field, or false.
pub(crate) fn flag_field(body: &Value, key: &str) -> bool {
    body.get(key).and_then(Value::as_bool).unwrap_or(false)
}
