//! HeadHunter (api.hh.ru): counted pages, nested salary object.

use crate::fetcher::{array_field, count_field, PageCursor, PageResponse, VacancySource};
use crate::transport::PageRequest;
use common::VacancyRecord;
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "https://api.hh.ru/vacancies";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadHunterParams {
    pub api_url: String,
    /// Region code, 1 is Moscow
    pub area: u32,
    /// Only vacancies published within this many days
    pub period: u32,
    pub per_page: u32,
}

impl Default for HeadHunterParams {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            area: 1,
            period: 30,
            per_page: 100,
        }
    }
}

pub struct HeadHunter {
    params: HeadHunterParams,
}

impl HeadHunter {
    pub fn new(params: HeadHunterParams) -> Self {
        Self { params }
    }
}

impl VacancySource for HeadHunter {
    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    fn page_request(&self, keyword: &str, page: u32) -> PageRequest {
        PageRequest::new(&self.params.api_url)
            .param("text", keyword)
            .param("area", self.params.area)
            .param("period", self.params.period)
            .param("per_page", self.params.per_page)
            .param("page", page)
    }

    fn parse_page(&self, page: u32, body: &Value) -> PageResponse {
        let pages = u32::try_from(count_field(body, "pages")).unwrap_or(u32::MAX);
        PageResponse {
            items: array_field(body, "items"),
            declared_total: count_field(body, "found"),
            cursor: PageCursor::Counted { page, pages },
        }
    }

    fn estimate(&self, vacancy: &VacancyRecord) -> Option<f64> {
        common::estimate_hh(vacancy)
    }
}
