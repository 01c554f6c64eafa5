//! SuperJob (api.superjob.ru): "more" flag pagination, flat salary fields.

use crate::fetcher::{array_field, count_field, flag_field, PageCursor, PageResponse, VacancySource};
use crate::transport::PageRequest;
use common::VacancyRecord;
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperJobParams {
    pub api_url: String,
    pub api_key: String,
    /// Catalogue id, 48 is "Development, programming"
    pub catalogue: u32,
    /// Town id, 4 is Moscow
    pub town: u32,
    pub count: u32,
}

impl SuperJobParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            catalogue: 48,
            town: 4,
            count: 100,
        }
    }
}

pub struct SuperJob {
    params: SuperJobParams,
}

impl SuperJob {
    pub fn new(params: SuperJobParams) -> Self {
        Self { params }
    }
}

impl VacancySource for SuperJob {
    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn page_request(&self, keyword: &str, page: u32) -> PageRequest {
        PageRequest::new(&self.params.api_url)
            .header(API_KEY_HEADER, &self.params.api_key)
            .param("catalogues", self.params.catalogue)
            .param("town", self.params.town)
            .param("count", self.params.count)
            .param("page", page)
            .param("keyword", keyword)
    }

    fn parse_page(&self, _page: u32, body: &Value) -> PageResponse {
        PageResponse {
            items: array_field(body, "objects"),
            declared_total: count_field(body, "total"),
            cursor: PageCursor::MoreFlag {
                more: flag_field(body, "more"),
            },
        }
    }

    fn estimate(&self, vacancy: &VacancyRecord) -> Option<f64> {
        common::estimate_superjob(vacancy)
    }
}
