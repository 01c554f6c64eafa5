//! Scripted stand-in for the job board APIs.

use crate::error::FetchError;
use crate::transport::{PageRequest, Transport};
use reqwest::StatusCode;
use serde_json::Value;
use std::cell::RefCell;

type Responder = Box<dyn Fn(&PageRequest) -> Result<Value, FetchError>>;

pub struct FakeTransport {
    respond: Responder,
    requests: RefCell<Vec<PageRequest>>,
}

impl FakeTransport {
    pub fn new(respond: impl Fn(&PageRequest) -> Result<Value, FetchError> + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn status_error(request: &PageRequest, code: u16) -> FetchError {
        FetchError::Status {
            url: request.url.clone(),
            status: StatusCode::from_u16(code).unwrap(),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|r| r.param_value("page").and_then(|p| p.parse().ok()))
            .collect()
    }
}

impl Transport for FakeTransport {
    fn get_json(&self, request: &PageRequest) -> Result<Value, FetchError> {
        self.requests.borrow_mut().push(request.clone());
        (self.respond)(request)
    }
}
