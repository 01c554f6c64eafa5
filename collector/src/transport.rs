use crate::error::FetchError;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

/// A single GET against a job board API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
}

impl PageRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    #[cfg(test)]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Blocking request function returning parsed JSON.
pub trait Transport {
    fn get_json(&self, request: &PageRequest) -> Result<Value, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_json(&self, request: &PageRequest) -> Result<Value, FetchError> {
        (**self).get_json(request)
    }
}

/// Real network transport backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, request: &PageRequest) -> Result<Value, FetchError> {
        let transport_error = |source: reqwest::Error| FetchError::Transport {
            url: request.url.clone(),
            source,
        };

        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().map_err(transport_error)?;
        let status = response.status();
        debug!(url = %request.url, %status, "📡 Page response");

        if !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status,
            });
        }

        let body = response.text().map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: request.url.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_page_request_builder() {
        let request = PageRequest::new("https://api.example.com/vacancies")
            .param("page", 3)
            .param("text", "Rust")
            .header("X-Api-App-Id", "secret");

        assert_eq!(request.param_value("page"), Some("3"));
        assert_eq!(request.param_value("text"), Some("Rust"));
        assert_eq!(request.param_value("missing"), None);
        assert_eq!(request.headers, vec![("X-Api-App-Id", "secret".to_string())]);
    }

    #[test]
    fn test_get_json_sends_query_and_headers() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/vacancies/")
            .match_header("X-Api-App-Id", "secret")
            .match_header("user-agent", "collector-test")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("keyword".into(), "C++".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"objects": [{"id": 1}], "more": false, "total": 1}"#)
            .create();

        let transport = HttpTransport::new("collector-test").unwrap();
        let request = PageRequest::new(format!("{}/vacancies/", server.url()))
            .header("X-Api-App-Id", "secret")
            .param("keyword", "C++")
            .param("page", 2);

        let body = transport.get_json(&request).unwrap();

        mock.assert();
        assert_eq!(body, json!({"objects": [{"id": 1}], "more": false, "total": 1}));
    }

    #[test]
    fn test_get_json_non_success_status() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/vacancies")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body(r#"{"errors": []}"#)
            .create();

        let transport = HttpTransport::new("collector-test").unwrap();
        let request = PageRequest::new(format!("{}/vacancies", server.url())).param("page", 0);

        let err = transport.get_json(&request).unwrap_err();

        mock.assert();
        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 503));
    }

    #[test]
    fn test_get_json_rejects_html_body() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/vacancies")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body><h1>Maintenance</h1></body></html>")
            .create();

        let transport = HttpTransport::new("collector-test").unwrap();
        let request = PageRequest::new(format!("{}/vacancies", server.url())).param("page", 0);

        let err = transport.get_json(&request).unwrap_err();

        mock.assert();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
