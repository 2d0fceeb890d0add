//! Probe request description.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::probe::error::ProbeError;

/// HTTP methods the checks issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ProbeError;

    /// Method names are matched exactly (upper case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            other => Err(ProbeError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// A single request to issue against the target.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body; also sets `Content-Type: application/json`.
    pub json: Option<Value>,
    /// Sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub follow_redirects: bool,
}

impl ProbeRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            json: None,
            bearer: None,
            follow_redirects: true,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn options(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Options, url)
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Report 3xx responses as-is instead of following them.
    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_known_methods_exactly() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("OPTIONS".parse::<HttpMethod>().unwrap(), HttpMethod::Options);
        assert_eq!(
            "get".parse::<HttpMethod>().unwrap_err(),
            ProbeError::UnsupportedMethod("get".into())
        );
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let request = ProbeRequest::new(HttpMethod::Post, "http://localhost/api/auth/login")
            .with_json(json!({}))
            .with_bearer("abc")
            .without_redirects();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.json, Some(json!({})));
        assert_eq!(request.bearer.as_deref(), Some("abc"));
        assert!(!request.follow_redirects);
    }
}
