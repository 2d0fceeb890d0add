//! Captured probe response.

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde_json::Value;

/// Everything a check may inspect about a completed request.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
    /// Send-to-last-body-byte wall-clock time.
    pub elapsed: Duration,
}

impl ProbeResponse {
    /// Case-insensitive header presence.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Headers whose name starts with `prefix`, ignoring case.
    pub fn headers_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        let prefix = prefix.to_ascii_lowercase();
        self.headers
            .iter()
            .filter(|(name, _)| name.as_str().starts_with(&prefix))
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect()
    }

    /// Parse the body as JSON. An empty body yields `None`.
    pub fn json(&self) -> Result<Option<Value>, serde_json::Error> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.body).map(Some)
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// First `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response_with(headers: &[(&'static str, &'static str)], body: &str) -> ProbeResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        ProbeResponse {
            status: 200,
            headers: map,
            body: body.to_string(),
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = response_with(&[("x-content-type-options", "nosniff")], "");
        assert!(response.has_header("X-Content-Type-Options"));
        assert_eq!(response.header("X-CONTENT-TYPE-OPTIONS"), Some("nosniff"));
        assert!(!response.has_header("Strict-Transport-Security"));
    }

    #[test]
    fn prefix_match_ignores_case() {
        let response = response_with(
            &[("ratelimit-limit", "100"), ("ratelimit-remaining", "99"), ("x-ratelimit", "1")],
            "",
        );
        let found = response.headers_with_prefix("RateLimit");
        assert_eq!(found.len(), 2);
        assert!(found.contains(&("ratelimit-limit".to_string(), "100".to_string())));
    }

    #[test]
    fn empty_body_is_no_json() {
        assert_eq!(response_with(&[], "  ").json().unwrap(), None);
        assert!(response_with(&[], "<html>").json().is_err());
        assert_eq!(
            response_with(&[], r#"{"status":"ok"}"#).json().unwrap(),
            Some(serde_json::json!({"status": "ok"}))
        );
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo", 2), "hé");
        assert_eq!(excerpt("short", 200), "short");
        assert_eq!(excerpt(&"a".repeat(300), 200).len(), 200);
    }
}
