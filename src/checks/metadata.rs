//! API metadata in the health payload.

use async_trait::async_trait;
use serde_json::Value;

use crate::checks::{Check, CheckContext, Outcome};
use crate::probe::ProbeRequest;

/// Keys of which at least one must appear in the health document.
pub const METADATA_KEYS: [&str; 4] = ["version", "timestamp", "uptime", "status"];

#[derive(Debug, Clone)]
pub struct MetadataCheck {
    path: String,
}

impl MetadataCheck {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

pub fn has_metadata(document: &Value) -> bool {
    document
        .as_object()
        .is_some_and(|fields| METADATA_KEYS.iter().any(|key| fields.contains_key(*key)))
}

#[async_trait]
impl Check for MetadataCheck {
    fn description(&self) -> &str {
        "API Metadata Available"
    }

    async fn run(&self, ctx: &CheckContext) -> Outcome {
        let response = match ctx.probe.send(&ProbeRequest::get(ctx.api_url(&self.path))).await {
            Ok(response) => response,
            Err(e) => return Outcome::fail(format!("API metadata check failed: {}", e)),
        };

        let document: Value = match serde_json::from_str(&response.body) {
            Ok(document) => document,
            Err(e) => return Outcome::fail(format!("API metadata check failed: {}", e)),
        };

        if has_metadata(&document) {
            ctx.reporter.detail(document.to_string());
            Outcome::pass("API metadata available")
        } else {
            Outcome::fail("API metadata missing or incomplete")
        }
    }
}
