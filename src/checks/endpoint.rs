//! Endpoint existence and reachability.
//!
//! These checks assert that a route answers meaningfully, not that the
//! caller is authorized. Which statuses count is decided by a [`StatusPolicy`].

use async_trait::async_trait;
use serde_json::Value;

use crate::checks::{Check, CheckContext, Outcome};
use crate::probe::{HttpMethod, ProbeRequest};

/// Where an endpoint check sends its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Path under `target.base_url`.
    Api(String),
    /// `target.socket_url` (or its derived default).
    Socket,
    /// `target.storage_url`.
    Storage,
}

impl Target {
    fn resolve(&self, ctx: &CheckContext) -> String {
        match self {
            Target::Api(path) => ctx.api_url(path),
            Target::Socket => ctx.config.target.socket_url(),
            Target::Storage => ctx.config.target.storage_url.clone(),
        }
    }
}

/// Maps an observed status to a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Pass only on the listed statuses.
    OneOf {
        accepted: &'static [u16],
        pass_note: &'static str,
    },
    /// Pass on `accepted`, fail on `rejected`, anything else is an
    /// informational pass.
    Guarded {
        accepted: &'static [u16],
        pass_note: &'static str,
        rejected: &'static [u16],
        fail_note: &'static str,
    },
    /// Any response at all proves reachability.
    AnyResponse { pass_note: &'static str },
}

impl StatusPolicy {
    pub fn judge(&self, subject: &str, status: u16) -> Outcome {
        match self {
            StatusPolicy::OneOf {
                accepted,
                pass_note,
            } => {
                if accepted.contains(&status) {
                    Outcome::pass(format!("{} {}", subject, pass_note))
                } else {
                    Outcome::fail(format!(
                        "{} returned unexpected status: {}",
                        subject, status
                    ))
                }
            }
            StatusPolicy::Guarded {
                accepted,
                pass_note,
                rejected,
                fail_note,
            } => {
                if accepted.contains(&status) {
                    Outcome::pass(format!("{} {}", subject, pass_note))
                } else if rejected.contains(&status) {
                    Outcome::fail(format!("{} {} (status: {})", subject, fail_note, status))
                } else {
                    Outcome::pass(format!("{} responding (status: {})", subject, status))
                }
            }
            StatusPolicy::AnyResponse { pass_note } => {
                Outcome::pass(format!("{} {}", subject, pass_note))
            }
        }
    }
}

/// One request, judged by status alone.
#[derive(Debug, Clone)]
pub struct EndpointCheck {
    description: String,
    subject: String,
    method: HttpMethod,
    target: Target,
    body: Option<Value>,
    follow_redirects: bool,
    policy: StatusPolicy,
}

impl EndpointCheck {
    pub fn new(
        description: impl Into<String>,
        subject: impl Into<String>,
        method: HttpMethod,
        target: Target,
        policy: StatusPolicy,
    ) -> Self {
        Self {
            description: description.into(),
            subject: subject.into(),
            method,
            target,
            body: None,
            follow_redirects: true,
            policy,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }
}

#[async_trait]
impl Check for EndpointCheck {
    fn description(&self) -> &str {
        &self.description
    }

    async fn run(&self, ctx: &CheckContext) -> Outcome {
        let mut request = ProbeRequest::new(self.method, self.target.resolve(ctx));
        if let Some(body) = &self.body {
            request = request.with_json(body.clone());
        }
        if !self.follow_redirects {
            request = request.without_redirects();
        }

        match ctx.probe.send(&request).await {
            Ok(response) => {
                ctx.reporter.detail(format!("Status: {}", response.status));
                self.policy.judge(&self.subject, response.status)
            }
            Err(e) => Outcome::fail(format!("{} check failed: {}", self.subject, e)),
        }
    }
}
