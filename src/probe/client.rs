//! reqwest-backed probe client.

use std::time::{Duration, Instant};

use reqwest::{redirect, Client};

use crate::config::TargetConfig;
use crate::probe::error::ProbeError;
use crate::probe::request::ProbeRequest;
use crate::probe::response::ProbeResponse;

/// Issues probe requests with a fixed per-request deadline.
pub struct Probe {
    /// Follows redirects (reqwest default policy).
    following: Client,
    /// Reports redirects as-is.
    manual: Client,
    timeout_secs: u64,
}

impl Probe {
    /// Build a probe from the target settings.
    pub fn new(target: &TargetConfig) -> Result<Self, ProbeError> {
        let following = Self::builder(target)
            .build()
            .map_err(|e| ProbeError::Other(e.to_string()))?;
        let manual = Self::builder(target)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| ProbeError::Other(e.to_string()))?;

        Ok(Self {
            following,
            manual,
            timeout_secs: target.timeout_secs,
        })
    }

    fn builder(target: &TargetConfig) -> reqwest::ClientBuilder {
        let builder = Client::builder()
            .user_agent(concat!("api-smoke/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(target.timeout_secs))
            .pool_max_idle_per_host(0);

        if target.system_proxy {
            builder
        } else {
            builder.no_proxy()
        }
    }

    /// Send one request and read its body.
    pub async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let client = if request.follow_redirects {
            &self.following
        } else {
            &self.manual
        };

        let mut builder = client.request(request.method.to_reqwest(), &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let result = async {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, headers, body))
        }
        .await;
        let elapsed = started.elapsed();

        match result {
            Ok((status, headers, body)) => {
                tracing::debug!(
                    method = %request.method,
                    url = %request.url,
                    status,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Probe completed"
                );
                Ok(ProbeResponse {
                    status,
                    headers,
                    body,
                    elapsed,
                })
            }
            Err(e) => {
                let error = ProbeError::classify(e, self.timeout_secs);
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    error = %error,
                    "Probe failed"
                );
                Err(error)
            }
        }
    }
}
