//! The standard API smoke suite.

use serde_json::json;

use crate::checks::{
    Check, CorsCheck, EndpointCheck, LatencyCheck, MetadataCheck, RateLimitHeadersCheck,
    SecurityHeadersCheck, StatusCheck, StatusPolicy, Target,
};
use crate::probe::HttpMethod;

pub const HEALTH_PATH: &str = "/health";

/// Statuses proving an OAuth start endpoint is routed.
pub const OAUTH_EXISTS: &[u16] = &[200, 302, 401, 403];

/// Statuses a bare Socket.IO GET may answer with.
pub const SOCKET_RESPONDING: &[u16] = &[200, 400, 404];

/// Statuses of a routed endpoint rejecting an empty payload.
pub const VALIDATES_INPUT: &[u16] = &[400, 401, 422];

pub fn health_check() -> StatusCheck {
    StatusCheck::new("GET", HEALTH_PATH, 200, "Backend Health Check")
}

pub fn realtime_endpoint() -> EndpointCheck {
    EndpointCheck::new(
        "WebSocket/Socket.IO Endpoint Accessible",
        "Socket.IO endpoint",
        HttpMethod::Get,
        Target::Socket,
        StatusPolicy::OneOf {
            accepted: SOCKET_RESPONDING,
            pass_note: "responding",
        },
    )
}

/// OAuth start endpoint for a music provider. Redirects are not followed.
pub fn oauth_endpoint(provider: &str, path: &str) -> EndpointCheck {
    EndpointCheck::new(
        format!("{} OAuth Endpoint", provider),
        format!("{} OAuth endpoint", provider),
        HttpMethod::Get,
        Target::Api(path.to_string()),
        StatusPolicy::OneOf {
            accepted: OAUTH_EXISTS,
            pass_note: "exists",
        },
    )
    .without_redirects()
}

pub fn object_storage() -> EndpointCheck {
    EndpointCheck::new(
        "Cloudflare R2 Storage Accessible",
        "R2 storage endpoint",
        HttpMethod::Head,
        Target::Storage,
        StatusPolicy::AnyResponse {
            pass_note: "accessible",
        },
    )
}

pub fn login_endpoint() -> EndpointCheck {
    EndpointCheck::new(
        "Login Endpoint Exists",
        "Login endpoint",
        HttpMethod::Post,
        Target::Api("/auth/login".to_string()),
        StatusPolicy::Guarded {
            accepted: VALIDATES_INPUT,
            pass_note: "exists and validates requests",
            rejected: &[404],
            fail_note: "not found",
        },
    )
    .with_body(json!({}))
}

pub fn protected_groups() -> EndpointCheck {
    EndpointCheck::new(
        "Groups Endpoint Requires Authentication",
        "Groups endpoint",
        HttpMethod::Get,
        Target::Api("/groups".to_string()),
        StatusPolicy::Guarded {
            accepted: &[401],
            pass_note: "properly requires authentication",
            rejected: &[200],
            fail_note: "is open without authentication",
        },
    )
}

pub fn location_update() -> EndpointCheck {
    EndpointCheck::new(
        "Location Update Endpoint Exists",
        "Location update endpoint",
        HttpMethod::Post,
        Target::Api("/location/update".to_string()),
        StatusPolicy::Guarded {
            accepted: VALIDATES_INPUT,
            pass_note: "exists",
            rejected: &[404],
            fail_note: "not found",
        },
    )
    .with_body(json!({}))
}

/// All thirteen checks in run order.
pub fn standard_suite() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(health_check()),
        Box::new(CorsCheck::new(HEALTH_PATH)),
        Box::new(LatencyCheck::new(HEALTH_PATH)),
        Box::new(SecurityHeadersCheck::new(HEALTH_PATH)),
        Box::new(RateLimitHeadersCheck::new(HEALTH_PATH)),
        Box::new(MetadataCheck::new(HEALTH_PATH)),
        Box::new(realtime_endpoint()),
        Box::new(oauth_endpoint("Spotify", "/music/spotify/auth")),
        Box::new(oauth_endpoint("YouTube", "/music/youtube/auth")),
        Box::new(object_storage()),
        Box::new(login_endpoint()),
        Box::new(protected_groups()),
        Box::new(location_update()),
    ]
}
