//! HTTP probing subsystem.
//!
//! # Data Flow
//! ```text
//! Check builds a ProbeRequest (request.rs)
//!     → client.rs sends it over reqwest with the run timeout
//!     → success: ProbeResponse (response.rs) with status, headers, body, elapsed
//!     → failure: ProbeError (error.rs) classified as timeout / connect / other
//! ```
//!
//! # Design Decisions
//! - Every request carries the same deadline; there are no retries
//! - Idle connections are never kept, so each request dials fresh
//! - Redirects are followed unless the request opts out
//! - Transport failures are values, never panics

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::Probe;
pub use error::ProbeError;
pub use request::{HttpMethod, ProbeRequest};
pub use response::{excerpt, ProbeResponse};
