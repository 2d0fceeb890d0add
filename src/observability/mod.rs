//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe/ and runner/ emit tracing events
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stderr
//! ```

pub mod logging;
