//! Black-box API smoke testing.
//!
//! Issues a fixed sequence of HTTP checks against a deployed API, prints a
//! pass/fail log and summary, and turns the aggregate result into a process
//! exit status.
//!
//! # Architecture Overview
//!
//! ```text
//!   config ──▶ CheckContext ──▶ Runner ──▶ Check::run ──▶ probe (reqwest)
//!                  │              │                          │
//!                  │              ▼                          ▼
//!                  │          RunTally ◀──── Outcome ◀── ProbeResponse
//!                  ▼              │
//!              Reporter ◀─────────┘ (announce / verdict / summary)
//! ```

pub mod checks;
pub mod config;
pub mod observability;
pub mod probe;
pub mod runner;

pub use checks::{Check, CheckContext, Outcome};
pub use config::SmokeConfig;
pub use runner::{Reporter, RunTally, Runner};
