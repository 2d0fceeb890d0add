//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → command-line overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → SmokeConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - Running with no file and no flags targets the production API
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, OutputConfig, SmokeConfig, TargetConfig, ThresholdConfig};
pub use validation::{validate_config, ValidationError};
