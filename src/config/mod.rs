//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides (socket path, log level)
//!     → GatewayConfig (validated, immutable)
//!     → handed to the server at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults, so running without a file is the common case
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, LogFormat, ObservabilityConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
