//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (env overrides: TELEGRAM_BOT_TOKEN, OPENAI_API_KEY, OPENAI_BASE_URL)
//!     → validation.rs (semantic checks)
//!     → GuardConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so a file is optional; only credentials are
//!   mandatory, and those usually come from the environment
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::GuardConfig;
