//! Test management reporting adapters for tmbridge
//!
//! This crate publishes test outcomes to test management systems over their
//! REST APIs.
//!
//! ## Supported Systems
//!
//! - **TM4J**: Test Management for Jira, Server / Data Center
//!   (`/rest/atm/1.0`, Basic auth)
//! - **Zephyr Scale**: Zephyr Scale Cloud (`/v2`, bearer token), with
//!   tag-driven test cycle selection
//!
//! ## Usage
//!
//! ```ignore
//! use tmbridge_core::{load_config_or_default, TestResultReporter};
//! use tmbridge_reporters::ReporterRegistry;
//!
//! let (config, _) = load_config_or_default(&std::env::current_dir()?)?;
//! let reporters = ReporterRegistry::from_config(&config).await?;
//! reporters.report_success(&record).await?;
//! ```

pub mod auth;
pub mod http;
pub mod jira;
pub mod registry;
pub mod tm4j;
pub mod zephyr;

pub use auth::AuthHeader;
pub use registry::ReporterRegistry;
pub use tm4j::Tm4jService;
pub use zephyr::ZephyrService;
