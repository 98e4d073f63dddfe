//! tmbridge Core - reporting test executions to test management systems
//!
//! This crate provides the configuration, error handling, execution payloads,
//! comment formatting and reporter orchestration shared by the TM4J and
//! Zephyr Scale adapters in `tmbridge-reporters`.
//!
//! ## Usage
//!
//! ```ignore
//! use tmbridge_core::{TestRecord, TestResultReporter};
//!
//! let record = TestRecord::new("suite::login", started, finished)
//!     .with_test_case_ids(["ABC-T1"])
//!     .with_tags(["smoke"]);
//! reporter.report_success(&record).await?;
//! ```

pub mod comment;
pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;
pub mod traits;
pub mod types;

pub use comment::{html_escape, CommentFormatter};
pub use config::{load_config, load_config_from_dir, load_config_or_default, Config};
pub use error::{ConfigError, ReportError, Result};
pub use reporter::{
    select_reporter, ExecutionReporter, NoopReporter, ReporterSettings, TestCycleResolver,
};
pub use traits::{TestManagementService, TestResultReporter};
pub use types::{ExecutionResult, ExecutionStatus, TestRecord};
