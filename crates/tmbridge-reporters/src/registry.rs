//! Reporter registry

use std::fmt::Display;
use std::sync::Arc;

use tmbridge_core::error::Result;
use tmbridge_core::{Config, TestRecord, TestResultReporter};
use tracing::debug;

use crate::{tm4j, zephyr};

/// Registry of reporters fed with every test outcome
///
/// Reporters are called in registration order; the first error stops the
/// fan-out and is returned to the caller.
pub struct ReporterRegistry {
    reporters: Vec<(String, Arc<dyn TestResultReporter>)>,
}

impl ReporterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            reporters: Vec::new(),
        }
    }

    /// Build the TM4J and Zephyr reporters from configuration.
    ///
    /// Disabled sections contribute nothing.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();
        if config.tm4j.enabled {
            registry.register_arc("tm4j", tm4j::create_reporter(&config.tm4j).await?);
        }
        if config.zephyr.enabled {
            registry.register_arc("zephyr", zephyr::create_reporter(&config.zephyr).await?);
        }
        debug!(reporters = ?registry.names(), "reporter registry built");
        Ok(registry)
    }

    /// Register a reporter
    pub fn register<R: TestResultReporter + 'static>(&mut self, name: &str, reporter: R) {
        self.reporters.push((name.to_string(), Arc::new(reporter)));
    }

    /// Register a pre-built reporter
    pub fn register_arc(&mut self, name: &str, reporter: Arc<dyn TestResultReporter>) {
        self.reporters.push((name.to_string(), reporter));
    }

    /// Get reporter by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn TestResultReporter>> {
        self.reporters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r.clone())
    }

    /// Get names of all registered reporters
    pub fn names(&self) -> Vec<String> {
        self.reporters.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Number of registered reporters
    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    /// Whether no reporter is registered
    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl Default for ReporterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TestResultReporter for ReporterRegistry {
    async fn report_success(&self, record: &TestRecord) -> Result<()> {
        for (_, reporter) in &self.reporters {
            reporter.report_success(record).await?;
        }
        Ok(())
    }

    async fn report_fail(&self, record: &TestRecord, cause: &(dyn Display + Sync)) -> Result<()> {
        for (_, reporter) in &self.reporters {
            reporter.report_fail(record, cause).await?;
        }
        Ok(())
    }

    async fn report_disabled(&self, record: &TestRecord, reason: Option<&str>) -> Result<()> {
        for (_, reporter) in &self.reporters {
            reporter.report_disabled(record, reason).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use tmbridge_core::{NoopReporter, ReportError};

    #[derive(Default)]
    struct RecordingReporter {
        seen: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingReporter {
        fn push(&self, what: String) -> Result<()> {
            self.seen.lock().unwrap().push(what);
            if self.fail {
                return Err(ReportError::Api {
                    system: "Recording".to_string(),
                    status: 503,
                    message: "down".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl TestResultReporter for RecordingReporter {
        async fn report_success(&self, record: &TestRecord) -> Result<()> {
            self.push(format!("pass {}", record.id))
        }

        async fn report_fail(&self, record: &TestRecord, cause: &(dyn Display + Sync)) -> Result<()> {
            self.push(format!("fail {} {}", record.id, cause))
        }

        async fn report_disabled(&self, record: &TestRecord, reason: Option<&str>) -> Result<()> {
            self.push(format!("skip {} {}", record.id, reason.unwrap_or("-")))
        }
    }

    fn record() -> TestRecord {
        let now = Utc::now();
        TestRecord::new("t", now, now)
    }

    #[test]
    fn test_empty_registry() {
        let registry = ReporterRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
        assert!(registry.get("tm4j").is_none());
    }

    #[tokio::test]
    async fn test_from_default_config_is_empty() {
        let registry = ReporterRegistry::from_config(&Config::default()).await.unwrap();
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_fans_out_in_order() {
        let first = Arc::new(RecordingReporter::default());
        let second = Arc::new(RecordingReporter::default());
        let mut registry = ReporterRegistry::new();
        registry.register_arc("first", first.clone());
        registry.register("noop", NoopReporter);
        registry.register_arc("second", second.clone());

        registry.report_success(&record()).await.unwrap();
        registry.report_fail(&record(), &"boom").await.unwrap();
        registry.report_disabled(&record(), Some("flaky")).await.unwrap();

        assert_eq!(registry.names(), vec!["first", "noop", "second"]);
        let expected = vec!["pass t", "fail t boom", "skip t flaky"];
        assert_eq!(*first.seen.lock().unwrap(), expected);
        assert_eq!(*second.seen.lock().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_first_error_stops_fan_out() {
        let failing = Arc::new(RecordingReporter {
            fail: true,
            ..Default::default()
        });
        let after = Arc::new(RecordingReporter::default());
        let mut registry = ReporterRegistry::new();
        registry.register_arc("failing", failing.clone());
        registry.register_arc("after", after.clone());

        let err = registry.report_success(&record()).await.unwrap_err();
        assert!(matches!(err, ReportError::Api { status: 503, .. }));
        assert!(after.seen.lock().unwrap().is_empty());
    }
}
