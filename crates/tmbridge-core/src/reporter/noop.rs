//! Reporter used when publishing is disabled

use std::fmt::Display;

use tracing::trace;

use crate::error::Result;
use crate::traits::TestResultReporter;
use crate::types::TestRecord;

/// Reporter that accepts every outcome and publishes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

#[async_trait::async_trait]
impl TestResultReporter for NoopReporter {
    async fn report_success(&self, record: &TestRecord) -> Result<()> {
        trace!(test = %record.id, "reporting disabled, skipping success");
        Ok(())
    }

    async fn report_fail(&self, record: &TestRecord, _cause: &(dyn Display + Sync)) -> Result<()> {
        trace!(test = %record.id, "reporting disabled, skipping failure");
        Ok(())
    }

    async fn report_disabled(&self, record: &TestRecord, _reason: Option<&str>) -> Result<()> {
        trace!(test = %record.id, "reporting disabled, skipping disabled test");
        Ok(())
    }
}
