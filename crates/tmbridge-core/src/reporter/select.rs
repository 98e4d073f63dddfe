//! Reporter selection

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use super::noop::NoopReporter;
use crate::error::Result;
use crate::traits::TestResultReporter;

/// Pick the reporter for a configuration.
///
/// When `enabled` is false a [`NoopReporter`] is returned and `live` is never
/// called, so a disabled reporter makes no network calls and skips remote
/// validation.
pub async fn select_reporter<F, Fut, R>(enabled: bool, live: F) -> Result<Arc<dyn TestResultReporter>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<R>>,
    R: TestResultReporter + 'static,
{
    if !enabled {
        debug!("reporting disabled, using no-op reporter");
        return Ok(Arc::new(NoopReporter));
    }

    let reporter = live().await?;
    debug!("reporting enabled, using live reporter");
    Ok(Arc::new(reporter))
}
