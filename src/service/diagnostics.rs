use crate::model::ApiError;
use tracing::error;

/// Where the services report remote-call failures before returning the
/// failure envelope. Reporting is best-effort and cannot fail the call.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, operation: &str, err: &ApiError);
}

/// Default sink: failures go to the tracing subscriber.
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, operation: &str, err: &ApiError) {
        error!("{} failed: {}", operation, err);
    }
}
