//! Tracing-backed error sink

use hsa_domain::error::Error;
use hsa_domain::ports::ErrorSink;
use tracing::error;

/// Emits unhandled errors as `error!` events with their full source chain
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl TracingErrorSink {
    /// Render `err` and every source below it, outermost first
    pub fn error_chain(err: &Error) -> Vec<String> {
        let mut chain = vec![err.to_string()];
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        chain
    }
}

impl ErrorSink for TracingErrorSink {
    fn log_error(&self, err: &Error) {
        let chain = Self::error_chain(err);
        error!(error = %err, chain = ?chain, "Unhandled server error");
    }
}
