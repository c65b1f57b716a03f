//! Error Sink Port

use crate::error::Error;

/// Destination for errors that are not shown to the client
///
/// Whatever collapses to the generic message at the boundary is handed here
/// first, in full.
pub trait ErrorSink: Send + Sync {
    /// Record an error with its full source chain
    fn log_error(&self, error: &Error);
}
