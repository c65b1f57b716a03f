//! Clock Port

/// Source of the current time in unix seconds
///
/// Token issuance and expiry checks read time through this port so tests
/// can pin it.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Seconds since the unix epoch
    fn now_secs(&self) -> u64;
}
