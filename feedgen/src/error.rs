//! Error taxonomy for generation runs

use thiserror::Error;

/// Failures the generator library can surface.
///
/// [`FeedError::EmptyRegistry`] is consumed inside the synthesizer by the
/// cancel fallback; it only escapes when the registry API is driven
/// directly. The duplicate-id and invariant variants indicate generator
/// bugs, not user error, and abort the run.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Cancel requested against a registry with no members
    #[error("active-order registry is empty")]
    EmptyRegistry,

    /// An order id was inserted twice; ids are assigned monotonically,
    /// so a collision means the run state is corrupt
    #[error("duplicate order id {0} inserted into registry")]
    DuplicateOrderId(u64),

    /// Registry bookkeeping disagreed with itself
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// Virtual clock overflowed u64 nanoseconds. From the default epoch
    /// this takes upwards of 10^13 messages, so it indicates a
    /// misconfigured start timestamp rather than a long run.
    #[error("timestamp overflow advancing the virtual clock")]
    ClockOverflow,

    /// Order-id counter exhausted the u64 space
    #[error("order id space exhausted")]
    OrderIdOverflow,

    /// Underlying writer failure
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
