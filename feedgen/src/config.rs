//! Run configuration

/// Default RNG seed; fixed so repeated invocations reproduce the same file
pub const DEFAULT_SEED: u64 = 42;

/// Simulation parameters for one generation run.
///
/// `Default` carries the stress-test dataset profile: a tight price band
/// above 100,000 ticks, quantities up to 1,000 units, clock steps
/// between 1us and 1ms, and a resting pool capped at 100,000 orders.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for every draw in the run
    pub seed: u64,
    /// Virtual clock start, nanoseconds since UNIX epoch
    pub start_ts_ns: u64,
    /// Smallest clock advance per step, in nanoseconds
    pub min_ts_step_ns: u64,
    /// Largest clock advance per step, in nanoseconds (inclusive)
    pub max_ts_step_ns: u64,
    /// Lowest limit price, in ticks
    pub base_price: u64,
    /// Width of the price band above `base_price`, in ticks (inclusive)
    pub price_range: u64,
    /// Smallest order quantity
    pub min_qty: u64,
    /// Largest order quantity (inclusive)
    pub max_qty: u64,
    /// Resting orders allowed before an eviction batch fires
    pub max_active_orders: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            // 2023-09-01T00:00:00Z
            start_ts_ns: 1_693_526_400_000_000_000,
            min_ts_step_ns: 1_000,
            max_ts_step_ns: 1_000_000,
            base_price: 100_000,
            price_range: 500,
            min_qty: 1,
            max_qty: 1_000,
            max_active_orders: 100_000,
        }
    }
}

impl GeneratorConfig {
    /// Default profile with a different seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
