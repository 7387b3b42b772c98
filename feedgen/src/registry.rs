//! Bounded registry of resting limit orders

use crate::error::FeedError;
use crate::events::Side;
use common::Px;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Fraction of the registry dropped per eviction batch (denominator)
const EVICTION_DIVISOR: usize = 10;

/// Resting state recorded for an active order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveOrder {
    /// Order side
    pub side: Side,
    /// Resting limit price in ticks
    pub price: Px,
}

/// Mapping of live order ids to their resting state, with a soft
/// capacity bound.
///
/// A dense id vector sits next to the hash map so victim selection is a
/// single index draw and a swap-remove. Hash iteration order is never
/// consulted; every random choice goes through the caller's RNG, which
/// keeps the draw sequence platform-independent.
#[derive(Debug, Default)]
pub struct ActiveOrderRegistry {
    orders: FxHashMap<u64, ActiveOrder>,
    ids: Vec<u64>,
}

impl ActiveOrderRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry pre-sized for `capacity` resting orders
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Number of resting orders
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether no orders are resting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check whether `order_id` is currently resting
    #[must_use]
    pub fn contains(&self, order_id: u64) -> bool {
        self.orders.contains_key(&order_id)
    }

    /// Track a newly placed limit order.
    ///
    /// Ids are assigned monotonically upstream, so a duplicate means the
    /// run state is corrupt and the error is fatal.
    pub fn insert(&mut self, order_id: u64, side: Side, price: Px) -> Result<(), FeedError> {
        if self.orders.contains_key(&order_id) {
            return Err(FeedError::DuplicateOrderId(order_id));
        }
        self.ids.push(order_id);
        self.orders.insert(order_id, ActiveOrder { side, price });
        Ok(())
    }

    /// Uniformly select and remove one resting order, returning its id
    /// and recorded state for emission as a cancel.
    pub fn remove_random<R: Rng>(&mut self, rng: &mut R) -> Result<(u64, ActiveOrder), FeedError> {
        if self.ids.is_empty() {
            return Err(FeedError::EmptyRegistry);
        }
        let slot = rng.gen_range(0..self.ids.len());
        self.remove_at(slot)
    }

    /// Drop a uniformly-sampled tenth of the registry once it has grown
    /// past `capacity`.
    ///
    /// Purely a memory bound: no cancel messages are emitted for the
    /// dropped ids, so consumers see those orders silently vanish and
    /// they can never be canceled afterwards. Callers invoke this only
    /// right after an insert, and the just-inserted order is part of the
    /// sample space like any other member.
    pub fn evict_if_over_capacity<R: Rng>(
        &mut self,
        capacity: usize,
        rng: &mut R,
    ) -> Result<(), FeedError> {
        if self.ids.len() <= capacity {
            return Ok(());
        }
        let before = self.ids.len();
        let batch = before / EVICTION_DIVISOR;
        // Repeated uniform removal draws a sample without replacement.
        for _ in 0..batch {
            let slot = rng.gen_range(0..self.ids.len());
            self.remove_at(slot)?;
        }
        debug!("registry over capacity: evicted {batch} of {before} resting orders");
        Ok(())
    }

    fn remove_at(&mut self, slot: usize) -> Result<(u64, ActiveOrder), FeedError> {
        let order_id = self.ids.swap_remove(slot);
        let order = self
            .orders
            .remove(&order_id)
            .ok_or(FeedError::InvariantViolation("removed id missing from order map"))?;
        Ok((order_id, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use common::Px;

    fn px(ticks: u64) -> Px {
        Px::from_ticks(ticks)
    }

    #[test]
    fn insert_tracks_membership() {
        let mut registry = ActiveOrderRegistry::new();
        assert!(registry.is_empty());
        registry.insert(1, Side::Buy, px(100_100)).unwrap();
        registry.insert(2, Side::Sell, px(100_200)).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(1));
        assert!(registry.contains(2));
        assert!(!registry.contains(3));
    }

    #[test]
    fn duplicate_insert_is_fatal() {
        let mut registry = ActiveOrderRegistry::new();
        registry.insert(5, Side::Buy, px(100_000)).unwrap();
        let err = registry.insert(5, Side::Sell, px(100_001)).unwrap_err();
        assert!(matches!(err, FeedError::DuplicateOrderId(5)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_random_on_empty_fails() {
        let mut registry = ActiveOrderRegistry::new();
        let mut rng = seeded(1);
        let err = registry.remove_random(&mut rng).unwrap_err();
        assert!(matches!(err, FeedError::EmptyRegistry));
    }

    #[test]
    fn remove_random_returns_recorded_state() {
        let mut registry = ActiveOrderRegistry::new();
        registry.insert(9, Side::Sell, px(100_337)).unwrap();
        let mut rng = seeded(1);
        let (order_id, order) = registry.remove_random(&mut rng).unwrap();
        assert_eq!(order_id, 9);
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.price, px(100_337));
        assert!(registry.is_empty());
    }

    #[test]
    fn draining_removes_every_member_once() {
        let mut registry = ActiveOrderRegistry::new();
        for id in 1..=50 {
            registry.insert(id, Side::Buy, px(100_000 + id)).unwrap();
        }
        let mut rng = seeded(3);
        let mut removed = Vec::new();
        while !registry.is_empty() {
            let (order_id, _) = registry.remove_random(&mut rng).unwrap();
            removed.push(order_id);
        }
        removed.sort_unstable();
        let expected: Vec<u64> = (1..=50).collect();
        assert_eq!(removed, expected);
    }

    #[test]
    fn bookkeeping_survives_interleaved_removals() {
        let mut registry = ActiveOrderRegistry::new();
        for id in 1..=100 {
            registry.insert(id, Side::Buy, px(100_000 + id)).unwrap();
        }
        let mut rng = seeded(11);
        let mut gone = std::collections::HashSet::new();
        for _ in 0..60 {
            let (order_id, _) = registry.remove_random(&mut rng).unwrap();
            assert!(gone.insert(order_id), "id {order_id} removed twice");
        }
        assert_eq!(registry.len(), 40);
        for id in 1..=100 {
            assert_eq!(registry.contains(id), !gone.contains(&id));
        }
    }

    #[test]
    fn eviction_noop_at_or_below_capacity() {
        let mut registry = ActiveOrderRegistry::new();
        for id in 1..=100 {
            registry.insert(id, Side::Buy, px(100_000)).unwrap();
        }
        let mut rng = seeded(5);
        registry.evict_if_over_capacity(100, &mut rng).unwrap();
        assert_eq!(registry.len(), 100);
    }

    #[test]
    fn eviction_drops_a_tenth_once_over_capacity() {
        let mut registry = ActiveOrderRegistry::new();
        for id in 1..=101 {
            registry.insert(id, Side::Buy, px(100_000)).unwrap();
        }
        let mut rng = seeded(5);
        registry.evict_if_over_capacity(100, &mut rng).unwrap();
        // floor(101 / 10) = 10 members dropped in one batch
        assert_eq!(registry.len(), 91);
    }

    #[test]
    fn eviction_sample_has_no_duplicates() {
        let mut registry = ActiveOrderRegistry::new();
        for id in 1..=20 {
            registry.insert(id, Side::Sell, px(100_000)).unwrap();
        }
        let mut rng = seeded(13);
        registry.evict_if_over_capacity(10, &mut rng).unwrap();
        assert_eq!(registry.len(), 18);
        let survivors = (1..=20).filter(|id| registry.contains(*id)).count();
        assert_eq!(survivors, 18);
    }
}
