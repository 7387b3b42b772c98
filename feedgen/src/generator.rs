//! The simulation state machine

use crate::config::GeneratorConfig;
use crate::error::FeedError;
use crate::events::{Message, MsgType, Side};
use crate::registry::ActiveOrderRegistry;
use crate::rng::{self, FeedRng};
use common::{Px, Qty, Ts};
use rand::Rng;

/// Synthesizes the order-flow stream.
///
/// All run state lives here: the seeded RNG, the virtual clock, the id
/// counter, and the resting-order registry. Instances are fully
/// independent, so generators with different seeds can run side by side
/// and two generators with the same config produce identical streams.
///
/// Per step the draw order is fixed: clock delta, kind roll, then the
/// branch draws. Reordering any draw changes the reproducible stream.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    rng: FeedRng,
    registry: ActiveOrderRegistry,
    current_ts: Ts,
    next_order_id: u64,
    emitted: u64,
}

impl Generator {
    /// Create a generator positioned at the configured epoch.
    ///
    /// # Panics
    /// Panics if a configured range is inverted or the price band
    /// overflows u64.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        assert!(config.min_qty <= config.max_qty, "qty range is inverted");
        assert!(
            config.min_ts_step_ns <= config.max_ts_step_ns,
            "ts step range is inverted"
        );
        assert!(
            config.base_price.checked_add(config.price_range).is_some(),
            "price band overflows u64"
        );
        let rng = rng::seeded(config.seed);
        let registry = ActiveOrderRegistry::with_capacity(config.max_active_orders.saturating_add(1));
        let current_ts = Ts::from_nanos(config.start_ts_ns);
        Self {
            config,
            rng,
            registry,
            current_ts,
            next_order_id: 1,
            emitted: 0,
        }
    }

    /// Messages generated so far
    #[must_use]
    pub const fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Resting orders currently tracked
    #[must_use]
    pub fn active_orders(&self) -> usize {
        self.registry.len()
    }

    /// Virtual clock position
    #[must_use]
    pub const fn current_ts(&self) -> Ts {
        self.current_ts
    }

    /// Run one simulation step and return the message it produced.
    pub fn next_message(&mut self) -> Result<Message, FeedError> {
        let delta = self
            .rng
            .gen_range(self.config.min_ts_step_ns..=self.config.max_ts_step_ns);
        self.current_ts = self
            .current_ts
            .checked_add_nanos(delta)
            .ok_or(FeedError::ClockOverflow)?;

        let mut msg_type = rng::draw_msg_type(&mut self.rng);
        if msg_type == MsgType::Cancel && self.registry.is_empty() {
            // A cancel needs a victim; substitute the full limit-order
            // step so the message count stays exact.
            msg_type = MsgType::NewLimit;
        }

        let message = match msg_type {
            MsgType::Cancel => {
                let (order_id, order) = self.registry.remove_random(&mut self.rng)?;
                Message::cancel(self.current_ts, order.side, order_id)
            }
            MsgType::NewMarket => {
                let side = self.draw_side();
                let order_id = self.take_order_id()?;
                let qty = self.draw_qty();
                Message::new_market(self.current_ts, side, order_id, qty)
            }
            MsgType::NewLimit => {
                let side = self.draw_side();
                let order_id = self.take_order_id()?;
                let offset = self.rng.gen_range(0..=self.config.price_range);
                let price = Px::from_ticks(self.config.base_price + offset);
                let qty = self.draw_qty();
                self.registry.insert(order_id, side, price)?;
                self.registry
                    .evict_if_over_capacity(self.config.max_active_orders, &mut self.rng)?;
                Message::new_limit(self.current_ts, side, order_id, price, qty)
            }
        };
        self.emitted += 1;
        Ok(message)
    }

    fn draw_side(&mut self) -> Side {
        if self.rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    fn draw_qty(&mut self) -> Qty {
        Qty::from_units(self.rng.gen_range(self.config.min_qty..=self.config.max_qty))
    }

    fn take_order_id(&mut self) -> Result<u64, FeedError> {
        let order_id = self.next_order_id;
        self.next_order_id = self
            .next_order_id
            .checked_add(1)
            .ok_or(FeedError::OrderIdOverflow)?;
        Ok(order_id)
    }
}
