//! Message model for the synthetic order-flow stream

use common::{Px, Qty, Ts};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    /// Buy side
    Buy = 0,
    /// Sell side
    Sell = 1,
}

impl Side {
    /// Check if this is the buy side
    #[inline]
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Get the opposite side
    #[inline]
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        };
        f.write_str(token)
    }
}

/// Wire kind of a generated message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MsgType {
    /// New resting limit order
    NewLimit = 0,
    /// New market order; consumes liquidity and never rests
    NewMarket = 1,
    /// Cancel of a resting limit order
    Cancel = 2,
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::NewLimit => "NewLimit",
            Self::NewMarket => "NewMarket",
            Self::Cancel => "Cancel",
        };
        f.write_str(token)
    }
}

/// One generated order-flow message.
///
/// Fields a kind does not carry are zero on the wire: cancels have zero
/// price and quantity, market orders have zero price. The constructors
/// enforce this, so a `Message` built through them is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Event time, nanoseconds since UNIX epoch
    pub ts: Ts,
    /// Wire kind
    pub msg_type: MsgType,
    /// Order side
    pub side: Side,
    /// Unique order identifier
    pub order_id: u64,
    /// Limit price in ticks
    pub price: Px,
    /// Order quantity in units
    pub qty: Qty,
}

impl Message {
    /// Build a new-limit message carrying the full field set
    #[must_use]
    pub const fn new_limit(ts: Ts, side: Side, order_id: u64, price: Px, qty: Qty) -> Self {
        Self {
            ts,
            msg_type: MsgType::NewLimit,
            side,
            order_id,
            price,
            qty,
        }
    }

    /// Build a new-market message; the price field is forced to zero
    #[must_use]
    pub const fn new_market(ts: Ts, side: Side, order_id: u64, qty: Qty) -> Self {
        Self {
            ts,
            msg_type: MsgType::NewMarket,
            side,
            order_id,
            price: Px::ZERO,
            qty,
        }
    }

    /// Build a cancel message; price and quantity are forced to zero
    #[must_use]
    pub const fn cancel(ts: Ts, side: Side, order_id: u64) -> Self {
        Self {
            ts,
            msg_type: MsgType::Cancel,
            side,
            order_id,
            price: Px::ZERO,
            qty: Qty::ZERO,
        }
    }
}
