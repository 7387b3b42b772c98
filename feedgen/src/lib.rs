//! Synthetic LOB order-flow generator
//!
//! Produces a reproducible CSV stream of limit, market, and cancel
//! messages for stress-testing a downstream matching engine. A single
//! seeded RNG drives every draw, so a fixed (seed, count) pair always
//! yields a byte-identical output file.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]
#![deny(dead_code)]
#![deny(unused)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod registry;
pub mod rng;
pub mod run;
pub mod sink;

pub use config::{DEFAULT_SEED, GeneratorConfig};
pub use error::FeedError;
pub use events::{Message, MsgType, Side};
pub use generator::Generator;
pub use registry::{ActiveOrder, ActiveOrderRegistry};
pub use run::{DEFAULT_MESSAGE_COUNT, derive_output_path, write_dataset};
pub use sink::{CSV_HEADER, CsvSink};
