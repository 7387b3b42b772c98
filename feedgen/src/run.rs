//! End-to-end dataset runs

use crate::config::GeneratorConfig;
use crate::error::FeedError;
use crate::generator::Generator;
use crate::sink::CsvSink;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default number of messages per dataset
pub const DEFAULT_MESSAGE_COUNT: u64 = 1_000_000;

/// Dataset file name derived from the requested message count, e.g.
/// 1,000,000 messages maps to `large_dataset_1000k.csv`.
#[must_use]
pub fn derive_output_path(out_dir: &Path, count: u64) -> PathBuf {
    out_dir.join(format!("large_dataset_{}k.csv", count / 1_000))
}

/// Generate `count` messages into `out`, logging progress every tenth of
/// the run.
///
/// The writer is flushed before being handed back, so callers that only
/// need the side effect can drop the return value.
pub fn write_dataset<W: Write>(
    config: GeneratorConfig,
    count: u64,
    out: W,
) -> Result<W, FeedError> {
    let mut generator = Generator::new(config);
    let mut sink = CsvSink::from_writer(out)?;
    let milestone = (count / 10).max(1);
    for i in 0..count {
        let message = generator.next_message()?;
        sink.write_message(&message)?;
        let written = i + 1;
        if written % milestone == 0 {
            info!("progress: {}% ({written} messages)", written * 100 / count);
        }
    }
    sink.into_inner()
}
