//! Streaming CSV output

use crate::error::FeedError;
use crate::events::Message;
use std::io::Write;

/// Header comment naming the CSV columns
pub const CSV_HEADER: &str = "# ts_ns,MsgType,Side,OrderId,Price,Qty";

/// Buffered line-oriented sink for generated messages.
///
/// The header is written on construction and each message becomes one
/// plain-decimal CSV line, so memory stays flat however long the stream
/// runs. [`CsvSink::into_inner`] flushes and surfaces write errors;
/// dropping the sink early releases the writer with its own best-effort
/// flush.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    out: W,
    lines: u64,
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer and emit the header line.
    pub fn from_writer(mut out: W) -> Result<Self, FeedError> {
        writeln!(out, "{CSV_HEADER}")?;
        Ok(Self { out, lines: 0 })
    }

    /// Append one message as a CSV line.
    pub fn write_message(&mut self, msg: &Message) -> Result<(), FeedError> {
        writeln!(
            self.out,
            "{},{},{},{},{},{}",
            msg.ts, msg.msg_type, msg.side, msg.order_id, msg.price, msg.qty
        )?;
        self.lines += 1;
        Ok(())
    }

    /// Data lines written so far, header excluded
    #[must_use]
    pub const fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Flush buffered output and hand back the writer.
    pub fn into_inner(mut self) -> Result<W, FeedError> {
        self.out.flush()?;
        Ok(self.out)
    }
}
