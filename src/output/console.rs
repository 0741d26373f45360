//! Console sink

use crate::output::traits::{ResultSink, SinkError, SummaryRecord};
use std::io::Write;

/// Prints each record to stdout as a heading/summary block
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for ConsoleSink {
    fn publish(&self, record: &SummaryRecord) -> Result<(), SinkError> {
        // Single write so concurrent workers don't interleave blocks.
        let block = format!(
            "URL: {}\nHeading: {}\nSummary: {}\n\n",
            record.url, record.heading, record.body
        );
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(block.as_bytes())?;
        Ok(())
    }
}
