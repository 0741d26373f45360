//! In-memory sink
//!
//! Buffers records instead of writing them anywhere. Used by tests and
//! useful for embedding the crawler in a larger program.

use crate::output::traits::{ResultSink, SinkError, SummaryRecord};
use std::sync::Mutex;

/// Collects records in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SummaryRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record published so far
    pub fn records(&self) -> Vec<SummaryRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl ResultSink for MemorySink {
    fn publish(&self, record: &SummaryRecord) -> Result<(), SinkError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
