//! JSON-lines file sink

use crate::output::traits::{ResultSink, SinkError, SummaryRecord};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Appends one JSON object per record to a file
pub struct JsonlSink {
    file: Mutex<File>,
}

impl JsonlSink {
    /// Opens `path` for appending, creating it if needed
    pub fn open(path: &Path) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ResultSink for JsonlSink {
    fn publish(&self, record: &SummaryRecord) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = self.file.lock().unwrap();
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
