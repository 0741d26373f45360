//! Result sinks
//!
//! Relevant pages produce (url, heading, summary) records; sinks consume
//! them in arrival order. There is no delivery guarantee beyond at most one
//! record per relevant URL per cycle.

mod console;
mod jsonl;
mod memory;
mod traits;

pub use console::ConsoleSink;
pub use jsonl::JsonlSink;
pub use memory::MemorySink;
pub use traits::{ResultSink, SinkError, SummaryRecord};
