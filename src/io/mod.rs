//! Document sources and report sinks
//!
//! The engine only needs markup text in and a place to hand the report to.
//! Reading and writing are the only points where a run suspends.

mod sink;
mod source;

pub use sink::{ConsoleSink, FileSink, MemorySink, ReportRenderer, ReportSink, StreamSink};
pub use source::{DocumentSource, FileSource, StreamSource, StringSource};
