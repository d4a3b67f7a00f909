//! CSV ingestion: strict line parsing, tolerant bulk loading, and the
//! diagnostic sink the loader reports skipped rows to.

pub mod loader;
pub mod parser;
pub mod sink;

pub use loader::{load, load_with_sink};
pub use parser::parse_line;
pub use sink::{DiagnosticSink, MemorySink, StderrSink, TracingSink};
