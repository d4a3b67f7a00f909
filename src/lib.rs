//! Contact Book - An in-memory address book over a simplified CSV format.
//!
//! This library ingests a CSV stream of contact records, validates them, and
//! offers read-only query operations over the loaded sequence. Parsing is
//! strict per row and tolerant in bulk: a malformed row never halts a load,
//! it is reported to a diagnostic sink and dropped.
//!
//! # Architecture
//!
//! - **models**: The immutable [`Contact`] entity
//! - **error**: Custom error types for precise error handling
//! - **ingest**: Strict line parser, tolerant stream loader, diagnostic sinks
//! - **query**: Pure read-only operations (search, filter, sort, aggregate)
//! - **config**: Configuration for the demo binary
//!
//! # Example
//!
//! ```
//! use contact_book::ingest::load;
//! use contact_book::query::{group_count_by_city, search_by_name};
//!
//! let csv = "name,email,phone,city\n\
//!            Ada,ada@x.io,555-1,Paris\n\
//!            Bo,bo@x.io,555-2,Lyon\n";
//! let contacts = load(csv.as_bytes()).unwrap();
//!
//! assert_eq!(search_by_name(&contacts, "ad").len(), 1);
//! assert_eq!(group_count_by_city(&contacts)["Lyon"], 1);
//! ```

// Re-export commonly used types
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod query;

pub use config::Config;
pub use error::{ConfigError, LoadError, ParseError};
pub use ingest::{
    load, load_with_sink, parse_line, DiagnosticSink, MemorySink, StderrSink, TracingSink,
};
pub use models::Contact;
pub use query::{
    filter_by_city, filter_by_phone_prefix, group_count_by_city, search_by_name, sorted_by_name,
    unique_cities,
};
