//! Tolerant bulk CSV loader.
//!
//! Reads a contact stream line by line, skipping the header and blank lines,
//! and accumulates every row the strict parser accepts. Rejected rows are
//! reported to a diagnostic sink and dropped; only stream I/O failures abort
//! the load.

use crate::error::LoadResult;
use crate::ingest::parser::parse_line;
use crate::ingest::sink::{DiagnosticSink, StderrSink};
use crate::models::Contact;
use std::io::{BufRead, BufReader, Read};
use tracing::debug;

/// Load contacts from a CSV stream, reporting skipped rows to stderr.
///
/// Equivalent to [`load_with_sink`] with a [`StderrSink`].
///
/// # Errors
///
/// Returns [`crate::error::LoadError::Io`] if reading the stream fails;
/// partial results are discarded.
pub fn load<R: Read>(reader: R) -> LoadResult<Vec<Contact>> {
    load_with_sink(reader, &mut StderrSink)
}

/// Load contacts from a CSV stream, reporting skipped rows to `sink`.
///
/// The first physical line is discarded unconditionally as the header row;
/// its contents are not inspected. Blank lines (after trimming) are skipped
/// silently. Every other line goes through the strict parser: accepted rows
/// are accumulated in input order, rejected rows produce one
/// `"Skipping invalid row: ..."` diagnostic on the sink and are dropped.
///
/// The reader is owned by this function and released on every exit path.
///
/// # Errors
///
/// Returns [`crate::error::LoadError::Io`] if reading the stream fails;
/// partial results are discarded.
///
/// # Example
///
/// ```
/// use contact_book::ingest::{load_with_sink, MemorySink};
///
/// let csv = "name,email,phone,city\nAda,ada@x.io,555-1,Paris\nBad,noatsign,555-2,Lyon\n";
/// let mut sink = MemorySink::new();
/// let contacts = load_with_sink(csv.as_bytes(), &mut sink).unwrap();
/// assert_eq!(contacts.len(), 1);
/// assert_eq!(sink.messages().len(), 1);
/// ```
pub fn load_with_sink<R: Read>(
    reader: R,
    sink: &mut dyn DiagnosticSink,
) -> LoadResult<Vec<Contact>> {
    let reader = BufReader::new(reader);
    let mut contacts = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            // Header row, discarded without inspecting its column names
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(contact) => contacts.push(contact),
            Err(err) => {
                sink.report(&format!("Skipping invalid row: {}", err));
                skipped += 1;
            }
        }
    }

    debug!(loaded = contacts.len(), skipped, "contact load finished");
    Ok(contacts)
}
