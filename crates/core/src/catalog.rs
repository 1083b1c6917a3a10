//! Catalog loading
//!
//! The engine is constructed from a record collection supplied by an external
//! loader; this module is that loader for JSON catalogs. A catalog is a JSON
//! array of problem records:
//!
//! ```json
//! [{"id": "1", "title": "Two Sum", "difficulty": "Easy",
//!   "topics": ["Array", "Hash Table"]}]
//! ```
//!
//! Loading happens once, before engine construction; nothing here is on a
//! query path.

use crate::error::Result;
use crate::types::Problem;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a catalog from raw JSON bytes
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Problem>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse a catalog from a reader
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<Problem>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Problem>> {
    let file = File::open(path)?;
    read_catalog(BufReader::new(file))
}
