//! # Storage Layer
//!
//! This module defines the storage abstraction for agrilist. The
//! [`RecordSource`] trait lets the core work against different backends.
//!
//! ## Design Rationale
//!
//! The asynchronous server fetch itself lives outside this crate; what the
//! crate consumes is the fetch's product—a JSON payload of record-shaped
//! objects per collection. Sources are abstracted behind a trait to:
//! - Enable **testing** with `InMemorySource` (no filesystem needed)
//! - Allow **future backends** (live HTTP client, database) without changing
//!   core logic
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads the cached payload files
//!   - One file per collection: `schemes.json`, `articles.json`
//!   - A missing file is a load error ("could not load"); malformed entries
//!     inside a well-formed payload are skipped, not fatal
//!
//! - [`memory::InMemorySource`]: in-memory records for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::error::Result;
use crate::model::{Collection, Record};

pub mod fs;
pub mod memory;

/// Abstract interface for fetching a collection's record snapshot.
pub trait RecordSource {
    /// Fetch the full record snapshot for a collection.
    fn fetch_records(&self, collection: Collection) -> Result<Vec<Record>>;
}
