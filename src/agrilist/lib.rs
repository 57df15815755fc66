//! # Agrilist Architecture
//!
//! Agrilist is a **UI-agnostic listing library** for an agricultural-services
//! platform: it filters scheme and knowledge-article listings fetched from a
//! remote API. This is not a CLI application that happens to have some library
//! code—it's a library that happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: fetch a collection, hand back a page        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (criteria.rs, filter.rs, facets.rs, page.rs)          │
//! │  - Pure filtering logic over in-memory records              │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordSource trait                              │
//! │  - FileSource (cached payloads), InMemorySource (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Filtering Model
//!
//! A page holds one immutable snapshot of records and one mutable
//! [`criteria::FilterCriteria`]. The visible subset is always a pure function
//! of the two: [`filter::visible_subset`] is recomputed after every criteria
//! mutation, never patched incrementally. There is no implicit reactivity—the
//! recompute-after-mutation contract is explicit and lives in [`page`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, core, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could back a web view, a TUI, or any other UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`page`]: Page controller owning a store snapshot plus criteria
//! - [`filter`]: The filter engine (text, category, and tag axes)
//! - [`facets`]: Derivation of filter options from a record snapshot
//! - [`criteria`]: The mutable query state and its toggle operations
//! - [`model`]: Core data types (`Record`, `Collection`)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod criteria;
pub mod error;
pub mod facets;
pub mod filter;
pub mod model;
pub mod page;
pub mod store;
