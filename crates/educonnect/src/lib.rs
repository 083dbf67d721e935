//! # EduConnect Architecture
//!
//! EduConnect is a **UI-agnostic academic community library**. The CLI is
//! just one client of it, not the product itself: everything from the API
//! facade inward would serve a web or mobile front end unchanged.
//!
//! That framing drives the entire architecture and should guide all
//! development.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (the educonnect-cli crate)                       │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session state        │
//! │  - Normalizes inputs (query strings → QueryState, ids)      │
//! │  - Persists preferences, emits analytics events             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: listings, validation, receipts     │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Engine (query/) over the Dataset (dataset.rs)        │
//! │  - Filter → search → sort → paginate, in that order         │
//! │  - Data is bundled, parsed once, and read-only              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Query-String Contract
//!
//! Every listing is driven by a URL-style query string (`search=calculo&`
//! `universidad=UTP&pagina=2`). [`query::QueryState`] parses and re-renders
//! these strings canonically, so a listing's exact state can be copied,
//! shared, and replayed. See `query/state.rs` for the grammar.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, query engine), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Listing>`, receipt structs)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The one exception is the preferences file, and even that is confined to
//! `prefs.rs` behind an explicit directory argument.
//!
//! This means the same core could serve a REST API, a browser app, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! The architecture enables focused testing at each layer:
//!
//! 1. **Query engine** (`query/*.rs`): Table-style unit tests over small
//!    record sets, covering every predicate, sort, and pagination edge.
//!
//! 2. **Commands** (`commands/*.rs`): Thorough unit tests of business logic.
//!    This is where the lion's share of testing lives.
//!
//! 3. **API** (`api.rs`): Tests verifying dispatch, event emission, and
//!    prefs persistence, not the logic itself.
//!
//! 4. **CLI** (educonnect-cli): End-to-end tests running the binary against
//!    a temp config dir, asserting on stdout.
//!
//! ## Development Workflow
//!
//! When implementing features, work **inside-out**:
//!
//! 1. **Logic**: Implement and fully test in `commands/<cmd>.rs`
//! 2. **API**: Add facade method in `api.rs`, test dispatch
//! 3. **CLI**: Add the subcommand, test arg parsing and output
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`query`]: The filter/search/sort/paginate engine and query strings
//! - [`dataset`]: The bundled read-only data source
//! - [`model`]: Core data types (`Resource`, `Tutor`, `ForumPost`, ...)
//! - [`prefs`]: Theme and Pro-tier preferences on disk
//! - [`events`]: Fire-and-forget analytics sink
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod events;
pub mod model;
pub mod prefs;
pub mod query;

pub use api::EduApi;
pub use dataset::Dataset;
pub use error::{EduError, FieldError, Result};
