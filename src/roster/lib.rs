//! # Roster Architecture
//!
//! Roster keeps a small list of employee records in a CSV file. The library holds
//! all of the behaviour; the `roster` binary is a thin interactive menu on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, runs the menu loop, prints results         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs one roster operation, collects user messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster (roster.rs) + Storage Layer (store/)                │
//! │  - Ordered in-memory collection, written through on change  │
//! │  - CsvFileStore (production), InMemoryStore (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. Storage errors propagate to the caller untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per roster operation
//! - [`roster`]: The in-memory collection and write-through
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Employee` and `EmployeeUpdate`
//! - [`config`]: `roster.json` loading
//! - [`error`]: Error types
//! - `cli`: Flag parsing and the interactive menu for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod store;
