//! # Minicrm Architecture
//!
//! Minicrm keeps a small address book of contacts (id, name, email). The
//! library holds all of the logic; the `minicrm` binary is a thin menu-driven
//! client on top of it.
//!
//! ## Layers
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
//! │  Service Layer (api.rs)                                     │
//! │  - ContactService: dispatch + notification fan-out          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, read-modify-write, result messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait                                       │
//! │  - JsonFileStore (production), InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types.
//! It never reads stdin, never calls `std::process::exit` and never installs
//! a log subscriber. The one exception is the simulated notifiers in
//! [`notify`], which print because that is all they do.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-owner. A store instance, and the
//! document behind a file store, must not be shared between threads or
//! processes.
//!
//! ## Module Overview
//!
//! - [`api`]: `ContactService`, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage trait and implementations
//! - [`model`]: The `Contact` record and its validation rules
//! - [`notify`]: Best-effort change notifiers
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
