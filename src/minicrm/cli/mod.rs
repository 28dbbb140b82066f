//! # CLI Layer
//!
//! One possible UI client for minicrm, and the only code that touches the
//! terminal:
//!
//! 1. **Argument Parsing**: flags via clap (`setup.rs`)
//! 2. **Context Setup**: config, store and notifiers (`commands.rs`)
//! 3. **Menu Loop**: prompts and dispatch to `ContactService` (`menu.rs`)
//! 4. **Output Formatting**: colored messages and contact tables (`print.rs`)
//!
//! Errors from individual menu actions are printed and the loop continues.
//! Only startup failures (bad config, unreadable contacts file) reach `main`
//! and end the process.

mod commands;
mod menu;
mod print;
mod prompt;
mod setup;

pub use commands::run;
