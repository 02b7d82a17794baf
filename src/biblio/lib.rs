//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic command interpreter** for a small library
//! catalog. The crate is a library that happens to ship a CLI runner, not the
//! other way around, and that distinction drives the layering.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, feeds input lines, prints reply lines  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interpreter (interpreter.rs)                               │
//! │  - Owns Catalog + Session for the lifetime of one run       │
//! │  - Tokenizes each line, applies the login gate, dispatches  │
//! │  - Returns structured CmdResult values, never prints        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per command family       │
//! │  - Validates arguments, checks authorization, mutates state │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State Layer (catalog.rs, session.rs, model.rs)             │
//! │  - In-memory book records, loan state machine, identity     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Reply Text Is the Contract
//!
//! Every command answers with zero or more text lines, and that text is the
//! only observable signal callers get: there are no error codes and nothing
//! is thrown. User mistakes (bad arguments, missing authorization, unknown
//! ids, illegal loan states) become reply lines and the interpreter simply
//! moves on to the next input line. The message strings are stable
//! (including the historical `You are log as <name>` login reply) and tests
//! assert them verbatim.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `interpreter.rs` inward, code takes regular Rust arguments, returns
//! [`commands::CmdResult`], never touches stdout/stderr and never exits. The
//! same core can sit behind a file runner, a pipe, or an embedding
//! application that supplies lines from anywhere.
//!
//! ## Module Overview
//!
//! - [`interpreter`]: line tokenization, the login gate, command dispatch
//! - [`commands`]: business logic for each command plus the reply types
//! - [`catalog`]: the in-memory book collection and id allocation
//! - [`session`]: the single logged-in identity
//! - [`model`]: core data types (`Book`, `Loan`, `User`, `Role`)
//! - [`error`]: error types for the CLI shell's I/O path

pub mod catalog;
pub mod commands;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod session;
