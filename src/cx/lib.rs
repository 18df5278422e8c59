//! # cx Architecture
//!
//! cx is a clipboard for filesystem paths: `cx <path>` records a path, `cx paste`
//! moves the most recent one into the current directory (`--persist` copies it
//! instead), `cx list` shows what is recorded and `cx clear` forgets everything.
//! Cutting never touches the file itself, only the clipboard log.
//!
//! Like any library with a CLI client, the logic lives in the library and the
//! binary only parses arguments and prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store + working dir      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, transfer.rs)                 │
//! │  - cut / paste / list / clear state machine                 │
//! │  - Move and recursive copy of files, dirs and symlinks      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ClipboardStore trait                                     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Clipboard Model
//!
//! The clipboard is an ordered list of [`model::Entry`], oldest first. Each
//! operation loads it whole, changes it in memory, and writes it back whole.
//! Entries are not deduplicated. A move-paste removes its entry; a copy-paste
//! keeps it and points `current_path` at the copy. An entry whose
//! `current_path` has disappeared is only noticed when it is pasted.
//!
//! ## Single-User Assumption
//!
//! There is no locking. Two cx processes working on the same clipboard file at
//! once can lose an update, and interrupted directory copies are not rolled back.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`transfer`]: Move/copy of pasted items
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Entry`, `Clipboard`, `ListedEntry`)
//! - [`config`]: Clipboard file location
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod transfer;
