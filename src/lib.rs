//! Appstate: key-value state management from the terminal
//!
//! Get, put, list and delete entries of an application's remote state store. The store
//! itself is remote; this crate holds the command surface, the safety checks guarding
//! destructive deletes, bounded key listing and human/JSON output.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
