//! State domain
//!
//! Everything between the command line and the remote key-value store: the narrow store
//! interface and its HTTP client, the confirmation policy guarding destructive deletes, the
//! batch delete orchestrator, the list paginator and the get/put/stats pass-through.
//! The store itself (expiry, glob matching, namespace isolation) lives server-side.

pub mod commands;
pub mod delete;
pub mod http;
pub mod list;
pub mod policy;
pub mod prompt;
pub mod store;

pub use commands::{PutResult, StateCommandService, DEFAULT_TTL_SECONDS};
pub use delete::{BatchDelete, DeleteOutcome, DeleteRequest};
pub use http::HttpStateStore;
pub use list::{ListPaginator, ListResult, PageSink, DEFAULT_MAX_KEYS, DEFAULT_PAGE_SIZE_HINT};
pub use policy::{assess_risk, RiskAssessment, MAX_ARGV_NO_CONFIRM};
pub use prompt::{ConfirmationPrompt, PromptReply, TerminalPrompt};
pub use store::{
    DeleteAllResult, KeyPage, KeyPageStream, ListOptions, PutOptions, StateEntry, StateStore,
    StoreStats,
};
