//! Batch delete orchestrator.
//!
//! Resolves a delete request into store calls: one sequential `delete` per explicit key, or a
//! single server-side `delete_all` for a pattern. Destructive requests go through the
//! confirmation policy first.

use crate::error::ApiError;
use crate::state::policy::assess_risk;
use crate::state::prompt::{ConfirmationPrompt, PromptReply};
use crate::state::store::StateStore;
use tracing::{debug, info};

/// Explicit keys XOR a glob-like pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    /// Non-empty, in the order given
    Keys(Vec<String>),
    Pattern(String),
}

impl DeleteRequest {
    /// Build a request from command-line arguments. An empty pattern counts as absent.
    pub fn from_args(keys: Vec<String>, pattern: Option<String>) -> Result<Self, ApiError> {
        let pattern = pattern.filter(|p| !p.is_empty());
        match (keys.is_empty(), pattern) {
            (false, Some(_)) => Err(ApiError::InvalidUsage(
                "cannot use --match with args".to_string(),
            )),
            (true, None) => Err(ApiError::InvalidUsage(
                "please provide either keys args or --match".to_string(),
            )),
            (false, None) => Ok(DeleteRequest::Keys(keys)),
            (true, Some(pattern)) => Ok(DeleteRequest::Pattern(pattern)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

pub struct BatchDelete<'a> {
    store: &'a dyn StateStore,
    prompt: &'a dyn ConfirmationPrompt,
}

impl<'a> BatchDelete<'a> {
    pub fn new(store: &'a dyn StateStore, prompt: &'a dyn ConfirmationPrompt) -> Self {
        Self { store, prompt }
    }

    /// Execute `request` against the store, asking for confirmation when the policy says so.
    ///
    /// A failing per-key delete aborts the batch; keys after it are not attempted.
    pub async fn execute(
        &self,
        request: &DeleteRequest,
        force: bool,
        namespace: &str,
    ) -> Result<DeleteOutcome, ApiError> {
        if !self.store.any().await? {
            return Err(ApiError::PreconditionFailed(format!(
                "there are no keys stored in '{}'!",
                namespace
            )));
        }

        let risk = assess_risk(request, force);
        if let Some(warning) = risk.warning() {
            self.confirm(warning, namespace)?;
        }

        let deleted_count = match request {
            DeleteRequest::Keys(keys) => {
                let mut deleted = 0;
                for key in keys {
                    if self.store.delete(key).await? {
                        deleted += 1;
                    } else {
                        debug!(key = %key, "Key did not exist");
                    }
                }
                deleted
            }
            DeleteRequest::Pattern(pattern) => {
                info!(pattern = %pattern, "Deleting keys by pattern");
                self.store.delete_all(pattern).await?.deleted_count
            }
        };

        Ok(DeleteOutcome { deleted_count })
    }

    fn confirm(&self, warning: &str, namespace: &str) -> Result<(), ApiError> {
        self.prompt.alert(warning)?;
        let message = format!("confirm deletion by typing: '{}'", namespace);
        match self.prompt.ask(&message)? {
            PromptReply::Cancelled => Err(ApiError::OperationCancelled),
            PromptReply::Answer(answer) if answer == namespace => Ok(()),
            PromptReply::Answer(_) => Err(ApiError::ConfirmationMismatch),
        }
    }
}
