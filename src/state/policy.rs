//! Confirmation policy for destructive deletes.
//!
//! Pure decision: given a delete request and the force flag, say whether an operator must
//! confirm and with which warning. Printing and prompting belong to the orchestrator.

use crate::state::delete::DeleteRequest;

/// Above this many explicit keys, deletion asks for confirmation.
pub const MAX_ARGV_NO_CONFIRM: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskAssessment {
    warning: Option<String>,
}

impl RiskAssessment {
    fn safe() -> Self {
        Self { warning: None }
    }

    fn caution(warning: String) -> Self {
        Self {
            warning: Some(warning),
        }
    }

    pub fn needs_confirmation(&self) -> bool {
        self.warning.is_some()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}

/// Decide whether `request` needs interactive confirmation.
///
/// Pattern deletes always do unless forced: how many keys match is only known server-side.
pub fn assess_risk(request: &DeleteRequest, force: bool) -> RiskAssessment {
    if force {
        return RiskAssessment::safe();
    }
    match request {
        DeleteRequest::Keys(keys) if keys.len() > MAX_ARGV_NO_CONFIRM => RiskAssessment::caution(
            format!("❌ CAUTION, you specified {} key-values to delete", keys.len()),
        ),
        DeleteRequest::Keys(_) => RiskAssessment::safe(),
        DeleteRequest::Pattern(pattern) if matches_everything(pattern) => {
            RiskAssessment::caution("❌ CAUTION, this will delete ALL key-values!".to_string())
        }
        DeleteRequest::Pattern(pattern) => RiskAssessment::caution(format!(
            "❌ CAUTION, this will delete key-values matching the pattern '{}'",
            pattern
        )),
    }
}

fn matches_everything(pattern: &str) -> bool {
    pattern.chars().all(|c| c == '*')
}
