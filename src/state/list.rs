//! List paginator: bounded, truncation-aware accumulation of a lazy key enumeration.

use crate::error::ApiError;
use crate::state::store::KeyPageStream;
use futures::StreamExt;
use tracing::debug;

/// Maximum number of keys a listing returns.
pub const DEFAULT_MAX_KEYS: usize = 5000;

/// Page size suggested to the store. Pages of any length are handled.
pub const DEFAULT_PAGE_SIZE_HINT: usize = 500;

/// Receives keys as they arrive, for streaming display.
pub trait PageSink {
    fn emit_page(&self, keys: &[String]) -> Result<(), ApiError>;

    fn emit_warning(&self, message: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListResult {
    /// Keys in the order the pages yielded them
    pub keys: Vec<String>,
    pub truncated: bool,
}

pub struct ListPaginator {
    max_keys: usize,
}

impl Default for ListPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_KEYS)
    }
}

impl ListPaginator {
    pub fn new(max_keys: usize) -> Self {
        Self { max_keys }
    }

    /// Pull pages until the stream ends or the cap is reached.
    ///
    /// Once a page would overflow the cap it is cut to fit and the stream is not polled again.
    /// Any page error aborts the whole listing.
    pub async fn collect(
        &self,
        mut pages: KeyPageStream,
        sink: &dyn PageSink,
    ) -> Result<ListResult, ApiError> {
        let mut keys: Vec<String> = Vec::new();
        let mut truncated = false;

        while let Some(page) = pages.next().await {
            let page = page?;
            let remaining = self.max_keys - keys.len();
            debug!(page_len = page.keys.len(), remaining, "Received key page");

            if page.keys.len() <= remaining {
                emit(sink, &page.keys)?;
                keys.extend(page.keys);
            } else {
                let slice = &page.keys[..remaining];
                emit(sink, slice)?;
                keys.extend_from_slice(slice);
                truncated = true;
                break;
            }
        }

        if truncated {
            sink.emit_warning(&truncation_warning(self.max_keys))?;
        }

        Ok(ListResult { keys, truncated })
    }
}

fn emit(sink: &dyn PageSink, keys: &[String]) -> Result<(), ApiError> {
    if keys.is_empty() {
        return Ok(());
    }
    sink.emit_page(keys)
}

pub fn truncation_warning(max_keys: usize) -> String {
    format!(
        "Too many keys found, only the first {} keys are displayed. Use the match filter to narrow keys.",
        max_keys
    )
}
