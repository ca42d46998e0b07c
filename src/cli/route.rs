//! CLI route: single route table and run context. Dispatches to state services and presentation.

use crate::cli::output::Console;
use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation::{
    format_delete_json, format_delete_text, format_get_diagnostics, format_get_json,
    format_list_json, format_put_diagnostics, format_put_json, format_stats_json,
    format_stats_text,
};
use crate::config::ConfigLoader;
use crate::error::ApiError;
use crate::state::{
    BatchDelete, ConfirmationPrompt, DeleteRequest, HttpStateStore, ListOptions, ListPaginator,
    StateCommandService, StateStore, TerminalPrompt, DEFAULT_PAGE_SIZE_HINT,
};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Runtime context for CLI execution: the namespaced store client, the confirmation prompt
/// and the console. Assembled once from validated configuration.
pub struct RunContext {
    store: Arc<dyn StateStore>,
    prompt: Arc<dyn ConfirmationPrompt>,
    console: Console,
    namespace: String,
    paginator: ListPaginator,
    runtime: Runtime,
}

impl RunContext {
    /// Load configuration, validate the runtime identity and connect the HTTP store.
    pub fn new(cli: &Cli, console: Console) -> Result<Self, ApiError> {
        let config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&cli.workspace)?,
        };
        let identity = config.validate()?;

        let region = config.effective_region(cli.region);
        info!(region = %region, "Using state region");
        let endpoint = config.state.endpoint.as_deref();
        if let Some(endpoint) = endpoint {
            info!(endpoint, "Using custom state endpoint");
        }

        let namespace = identity.namespace.clone();
        let store = HttpStateStore::new(identity, region, endpoint)?;
        let prompt = TerminalPrompt::new(console.color_enabled());

        Self::with_parts(Arc::new(store), Arc::new(prompt), console, namespace)
    }

    /// Context over caller-provided collaborators.
    pub fn with_parts(
        store: Arc<dyn StateStore>,
        prompt: Arc<dyn ConfirmationPrompt>,
        console: Console,
        namespace: String,
    ) -> Result<Self, ApiError> {
        let runtime = Runtime::new().map_err(|e| {
            ApiError::ConfigError(format!("Failed to create async runtime: {}", e))
        })?;
        Ok(Self {
            store,
            prompt,
            console,
            namespace,
            paginator: ListPaginator::default(),
            runtime,
        })
    }

    /// Cap on the number of keys `list` returns.
    pub fn with_max_keys(mut self, max_keys: usize) -> Self {
        self.paginator = ListPaginator::new(max_keys);
        self
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<(), ApiError> {
        debug!(command = command.name(), json = self.console.is_json(), "Executing command");
        self.runtime.block_on(self.execute_inner(command))
    }

    async fn execute_inner(&self, command: &Commands) -> Result<(), ApiError> {
        match command {
            Commands::Get { key } => self.handle_get(key).await,
            Commands::Put { key, value, ttl } => self.handle_put(key, value, *ttl).await,
            Commands::Delete {
                keys,
                pattern,
                force,
            } => self.handle_delete(keys, pattern.as_deref(), *force).await,
            Commands::List { pattern } => self.handle_list(pattern.as_deref()).await,
            Commands::Stats => self.handle_stats().await,
        }
    }

    async fn handle_get(&self, key: &str) -> Result<(), ApiError> {
        let entry = StateCommandService::get(self.store.as_ref(), key).await?;
        // value only on stdout, so it can be piped
        self.console.out(&entry.value)?;
        self.console.diag(&format_get_diagnostics(&entry))?;
        self.console.json_result(&format_get_json(&entry))
    }

    async fn handle_put(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<(), ApiError> {
        let result = StateCommandService::put(self.store.as_ref(), key, value, ttl).await?;
        self.console.out(&result.key)?;
        self.console.diag(&format_put_diagnostics(&result))?;
        self.console.json_result(&format_put_json(&result))
    }

    async fn handle_delete(
        &self,
        keys: &[String],
        pattern: Option<&str>,
        force: bool,
    ) -> Result<(), ApiError> {
        let request = DeleteRequest::from_args(keys.to_vec(), pattern.map(str::to_string))?;
        let outcome = BatchDelete::new(self.store.as_ref(), self.prompt.as_ref())
            .execute(&request, force, &self.namespace)
            .await?;
        info!(deleted = outcome.deleted_count, "Delete completed");
        self.console.line(&format_delete_text(outcome.deleted_count))?;
        self.console
            .json_result(&format_delete_json(outcome.deleted_count))
    }

    async fn handle_list(&self, pattern: Option<&str>) -> Result<(), ApiError> {
        let options = ListOptions {
            pattern: pattern.filter(|p| !p.is_empty()).map(str::to_string),
            page_size_hint: DEFAULT_PAGE_SIZE_HINT,
        };
        let pages = self.store.list(options).await?;
        let result = self.paginator.collect(pages, &self.console).await?;
        debug!(
            keys = result.keys.len(),
            truncated = result.truncated,
            "List completed"
        );
        self.console.json_result(&format_list_json(&result.keys))
    }

    async fn handle_stats(&self) -> Result<(), ApiError> {
        let stats = StateCommandService::stats(self.store.as_ref()).await?;
        self.console
            .line(&format_stats_text(&self.namespace, &stats))?;
        self.console.json_result(&format_stats_json(&stats))
    }
}
