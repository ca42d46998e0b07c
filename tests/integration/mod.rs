//! Integration tests for the appstate CLI

mod delete_cli;
mod get_put_cli;
mod list_cli;
mod stats_cli;
