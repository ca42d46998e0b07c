//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to state services.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{
    exit_code, map_error, CapturedOutput, Console, SharedBuffer, EXIT_CANCELLED, EXIT_ERROR,
    EXIT_JSON_ERROR, EXIT_SUCCESS,
};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_delete_json, format_delete_text, format_expiration_local, format_get_diagnostics,
    format_get_json, format_list_json, format_put_diagnostics, format_put_json,
    format_stats_json, format_stats_text,
};
pub use route::RunContext;
