//! CLI presentation: text and json formatters per command family.

mod state;

pub use state::{
    format_delete_json, format_delete_text, format_expiration_local, format_get_diagnostics,
    format_get_json, format_list_json, format_put_diagnostics, format_put_json,
    format_stats_json, format_stats_text,
};
