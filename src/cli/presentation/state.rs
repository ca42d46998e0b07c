//! State presentation: get/put/delete/list/stats formatters.

use crate::state::{PutResult, StateEntry, StoreStats};
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde_json::{json, Value};
use std::fmt::Display;

const LOCAL_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Store expiration rendered in local time; unparsable input is shown as is.
pub fn format_expiration_local(expiration: &str) -> String {
    format_expiration_in(expiration, &Local)
}

fn format_expiration_in<Tz: TimeZone>(expiration: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(expiration) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format(LOCAL_TIME_FORMAT)
            .to_string(),
        Err(_) => expiration.to_string(),
    }
}

fn format_utc_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(LOCAL_TIME_FORMAT).to_string()
}

pub fn format_get_diagnostics(entry: &StateEntry) -> String {
    format!(
        "\n> expiration: {} (local time)\n",
        format_expiration_local(&entry.expiration)
    )
}

pub fn format_get_json(entry: &StateEntry) -> Value {
    json!({ "value": entry.value, "expiration": entry.expiration })
}

pub fn format_put_diagnostics(result: &PutResult) -> String {
    put_diagnostics_in(result, &Local)
}

fn put_diagnostics_in<Tz: TimeZone>(result: &PutResult, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    format!(
        "\n> expiration:   {} (local time)\n> bytes value:  {}\n",
        format_utc_in(&result.expiration, tz),
        result.bytes_value
    )
}

pub fn format_put_json(result: &PutResult) -> Value {
    json!({
        "key": result.key,
        "bytesValue": result.bytes_value,
        "expiration": result.expiration.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub fn format_delete_text(deleted_count: u64) -> String {
    format!("keys deleted: {}", deleted_count)
}

pub fn format_delete_json(deleted_count: u64) -> Value {
    json!({ "keys": deleted_count })
}

pub fn format_list_json(keys: &[String]) -> Value {
    json!(keys)
}

pub fn format_stats_text(namespace: &str, stats: &StoreStats) -> String {
    format!(
        "stored in '{}'\n  keys:          {}\n  bytes keys:    {}\n  bytes values:  {}",
        namespace, stats.key_count, stats.key_bytes, stats.value_bytes
    )
}

pub fn format_stats_json(stats: &StoreStats) -> Value {
    json!({
        "keys": stats.key_count,
        "bytesKeys": stats.key_bytes,
        "bytesValues": stats.value_bytes,
    })
}
