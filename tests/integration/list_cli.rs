//! List command: streaming output, filtering and truncation.

use crate::integration::test_utils::{
    numbered_keys, run, run_with_max_keys, FakeStore, ScriptedPrompt,
};
use std::sync::atomic::Ordering;

#[test]
fn list_empty_namespace() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["list"]);

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.stdout, "");
    assert_eq!(run.stderr, "");
}

#[test]
fn list_prints_one_key_per_line_across_pages() {
    let keys = numbered_keys(1200);
    let store = FakeStore::with_keys(keys.clone());
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["ls"]);

    assert_eq!(run.stdout, keys.join("\n") + "\n");
    assert_eq!(store.pages_pulled.load(Ordering::SeqCst), 3);
}

#[test]
fn list_with_match_passes_pattern_to_store() {
    let store = FakeStore::with_keys(["key1".to_string(), "key2".to_string(), "other".to_string()]);
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["list", "--match", "key*"]);

    assert_eq!(run.stdout, "key1\nkey2\n");
    assert_eq!(store.calls(), vec!["list Some(\"key*\")"]);
}

#[test]
fn list_json_is_a_single_array() {
    let store = FakeStore::with_keys(["a".to_string()]);
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["list", "--json"]);

    assert_eq!(run.json(), serde_json::json!(["a"]));
    assert_eq!(run.stderr, "");
}

#[test]
fn list_truncates_and_warns() {
    let keys = numbered_keys(12);
    let store = FakeStore::with_keys(keys.clone());
    let prompt = ScriptedPrompt::silent();

    let run = run_with_max_keys(&store, &prompt, Some(5), &["list"]);

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.stdout, keys[..5].join("\n") + "\n");
    assert_eq!(
        run.stderr,
        "> Warning: Too many keys found, only the first 5 keys are displayed. Use the match filter to narrow keys.\n"
    );
}

#[test]
fn list_stops_pulling_at_default_cap() {
    let keys = numbered_keys(5600);
    let store = FakeStore::with_keys(keys.clone());
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["list", "--json"]);

    let listed = run.json();
    assert_eq!(listed.as_array().unwrap().len(), 5000);
    assert_eq!(listed[4999], serde_json::json!(keys[4999]));
    // 500-key pages: the tenth fills the cap, the eleventh shows there is more, the twelfth
    // is never requested
    assert_eq!(store.pages_pulled.load(Ordering::SeqCst), 11);
    assert!(run.stderr.is_empty());
}

#[test]
fn list_failure_is_reported() {
    let store = FakeStore::with_keys(["a".to_string()]);
    store.fail("list");
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["list", "--json"]);

    assert_eq!(run.exit_code, 2);
    assert_eq!(run.stdout, "");
    assert_eq!(
        run.error_json(),
        serde_json::json!({ "error": "State store request failed: error fake" })
    );
}
