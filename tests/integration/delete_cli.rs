//! Delete command: request validation, confirmation and both deletion shapes.

use crate::integration::test_utils::{numbered_keys, run, FakeStore, ScriptedPrompt, NS};
use appstate::error::ApiError;

#[test]
fn deletes_few_keys_without_prompt() {
    let store = FakeStore::with_keys(["a".to_string(), "b".to_string(), "c".to_string()]);
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["delete", "a", "missing", "b"]);

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.stdout, "keys deleted: 2\n");
    assert!(prompt.questions().is_empty());
    assert_eq!(store.keys(), vec!["c"]);
    assert_eq!(
        store.calls(),
        vec!["any", "delete a", "delete missing", "delete b"]
    );
}

#[test]
fn keys_and_match_are_exclusive() {
    let store = FakeStore::with_keys(["a".to_string()]);
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["delete", "a", "--match", "a*"]);

    assert_eq!(run.exit_code, 1);
    assert_eq!(run.stderr, "Error: cannot use --match with args\n");
    assert!(store.calls().is_empty());
}

#[test]
fn requires_keys_or_match() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["delete"]);

    assert_eq!(run.exit_code, 1);
    assert_eq!(
        run.stderr,
        "Error: please provide either keys args or --match\n"
    );
    assert!(store.calls().is_empty());
}

#[test]
fn empty_match_counts_as_absent() {
    let store = FakeStore::with_keys(["a".to_string()]);
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["delete", "--match", ""]);

    assert!(matches!(run.result, Err(ApiError::InvalidUsage(_))));
    assert!(store.mutations().is_empty());
}

#[test]
fn empty_namespace_fails_before_prompting() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::answering(NS);

    let run = run(&store, &prompt, &["delete", "--match", "*"]);

    assert_eq!(run.exit_code, 1);
    assert_eq!(run.stderr, "Error: there are no keys stored in '11111-ns'!\n");
    assert!(prompt.alerts().is_empty());
    assert_eq!(store.calls(), vec!["any"]);
}

#[test]
fn many_keys_confirmed_by_namespace() {
    let keys = numbered_keys(6);
    let store = FakeStore::with_keys(keys.clone());
    let prompt = ScriptedPrompt::answering(NS);

    let mut args = vec!["del"];
    args.extend(keys.iter().map(String::as_str));
    let run = run(&store, &prompt, &args);

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.stdout, "keys deleted: 6\n");
    assert_eq!(
        prompt.alerts(),
        vec!["❌ CAUTION, you specified 6 key-values to delete"]
    );
    assert_eq!(
        prompt.questions(),
        vec!["confirm deletion by typing: '11111-ns'"]
    );
    assert!(store.keys().is_empty());
}

#[test]
fn mismatched_confirmation_deletes_nothing() {
    let keys = numbered_keys(6);
    let store = FakeStore::with_keys(keys.clone());
    let prompt = ScriptedPrompt::answering("11111");

    let mut args = vec!["delete"];
    args.extend(keys.iter().map(String::as_str));
    let run = run(&store, &prompt, &args);

    assert_eq!(run.exit_code, 1);
    assert_eq!(run.stderr, "Error: confirmation did not match, aborted\n");
    assert!(store.mutations().is_empty());
    assert_eq!(store.keys().len(), 6);
}

#[test]
fn cancelled_prompt_exits_quietly() {
    let store = FakeStore::with_keys(numbered_keys(3));
    let prompt = ScriptedPrompt::cancelling();

    let run = run(&store, &prompt, &["delete", "--match", "*"]);

    assert_eq!(run.exit_code, 2);
    assert!(run.result.as_ref().unwrap_err().is_cancelled());
    assert_eq!(run.stdout, "");
    assert_eq!(run.stderr, "");
    assert!(store.mutations().is_empty());
}

#[test]
fn cancelled_prompt_in_json_mode_prints_nothing() {
    let store = FakeStore::with_keys(numbered_keys(3));
    let prompt = ScriptedPrompt::cancelling();

    let run = run(&store, &prompt, &["delete", "--match", "key*", "--json"]);

    assert_eq!(run.exit_code, 2);
    assert_eq!(run.stderr, "");
}

#[test]
fn wildcard_only_pattern_warns_about_everything() {
    let store = FakeStore::with_keys(numbered_keys(3));
    let prompt = ScriptedPrompt::answering(NS);

    let run = run(&store, &prompt, &["delete", "--match", "***"]);

    assert_eq!(run.stdout, "keys deleted: 3\n");
    assert_eq!(
        prompt.alerts(),
        vec!["❌ CAUTION, this will delete ALL key-values!"]
    );
    assert_eq!(store.calls(), vec!["any", "delete_all ***"]);
}

#[test]
fn pattern_delete_json_reports_bulk_count() {
    let store = FakeStore::with_keys([
        "glob".to_string(),
        "glb".to_string(),
        "other".to_string(),
    ]);
    let prompt = ScriptedPrompt::answering(NS);

    let run = run(&store, &prompt, &["delete", "--match", "gl*b", "--json"]);

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.json(), serde_json::json!({ "keys": 2 }));
    assert_eq!(run.stderr, "");
    assert_eq!(
        prompt.alerts(),
        vec!["❌ CAUTION, this will delete key-values matching the pattern 'gl*b'"]
    );
    assert_eq!(store.keys(), vec!["other"]);
}

#[test]
fn force_skips_every_prompt() {
    let store = FakeStore::with_keys(numbered_keys(10));
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["rm", "--match", "*", "--force"]);

    assert_eq!(run.stdout, "keys deleted: 10\n");
    assert!(prompt.alerts().is_empty());
    assert!(prompt.questions().is_empty());
}

#[test]
fn usage_error_in_json_mode() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["delete", "--json"]);

    assert_eq!(run.exit_code, 2);
    assert_eq!(run.stdout, "");
    assert_eq!(
        run.error_json(),
        serde_json::json!({ "error": "please provide either keys args or --match" })
    );
}

#[test]
fn failing_delete_stops_the_batch() {
    let store = FakeStore::with_keys(numbered_keys(3));
    store.fail("delete");
    let prompt = ScriptedPrompt::silent();

    let keys = numbered_keys(3);
    let mut args = vec!["delete"];
    args.extend(keys.iter().map(String::as_str));
    let run = run(&store, &prompt, &args);

    assert_eq!(run.exit_code, 1);
    assert!(run.stderr.contains("error fake"));
    assert_eq!(store.calls(), vec!["any", "delete key00000"]);
}
