//! Get and put commands: data on stdout, details on stderr, JSON payloads.

use crate::integration::test_utils::{run, FakeStore, ScriptedPrompt};
use chrono::{DateTime, Duration, Utc};

#[test]
fn get_writes_only_the_value_to_stdout() {
    let store = FakeStore::new();
    store.insert("key", "multi\nline value");
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["get", "key"]);

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.stdout, "multi\nline value");
    assert!(run.stderr.starts_with("\n> expiration: "));
    assert!(run.stderr.ends_with(" (local time)\n"));
}

#[test]
fn get_json_passes_expiration_through() {
    let store = FakeStore::new();
    store.insert("key", "value");
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["get", "key", "--json"]);

    assert_eq!(
        run.json(),
        serde_json::json!({ "value": "value", "expiration": "2000-01-02T00:00:00.000Z" })
    );
    assert_eq!(run.stderr, "");
}

#[test]
fn get_missing_key() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::silent();

    let human = run(&store, &prompt, &["get", "nope"]);
    assert_eq!(human.exit_code, 1);
    assert_eq!(human.stdout, "");
    assert_eq!(human.stderr, "Error: key does not exist\n");

    let json = run(&store, &prompt, &["get", "nope", "--json"]);
    assert_eq!(json.exit_code, 2);
    assert_eq!(
        json.error_json(),
        serde_json::json!({ "error": "key does not exist" })
    );
}

#[test]
fn put_prints_key_and_size() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["put", "key", "value"]);

    assert_eq!(run.exit_code, 0);
    assert_eq!(run.stdout, "key");
    assert!(run.stderr.starts_with("\n> expiration:   "));
    assert!(run.stderr.ends_with("(local time)\n> bytes value:  5\n"));
    assert_eq!(store.calls(), vec!["put key ttl=None"]);
}

#[test]
fn put_json_with_ttl() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::silent();
    let before = Utc::now();

    let run = run(&store, &prompt, &["put", "key", "välue", "--ttl", "3600", "--json"]);

    let payload = run.json();
    assert_eq!(payload["key"], "key");
    assert_eq!(payload["bytesValue"], 6);
    let expiration: DateTime<Utc> = payload["expiration"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(expiration >= before + Duration::seconds(3599));
    assert!(expiration <= Utc::now() + Duration::seconds(3600));
    assert_eq!(store.calls(), vec!["put key ttl=Some(3600)"]);
}

#[test]
fn put_upstream_failure() {
    let store = FakeStore::new();
    store.fail("put");
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["put", "key", "value"]);

    assert_eq!(run.exit_code, 1);
    assert_eq!(run.stdout, "");
    assert_eq!(
        run.stderr,
        "Error: State store request failed: error fake\n"
    );
}
