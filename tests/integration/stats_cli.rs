//! Stats command.

use crate::integration::test_utils::{run, FakeStore, ScriptedPrompt};

#[test]
fn stats_human_output() {
    let store = FakeStore::new();
    store.insert("ab", "value");
    store.insert("c", "xyz");
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["stats"]);

    assert_eq!(
        run.stdout,
        "stored in '11111-ns'\n  keys:          2\n  bytes keys:    3\n  bytes values:  8\n"
    );
}

#[test]
fn stats_json_output() {
    let store = FakeStore::new();
    let prompt = ScriptedPrompt::silent();

    let run = run(&store, &prompt, &["stats", "--json"]);

    assert_eq!(
        run.json(),
        serde_json::json!({ "keys": 0, "bytesKeys": 0, "bytesValues": 0 })
    );
}
