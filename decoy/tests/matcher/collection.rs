use std::collections::BTreeMap;

use decoy::matcher::{has_entry, has_key, includes, Matcher};
use decoy::{stub_call, Double, Value};

fn options() -> Value {
    let mut map = BTreeMap::new();
    map.insert("retries", Value::from(3));
    map.insert("verbose", Value::from(true));

    Value::from(map)
}

#[test]
fn map_matchers() {
    assert!(has_key("retries").matches(&options()));
    assert!(!has_key("timeout").matches(&options()));

    assert!(has_entry("retries", 3).matches(&options()));
    assert!(!has_entry("retries", 4).matches(&options()));
    assert!(!has_entry("retries", 3).matches(&Value::from(3)));
}

#[test]
fn list_matchers() {
    let list = Value::from(vec!["a", "b"]);

    assert!(includes("a").matches(&list));
    assert!(!includes("c").matches(&list));
    assert!(!includes("a").matches(&Value::from("a")));
}

#[test]
fn used_as_argument_matcher() {
    let mut double = Double::new();
    stub_call!(double, configure(has_entry("verbose", true))).returns("ok");

    assert_eq!(double.call("configure", &[options()]), Value::from("ok"));
}
