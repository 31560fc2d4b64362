use decoy::matcher::{is_empty, str_contains, str_ends_with, str_starts_with, Matcher};
use decoy::{stub_call, Double, Value};

#[test]
fn success() {
    let mut double = Double::new();
    stub_call!(double, open(str_starts_with("/tmp/"), str_ends_with(".log"))).returns(true);

    assert_eq!(
        double.call("open", &decoy::args!["/tmp/app.log", ".log"]),
        Value::Bool(true)
    );
}

#[test]
fn non_strings_never_match() {
    assert!(!str_contains("1").matches(&Value::from(1)));
    assert!(!str_starts_with("").matches(&Value::Nil));
    assert!(str_contains("ell").matches(&Value::from("hello")));
}

#[test]
fn empty_values() {
    assert!(is_empty().matches(&Value::from("")));
    assert!(is_empty().matches(&Value::from(Vec::<i32>::new())));
    assert!(!is_empty().matches(&Value::from(vec![1])));
    assert!(!is_empty().matches(&Value::Nil));
}
