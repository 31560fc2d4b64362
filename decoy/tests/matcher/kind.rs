use decoy::matcher::{closure, is_nil, kind_of, Matcher};
use decoy::{stub_call, Double, Value};

#[test]
fn kinds() {
    assert!(is_nil().matches(&Value::Nil));
    assert!(is_nil().matches(&Value::from(None::<i32>)));
    assert!(!is_nil().matches(&Value::from(0)));

    assert!(kind_of("int").matches(&Value::from(1u8)));
    assert!(kind_of("float").matches(&Value::from(1.0)));
    assert!(kind_of("string").matches(&Value::from('c')));
    assert!(!kind_of("int").matches(&Value::from("1")));
}

#[test]
fn closure_matcher() {
    let mut double = Double::new();
    stub_call!(double, fuu(closure(|v: &Value| v.as_int().is_some_and(|i| i % 2 == 0))))
        .returns("even");

    assert_eq!(double.call("fuu", &decoy::args![4]), Value::from("even"));
    assert!(double.try_call("fuu", &decoy::args![3]).is_err());
}
