use decoy::matcher::{eq, gt, str_starts_with};
use decoy::{call, expect_call, stub_call, Double, Value};

#[test]
fn expect_call_with_matchers() {
    let mut double = Double::named("greeter");
    expect_call!(double, greet(str_starts_with("al"), gt(17))).returns("hi");

    assert_eq!(call!(double, greet("alice", 18)), Value::from("hi"));
    assert!(double.try_call("greet", &decoy::args!["alice", 17]).is_err());

    double.verify();
}

#[test]
fn wildcard_accepts_any_argument() {
    let mut double = Double::new();
    stub_call!(double, add(eq(1), _)).returns(10);

    assert_eq!(call!(double, add(1, "two")), Value::Int(10));
    assert_eq!(call!(double, add(1, ())), Value::Int(10));
}

#[test]
fn empty_arguments_only_match_calls_without_arguments() {
    let mut double = Double::new();
    stub_call!(double, ping()).returns("pong");

    assert_eq!(call!(double, ping()), Value::from("pong"));
    assert!(double.try_call("ping", &decoy::args![1]).is_err());
}

#[test]
fn raw_identifier() {
    let mut double = Double::new();
    stub_call!(double, r#type()).returns("double");

    assert_eq!(call!(double, r#type()), Value::from("double"));
}

#[test]
fn call_with_block() {
    let mut double = Double::new();
    stub_call!(double, each(_)).yields([1, 2]).returns(true);

    let mut seen = Vec::new();
    let ret = call!(double, each("list"), |args: &[Value]| {
        seen.extend_from_slice(args);

        Value::Nil
    });

    assert_eq!(ret, Value::Bool(true));
    assert_eq!(seen, decoy::args![1, 2]);
}

#[test]
#[should_panic(expected = "expected exactly once, invoked never: Mock:greeter.greet(\"bob\")")]
fn expect_call_is_strict() {
    let mut double = Double::named("greeter");
    expect_call!(double, greet(eq("bob")));
}
