use decoy::matcher::{eq, multi};
use decoy::{args, Double, Failure, Value};

#[test]
fn last_registered_wins() {
    let mut double = Double::new();
    double.stubs("x").returns(1);
    double.stubs("x").returns(2);

    assert_eq!(double.call("x", &[]), Value::Int(2));
    assert_eq!(double.call("x", &[]), Value::Int(2));
}

#[test]
fn shadowed_handler_is_not_invoked() {
    let mut double = Double::new();
    double.expects("x").returns(1).never();
    double.expects("x").returns(2);

    assert_eq!(double.call("x", &[]), Value::Int(2));
    double.verify();
}

#[test]
fn falls_through_to_older_handler() {
    let mut double = Double::new();
    double.expects("x").with(multi((eq(1),))).returns("first");
    double.stubs("x").with(multi((eq(2),))).returns("second");

    assert_eq!(double.call("x", &args![1]), Value::from("first"));
    assert_eq!(double.call("x", &args![2]), Value::from("second"));
    double.verify();
}

#[test]
fn stub_everything_absorbs_unmatched_calls() {
    let mut double = Double::stub_everything();

    assert_eq!(double.call("anything", &args![1, 2, 3]), Value::Nil);
    assert_eq!(double.try_call("other", &[]).unwrap(), Value::Nil);
}

#[test]
fn stub_everything_still_uses_handlers() {
    let mut double = Double::stub_everything();
    double.stubs("size").returns(3);

    assert_eq!(double.call("size", &[]), Value::Int(3));
    assert_eq!(double.call("missing", &[]), Value::Nil);
}

#[test]
fn stub_everything_absorbs_rejected_arguments() {
    let mut double = Double::stub_everything();
    double.stubs("x").with(multi((eq(1),))).returns("one");

    assert_eq!(double.try_call("x", &args![2]).unwrap(), Value::Nil);
    assert_eq!(double.try_call("x", &args![1]).unwrap(), Value::from("one"));
}

#[test]
fn unmatched_call_fails() {
    let mut double = Double::new();

    let err = double.try_call("unknownCall", &args![1]).unwrap_err();
    let Failure::UnmatchedCall { double: id, call, report } = err else {
        panic!("expected an unmatched call");
    };

    assert_eq!(id, double.debug_identity());
    assert_eq!(call, format!("{id}.unknownCall(1)"));
    assert!(report.starts_with("unexpected invocation: "));
    assert!(report.contains("unknownCall"));
}

#[test]
#[should_panic(expected = "unexpected invocation: Mock:unit.unknownCall()")]
fn unmatched_call_panics() {
    let mut double = Double::named("unit");

    double.call("unknownCall", &[]);
}

#[test]
fn unmatched_call_lists_handlers() {
    let mut double = Double::named("greeter");
    double.expects("greet").with(multi((eq("alice"),)));
    double.stubs("name").returns("greeter");

    let err = double.try_call("greet", &args!["bob"]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "unexpected invocation: Mock:greeter.greet(\"bob\")\n\
         unsatisfied expectations:\n\
         - expected exactly once, invoked never: Mock:greeter.greet(\"alice\")\n\
         satisfied expectations:\n\
         - allowed any number of times, invoked never: Mock:greeter.name(any parameters)"
    );

    double.release();
}

#[test]
fn configured_failure_is_propagated() {
    let mut double = Double::new();
    double.stubs("save").raises("disk full");

    let err = double.try_call("save", &[]).unwrap_err();

    assert!(err.is_configured());
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn exhausted_expectation_still_matches() {
    let mut double = Double::new();
    double.expects("greet").returns("hi");

    assert_eq!(double.call("greet", &[]), Value::from("hi"));
    assert_eq!(double.call("greet", &[]), Value::from("hi"));

    let err = double.try_verify(None).unwrap_err();
    assert!(err.is_cardinality_violation());

    double.release();
}
