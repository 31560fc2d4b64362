use decoy::{args, Call, Double, Failure, Value};

#[test]
fn fallback_resolves_unmatched_calls() {
    let mut double = Double::new();
    double.stubs("greet").returns("hi");
    double.delegate_to(|call: &Call<'_>| match call.method() {
        "name" => Ok(Value::from("real")),
        _ => Err(Failure::configured("no such method")),
    });

    assert_eq!(double.call("greet", &[]), Value::from("hi"));
    assert_eq!(double.call("name", &[]), Value::from("real"));
}

#[test]
fn any_fallback_failure_is_reported_as_unmatched() {
    let mut double = Double::new();
    double.delegate_to(|_: &Call<'_>| Err(Failure::configured("boom")));

    let err = double.try_call("missing", &args![1]).unwrap_err();

    assert!(err.is_unmatched_call());
    assert!(err.to_string().contains("missing(1)"));
}

#[test]
fn double_can_delegate_to_other_double() {
    let mut real = Double::new();
    real.stubs("size").returns(42);

    let mut double = Double::new();
    double.delegate_to(real);

    assert_eq!(double.call("size", &[]), Value::Int(42));
    assert!(!double.responds_to("size"));
}

#[test]
fn stub_everything_wins_over_fallback() {
    let mut double = Double::stub_everything();
    double.delegate_to(|_: &Call<'_>| Ok(Value::from(1)));

    assert_eq!(double.call("anything", &[]), Value::Nil);
}
