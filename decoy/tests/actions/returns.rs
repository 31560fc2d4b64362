use decoy::{Double, Value};

#[test]
fn success() {
    let mut double = Double::new();

    double.expects("fuu").returns(1).returns(2).times(3);

    assert_eq!(double.call("fuu", &[]), Value::Int(1));
    assert_eq!(double.call("fuu", &[]), Value::Int(2));
    assert_eq!(double.call("fuu", &[]), Value::Int(2));

    double.verify();
}

#[test]
fn without_response_returns_nil() {
    let mut double = Double::new();

    double.expects("fuu");

    assert_eq!(double.call("fuu", &[]), Value::Nil);
}

#[test]
fn structured_values() {
    let mut double = Double::new();

    double
        .stubs("fuu")
        .returns(vec![Some(1), None])
        .returns(Value::List(Vec::new()));

    assert_eq!(
        double.call("fuu", &[]),
        Value::List(vec![Value::Int(1), Value::Nil])
    );
    assert_eq!(double.call("fuu", &[]), Value::List(Vec::new()));
}
