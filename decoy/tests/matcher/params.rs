use decoy::matcher::{any, eq, params, Matcher};
use decoy::{Double, Value};

#[test]
fn arity_must_match() {
    let mut double = Double::new();
    double
        .stubs("fuu")
        .with(decoy::matcher::multi((eq(1), any())))
        .returns(true);

    assert!(double.try_call("fuu", &decoy::args![1, "x"]).is_ok());
    assert!(double.try_call("fuu", &decoy::args![1]).is_err());
    assert!(double.try_call("fuu", &decoy::args![1, "x", 2]).is_err());
}

#[test]
fn dynamic_list_of_matchers() {
    let matchers: Vec<Box<dyn Matcher + Send + Sync>> = vec![Box::new(eq("a")), Box::new(any())];

    let mut double = Double::named("dyn");
    double.stubs("fuu").with(params(matchers)).returns(1);

    assert_eq!(double.call("fuu", &decoy::args!["a", 2]), Value::Int(1));

    let err = double.try_call("fuu", &decoy::args!["b", 2]).unwrap_err();
    assert!(err.to_string().contains("Mock:dyn.fuu(\"a\", any)"));
}

#[test]
fn any_parameters_accepts_everything() {
    let mut double = Double::new();
    double.stubs("fuu").returns(1);

    assert_eq!(double.call("fuu", &[]), Value::Int(1));
    assert_eq!(double.call("fuu", &decoy::args![1, 2, 3]), Value::Int(1));
}
