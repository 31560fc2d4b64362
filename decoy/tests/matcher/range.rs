use decoy::{expect_call, matcher::range, Double};

#[test]
fn success() {
    let mut double = Double::new();

    expect_call!(double, fuu(range(4..=6)));

    double.call("fuu", &decoy::args![5]);
}

#[test]
#[should_panic(expected = "unexpected invocation")]
fn failure() {
    let mut double = Double::new();

    expect_call!(double, fuu(range(4..=6)));

    double.call("fuu", &decoy::args![7]);
}

#[test]
fn half_open_and_floats() {
    let mut double = Double::new();

    double
        .stubs("fuu")
        .with(decoy::matcher::multi((range(1.5..),)))
        .returns(true);

    assert!(double.try_call("fuu", &decoy::args![1.5]).is_ok());
    assert!(double.try_call("fuu", &decoy::args![2]).is_ok());
    assert!(double.try_call("fuu", &decoy::args![1]).is_err());
    assert!(double.try_call("fuu", &decoy::args!["2"]).is_err());
}
