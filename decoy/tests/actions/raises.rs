use std::fmt::{Display, Formatter, Result as FmtResult};

use decoy::{Double, Failure, Value};

#[derive(Debug)]
struct Timeout;

impl Display for Timeout {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "connection timed out")
    }
}

impl std::error::Error for Timeout {}

#[test]
fn success() {
    let mut double = Double::new();

    double.stubs("connect").raises(Timeout).returns("connected");

    let err = double.try_call("connect", &[]).unwrap_err();
    assert!(err.is_configured());
    assert_eq!(err.to_string(), "connection timed out");

    assert_eq!(double.call("connect", &[]), Value::from("connected"));
}

#[test]
fn source_error_is_kept() {
    let mut double = Double::new();

    double.stubs("connect").raises(Timeout);

    let Err(Failure::ConfiguredFailure(err)) = double.try_call("connect", &[]) else {
        panic!("expected a configured failure");
    };

    assert!(err.downcast_ref::<Timeout>().is_some());
}

#[test]
#[should_panic(expected = "connection timed out")]
fn call_panics() {
    let mut double = Double::new();

    double.stubs("connect").raises(Timeout);

    double.call("connect", &[]);
}
