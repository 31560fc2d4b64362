use std::io::{self, Write};
use std::sync::Arc;

use decoy::{AssertionCounter, Configuration, Double, Failure, Policy, Value};
use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[test]
fn greet_scenario() {
    let mut double = Double::new();
    double.expects("greet").returns("hi");

    assert_eq!(double.call("greet", &[]), Value::from("hi"));
    double.verify();
}

#[test]
fn missing_call_is_a_cardinality_violation() {
    let mut double = Double::new();
    double.expects("greet");

    let err = double.try_verify(None).unwrap_err();
    let Failure::CardinalityViolation {
        expectation,
        expected,
        invoked,
        defined_at,
        verified_at,
    } = err
    else {
        panic!("expected a cardinality violation");
    };

    assert_eq!(expectation, format!("{double}.greet(any parameters)"));
    assert_eq!(expected, "exactly once");
    assert_eq!(invoked, "invoked never");
    assert!(defined_at.unwrap().contains("verification.rs"));
    assert!(verified_at.is_none());

    double.release();
}

#[test]
#[should_panic(expected = "not all expectations were satisfied")]
fn verify_panics() {
    let mut double = Double::new();
    double.expects("greet");

    double.verify();
}

#[test]
fn verify_forwards_context() {
    let mut double = Double::new();
    double.expects("a");
    double.stubs("b");
    double.call("a", &[]);

    let mut counter = AssertionCounter::new();
    double.try_verify(Some(&mut counter)).unwrap();

    assert_eq!(counter.count(), 2);
}

#[test]
fn verify_stops_at_first_failure_in_registration_order() {
    let mut double = Double::new();
    double.expects("first");
    double.expects("second");

    let mut counter = AssertionCounter::here();
    let err = double.try_verify(Some(&mut counter)).unwrap_err();

    assert_eq!(counter.count(), 1);
    assert!(err.to_string().contains(".first("));
    assert!(err.to_string().contains("verified at"));

    double.release();
}

#[test]
#[should_panic(expected = "not all expectations were satisfied")]
fn verify_on_drop() {
    let mut double = Double::new();
    double.expects("greet");
}

#[test]
fn release_skips_verification() {
    let mut double = Double::new();
    double.expects("greet");

    double.release();
}

#[test]
fn verify_on_drop_can_be_disabled() {
    let _config = Configuration::scoped(|c| c.verify_on_drop = false);

    let mut double = Double::new();
    double.expects("greet");
}

#[test]
fn unnecessary_stubbing_policy() {
    let mut double = Double::new();
    double.stubs("unused");

    {
        let _config = Configuration::scoped(|c| c.unnecessary_stubbing = Policy::Warn);
        assert!(double.try_verify(None).is_ok());
    }

    {
        let _config = Configuration::scoped(|c| c.unnecessary_stubbing = Policy::Prevent);
        let err = double.try_verify(None).unwrap_err();
        assert!(matches!(err, Failure::UnnecessaryStubbing { .. }));
    }

    assert!(double.try_verify(None).is_ok());
}

#[test]
fn report_includes_invocations_when_configured() {
    let _config = Configuration::scoped(|c| c.display_invocations_on_failure = true);

    let mut double = Double::named("calc");
    double
        .stubs("add")
        .with(decoy::matcher::multi((decoy::matcher::eq(1), decoy::matcher::any())));
    double.call("add", &decoy::args![1, 2]);

    let err = double.try_call("add", &decoy::args![2, 2]).unwrap_err();

    assert!(err.to_string().contains("\n  - add(1, 2)"));
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn unnecessary_stubbing_warning_is_logged() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_env_filter(EnvFilter::new("decoy=warn"))
        .finish();

    let mut double = Double::named("logger");
    double.stubs("unused");

    tracing::subscriber::with_default(subscriber, || {
        let _config = Configuration::scoped(|c| c.unnecessary_stubbing = Policy::Warn);

        double.try_verify(None).unwrap();
    });

    let output = String::from_utf8(captured.0.lock().clone()).unwrap();
    assert!(output.contains("WARN"));
    assert!(output.contains("stubbing method unnecessarily"));
    assert!(output.contains("Mock:logger.unused(any parameters)"));
}
