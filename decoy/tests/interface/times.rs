use decoy::{Double, Value};

#[test]
fn success() {
    let mut double = Double::new();

    double.expects("once").once();
    double.expects("twice").twice();
    double.expects("range").times(1..4);
    double.expects("range_inclusive").times(1..=3);
    double.expects("at_least").at_least(2);
    double.expects("at_most").at_most(2);
    double.expects("never").never();
    double.stubs("any");

    double.call("once", &[]);
    double.call("twice", &[]);
    double.call("twice", &[]);
    for _ in 0..3 {
        double.call("range", &[]);
        double.call("range_inclusive", &[]);
        double.call("at_least", &[]);
    }
    double.call("at_most", &[]);

    double.verify();
}

#[test]
fn zero_or_one() {
    let mut double = Double::new();
    double.expects("maybe").at_most_once();
    double.verify();

    assert_eq!(double.call("maybe", &[]), Value::Nil);
    double.verify();
}

#[test]
#[should_panic(expected = "expected at least twice, invoked once")]
fn too_few() {
    let mut double = Double::new();
    double.expects("fuu").at_least(2);

    double.call("fuu", &[]);
    double.verify();
}

#[test]
#[should_panic(expected = "expected exactly twice, invoked 3 times")]
fn too_many() {
    let mut double = Double::new();
    double.expects("fuu").twice();

    for _ in 0..3 {
        double.call("fuu", &[]);
    }

    double.verify();
}

#[test]
#[should_panic(expected = "expected never, invoked once")]
fn never_invoked() {
    let mut double = Double::new();
    double.expects("fuu").never();

    double.call("fuu", &[]);
    double.verify();
}
