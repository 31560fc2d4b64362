use decoy::matcher::{regex_matches, Regex};
use decoy::{expect_call, Double};

#[test]
fn success() {
    let mut double = Double::new();

    expect_call!(double, fetch(regex_matches(Regex::new(r"^https://").unwrap())));

    double.call("fetch", &decoy::args!["https://example.org"]);
}

#[test]
fn failure_is_reported_with_the_pattern() {
    let mut double = Double::named("http");

    expect_call!(double, fetch(regex_matches(Regex::new(r"^https://").unwrap())));

    let err = double
        .try_call("fetch", &decoy::args!["http://example.org"])
        .unwrap_err();

    assert!(err
        .to_string()
        .contains("Mock:http.fetch(regex_matches(/^https:///))"));

    double.release();
}
