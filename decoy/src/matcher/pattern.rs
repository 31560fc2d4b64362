use std::fmt::{Formatter, Result as FmtResult};

use ::regex::Regex;

use crate::Value;

use super::Matcher;

/// Matches string arguments against the passed regular expression.
pub fn regex_matches(regex: Regex) -> RegexMatches {
    RegexMatches(regex)
}

#[must_use]
#[derive(Debug)]
pub struct RegexMatches(pub Regex);

impl Matcher for RegexMatches {
    fn matches(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| self.0.is_match(s))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "regex_matches(/{}/)", self.0.as_str())
    }
}
