use std::fmt::{Formatter, Result as FmtResult};

use crate::Value;

use super::Matcher;

/// Matches lists that contain the passed `item`.
pub fn includes<T: Into<Value>>(item: T) -> Includes {
    Includes(item.into())
}

#[must_use]
#[derive(Debug)]
pub struct Includes(pub Value);

impl Matcher for Includes {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::List(items) => items.contains(&self.0),
            _ => false,
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "includes({})", self.0)
    }
}

/// Matches maps that contain the passed `key`.
pub fn has_key<K: Into<String>>(key: K) -> HasKey {
    HasKey(key.into())
}

#[must_use]
#[derive(Debug)]
pub struct HasKey(pub String);

impl Matcher for HasKey {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Map(entries) => entries.contains_key(&self.0),
            _ => false,
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "has_key({:?})", self.0)
    }
}

/// Matches maps that contain the passed `key` with the passed `value`.
pub fn has_entry<K: Into<String>, V: Into<Value>>(key: K, value: V) -> HasEntry {
    HasEntry(key.into(), value.into())
}

#[must_use]
#[derive(Debug)]
pub struct HasEntry(pub String, pub Value);

impl Matcher for HasEntry {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Map(entries) => entries.get(&self.0) == Some(&self.1),
            _ => false,
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "has_entry({:?} => {})", self.0, self.1)
    }
}
