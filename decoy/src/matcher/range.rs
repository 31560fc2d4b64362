use std::fmt::{Formatter, Result as FmtResult};
use std::ops::{Bound, RangeBounds};

use crate::Value;

use super::Matcher;

/// Matches values inside the passed range, e.g. `range(4..=6)`.
pub fn range<R, T>(range: R) -> Range
where
    R: RangeBounds<T>,
    T: Clone + Into<Value>,
{
    Range::new(range)
}

#[must_use]
#[derive(Debug)]
pub struct Range {
    start: Bound<Value>,
    end: Bound<Value>,
}

impl Range {
    pub fn new<R, T>(range: R) -> Self
    where
        R: RangeBounds<T>,
        T: Clone + Into<Value>,
    {
        Self {
            start: convert(range.start_bound()),
            end: convert(range.end_bound()),
        }
    }
}

fn convert<T>(bound: Bound<&T>) -> Bound<Value>
where
    T: Clone + Into<Value>,
{
    match bound {
        Bound::Unbounded => Bound::Unbounded,
        Bound::Included(x) => Bound::Included(x.clone().into()),
        Bound::Excluded(x) => Bound::Excluded(x.clone().into()),
    }
}

impl Matcher for Range {
    fn matches(&self, value: &Value) -> bool {
        let lower = match &self.start {
            Bound::Unbounded => true,
            Bound::Included(x) => value >= x,
            Bound::Excluded(x) => value > x,
        };

        let upper = match &self.end {
            Bound::Unbounded => true,
            Bound::Included(x) => value <= x,
            Bound::Excluded(x) => value < x,
        };

        lower && upper
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.start {
            Bound::Unbounded => write!(f, "[_, "),
            Bound::Included(x) => write!(f, "[{x}, "),
            Bound::Excluded(x) => write!(f, "({x}, "),
        }?;

        match &self.end {
            Bound::Unbounded => write!(f, "_]"),
            Bound::Included(x) => write!(f, "{x}]"),
            Bound::Excluded(x) => write!(f, "{x})"),
        }?;

        Ok(())
    }
}
