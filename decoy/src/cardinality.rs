//! The [`cardinality`](self) module contains the types that define how often a
//! handler of a double may be invoked.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

/// Keeps track of the number of invocations of a specific handler and the
/// number of invocations it expects.
#[derive(Default, Debug, Clone)]
pub struct Cardinality {
    /// Number of times the handler was already invoked.
    count: usize,

    /// Expected number of invocations.
    range: CardinalityRange,
}

impl Cardinality {
    /// Create a new [`Cardinality`] instance from the passed `range`.
    pub fn new<R: Into<CardinalityRange>>(range: R) -> Self {
        Self {
            count: 0,
            range: range.into(),
        }
    }

    /// Handler must be invoked exactly `n` times.
    #[must_use]
    pub fn exactly(n: usize) -> Self {
        Self::new(n)
    }

    /// Handler must be invoked at least `n` times.
    #[must_use]
    pub fn at_least(n: usize) -> Self {
        Self::new(n..)
    }

    /// Handler may be invoked at most `n` times.
    #[must_use]
    pub fn at_most(n: usize) -> Self {
        Self::new(..=n)
    }

    /// Handler may be invoked any number of times, including zero.
    #[must_use]
    pub fn any() -> Self {
        Self::new(..)
    }

    /// Replace the expected range, keeping the current invocation count.
    pub fn set_range<R: Into<CardinalityRange>>(&mut self, range: R) {
        self.range = range.into();
    }

    /// Expected range of invocations.
    #[must_use]
    pub fn range(&self) -> &CardinalityRange {
        &self.range
    }

    /// Number of invocations so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Record one invocation and return the count before it.
    pub fn increment(&mut self) -> usize {
        let ret = self.count;
        self.count += 1;

        ret
    }

    /// Return `true` if the lower bound of the range is reached.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        match self.range.lower {
            Bound::Unbounded => true,
            Bound::Included(x) => x <= self.count,
            Bound::Excluded(x) => x < self.count,
        }
    }

    /// Return `true` if another invocation would still be inside the range.
    #[must_use]
    pub fn allows_invocation(&self) -> bool {
        match self.range.upper {
            Bound::Unbounded => true,
            Bound::Included(x) => self.count < x,
            Bound::Excluded(x) => self.count + 1 < x,
        }
    }

    /// Return `true` if the current count is inside the expected range.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.is_satisfied() && self.range.contains(&self.count)
    }

    /// Return `true` if the handler does not need to be invoked at all.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.range.minimum() == 0
    }

    /// Human readable description of the current invocation count.
    #[must_use]
    pub fn invoked(&self) -> String {
        format!("invoked {}", Times(self.count))
    }
}

/// Defines the range of expected invocations with a lower and a upper limit.
///
/// Similar to [`RangeBounds`] from the standard library but as struct instead
/// of trait.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CardinalityRange {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl CardinalityRange {
    /// Smallest accepted number of invocations.
    #[must_use]
    pub fn minimum(&self) -> usize {
        match self.lower {
            Bound::Unbounded => 0,
            Bound::Included(x) => x,
            Bound::Excluded(x) => x + 1,
        }
    }

    /// Largest accepted number of invocations, `None` if unbounded.
    #[must_use]
    pub fn maximum(&self) -> Option<usize> {
        match self.upper {
            Bound::Unbounded => None,
            Bound::Included(x) => Some(x),
            Bound::Excluded(x) => Some(x.saturating_sub(1)),
        }
    }

    fn contains(&self, count: &usize) -> bool {
        (self.lower, self.upper).contains(count)
    }
}

impl Default for CardinalityRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }
}

impl Display for CardinalityRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.minimum(), self.maximum()) {
            (0, None) => write!(f, "any number of times"),
            (0, Some(0)) => write!(f, "never"),
            (0, Some(max)) => write!(f, "at most {}", Times(max)),
            (min, None) => write!(f, "at least {}", Times(min)),
            (min, Some(max)) if min == max => write!(f, "exactly {}", Times(min)),
            (min, Some(max)) => write!(f, "between {min} and {max} times"),
        }
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.range.minimum() == 0 && self.range.maximum().is_none() {
            write!(f, "allowed {}", self.range)
        } else {
            write!(f, "expected {}", self.range)
        }
    }
}

/// Formats a count the way failure messages spell it.
struct Times(usize);

impl Display for Times {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            0 => write!(f, "never"),
            1 => write!(f, "once"),
            2 => write!(f, "twice"),
            n => write!(f, "{n} times"),
        }
    }
}

impl From<usize> for CardinalityRange {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for CardinalityRange {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);
