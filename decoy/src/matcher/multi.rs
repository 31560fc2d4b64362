use std::fmt::{Formatter, Result as FmtResult};
use std::mem::take;

use crate::Value;

use super::{Matcher, ParametersMatcher};

/// Combines a tuple of [`Matcher`]s, one per argument, into a
/// [`ParametersMatcher`]. The call must have exactly as many arguments as
/// there are matchers.
pub fn multi<T>(value: T) -> Multi<T> {
    Multi(value)
}

#[must_use]
#[derive(Debug)]
pub struct Multi<T>(T);

macro_rules! impl_multi {
    ($( $matcher_name:ident: $matcher_type:ident ),+) => {
        impl<$( $matcher_type ),+> ParametersMatcher for Multi<($( $matcher_type, )+)>
        where
            $(
                $matcher_type: Matcher,
            )+
        {
            fn matches(&self, args: &[Value]) -> bool {
                let Self(($( $matcher_name, )+)) = self;
                let mut args = args.iter();

                $(
                    if !args.next().is_some_and(|arg| $matcher_name.matches(arg)) {
                        return false;
                    }
                )+

                args.next().is_none()
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                let mut first = true;
                let Self(($( $matcher_name, )+)) = self;

                $(
                    if !take(&mut first) {
                        write!(f, ", ")?;
                    }

                    Matcher::fmt($matcher_name, f)?;
                )+

                Ok(())
            }
        }
    };
}

impl_multi!(m0: M0);
impl_multi!(m0: M0, m1: M1);
impl_multi!(m0: M0, m1: M1, m2: M2);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6, m7: M7);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6, m7: M7, m8: M8);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6, m7: M7, m8: M8, m9: M9);

/// Same as [`multi`] but for a list of matchers that is only known at runtime.
pub fn params(matchers: Vec<Box<dyn Matcher + Send + Sync>>) -> Params {
    Params(matchers)
}

#[must_use]
pub struct Params(pub Vec<Box<dyn Matcher + Send + Sync>>);

impl ParametersMatcher for Params {
    fn matches(&self, args: &[Value]) -> bool {
        self.0.len() == args.len() && self.0.iter().zip(args).all(|(m, arg)| m.matches(arg))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, matcher) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            Matcher::fmt(matcher, f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Params(")?;
        ParametersMatcher::fmt(self, f)?;
        write!(f, ")")
    }
}
