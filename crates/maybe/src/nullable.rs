//! Sentinel-based absence at API boundaries.
//!
//! Some data sources tell "never set" apart from "explicitly null" (a JSON
//! field that is missing vs one that is `null`). [`Nullable`] keeps both
//! sentinels; [`from_nullable`] collapses either of them to `Nothing`.

use tracing::trace;

use crate::maybe::Maybe;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nullable<A> {
    /// Never set.
    Undefined,
    /// Explicitly set to null.
    Null,
    Value(A),
}

impl<A> Nullable<A> {
    #[inline]
    pub const fn is_sentinel(&self) -> bool {
        !matches!(self, Nullable::Value(_))
    }
}

// No `A: Default` bound, unlike the derive.
impl<A> Default for Nullable<A> {
    fn default() -> Self {
        Nullable::Undefined
    }
}

/// `None` is the explicit null.
impl<A> From<Option<A>> for Nullable<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        }
    }
}

impl<A> From<Nullable<A>> for Maybe<A> {
    fn from(value: Nullable<A>) -> Self {
        match value {
            Nullable::Value(v) => Maybe::Just(v),
            Nullable::Null | Nullable::Undefined => Maybe::Nothing,
        }
    }
}

/// `Nothing` for either sentinel, `Just` otherwise.
pub fn from_nullable<A, N>(value: N) -> Maybe<A>
where
    N: Into<Nullable<A>>,
{
    let value = value.into();
    match &value {
        Nullable::Undefined => trace!(sentinel = "undefined", "from_nullable: absent"),
        Nullable::Null => trace!(sentinel = "null", "from_nullable: absent"),
        Nullable::Value(_) => {}
    }
    Maybe::from(value)
}

// Deserializes like `Option<A>`, so `null` becomes `Null`. A field marked
// `#[serde(default)]` that is missing stays `Undefined`.
#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Nullable<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Nullable::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{of, Just, Nothing};

    #[test]
    fn both_sentinels_are_nothing() {
        assert_eq!(from_nullable(Nullable::<i32>::Null), Nothing);
        assert_eq!(from_nullable(Nullable::<i32>::Undefined), Nothing);
        assert!(Nullable::<i32>::Null.is_sentinel());
        assert!(Nullable::<i32>::default().is_sentinel());
    }

    #[test]
    fn values_are_just() {
        assert_eq!(from_nullable(Nullable::Value(0)), Just(0));
        assert_eq!(from_nullable(Some("")), of(""));
        assert!(!Nullable::Value(false).is_sentinel());
    }

    #[test]
    fn option_none_is_null() {
        let m: Maybe<u8> = from_nullable(None);
        assert_eq!(m, Nothing);
        assert_eq!(Nullable::<u8>::from(None), Nullable::Null);
    }

    #[test]
    fn default_is_undefined_for_any_payload() {
        struct Opaque;
        assert!(matches!(Nullable::<Opaque>::default(), Nullable::Undefined));
        assert!(from_nullable(Nullable::<Opaque>::default()).is_nothing());
    }

    #[test]
    fn falsy_values_are_still_present() {
        assert_eq!(from_nullable(Some(0u64)), Just(0));
        assert_eq!(from_nullable(Some(false)), Just(false));
        assert_eq!(from_nullable(Some(String::new())), Just(String::new()));
    }
}
