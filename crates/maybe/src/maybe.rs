//! The `Maybe<A>` sum type and its combinators.
//!
//! Every operation is total except [`Maybe::unsafe_get`], which reports
//! [`Error::EmptyValueAccess`] on `Nothing`. Callbacks passed to a `Nothing`
//! are never invoked.

use crate::error::{Error, Result};
use crate::kind::{Chain, Foldable, Functor};

use self::Maybe::{Just, Nothing};

/// A value of type `A` that is either present (`Just`) or absent (`Nothing`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Maybe<A> {
    Just(A),
    Nothing,
}

/// Wrap a value that is known to be present.
#[inline]
pub fn of<A>(value: A) -> Maybe<A> {
    Just(value)
}

/// The absent value for any `A`.
#[inline]
pub const fn nothing<A>() -> Maybe<A> {
    Nothing
}

impl<A> Maybe<A> {
    #[inline]
    pub fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Just(v) => Just(f(v)),
            Nothing => Nothing,
        }
    }

    /// Monadic bind. `f` decides presence of the result.
    #[inline]
    pub fn chain<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Just(v) => f(v),
            Nothing => Nothing,
        }
    }

    /// Keep the value only if `p` holds for it.
    #[inline]
    pub fn filter<P>(self, p: P) -> Maybe<A>
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Just(v) => {
                if p(&v) {
                    Just(v)
                } else {
                    Nothing
                }
            }
            Nothing => Nothing,
        }
    }

    /// Filter driven by a type test such as `|s| matches!(s, Shape::Circle(_))`.
    ///
    /// Rust predicates cannot narrow the static type, so the result stays
    /// `Maybe<A>` and holds the same value. Use [`Maybe::narrow`] to also
    /// extract the narrowed payload.
    #[inline]
    pub fn guard<P>(self, p: P) -> Maybe<A>
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter(p)
    }

    /// Keep the value only if `p` projects it to a narrower type, e.g.
    /// `|shape| match shape { Shape::Circle(r) => Some(r), _ => None }`.
    #[inline]
    pub fn narrow<B, P>(self, p: P) -> Maybe<B>
    where
        P: FnOnce(A) -> Option<B>,
    {
        match self {
            Just(v) => Maybe::from(p(v)),
            Nothing => Nothing,
        }
    }

    #[inline]
    pub fn fold<B, F, G>(self, f: F, g: G) -> B
    where
        F: FnOnce(A) -> B,
        G: FnOnce() -> B,
    {
        match self {
            Just(v) => f(v),
            Nothing => g(),
        }
    }

    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Just(v) => v,
            Nothing => default,
        }
    }

    /// `self` if present, otherwise `alt`.
    #[inline]
    pub fn or_else(self, alt: Maybe<A>) -> Maybe<A> {
        match self {
            Just(v) => Just(v),
            Nothing => alt,
        }
    }

    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Unchecked accessor for callers that already established presence.
    ///
    /// `get_or_else` and `fold` are the checked ways out. An error here means
    /// the caller's presence reasoning was wrong.
    pub fn unsafe_get(self) -> Result<A> {
        match self {
            Just(v) => Ok(v),
            Nothing => {
                tracing::debug!("unsafe_get called on Nothing");
                Err(Error::EmptyValueAccess)
            }
        }
    }

    /// Borrow the contained value, so combinators can run without consuming
    /// `self`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Just(v) => Just(v),
            Nothing => Nothing,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(v) => Just(v),
            None => Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        match value {
            Just(v) => Some(v),
            Nothing => None,
        }
    }
}

impl<A> Functor<A> for Maybe<A> {
    type Rebind<B> = Maybe<B>;

    #[inline]
    fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Maybe::map(self, f)
    }
}

impl<A> Chain<A> for Maybe<A> {
    type Rebind<B> = Maybe<B>;

    #[inline]
    fn chain<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Maybe::chain(self, f)
    }
}

impl<A> Foldable<A> for Maybe<A> {
    #[inline]
    fn fold<B, F, G>(self, f: F, g: G) -> B
    where
        F: FnOnce(A) -> B,
        G: FnOnce() -> B,
    {
        Maybe::fold(self, f, g)
    }
}

// Same shape as `Option<A>`: the bare value, or none.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::Maybe;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<A: Serialize> Serialize for Maybe<A> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Maybe::Just(v) => serializer.serialize_some(v),
                Maybe::Nothing => serializer.serialize_none(),
            }
        }
    }

    impl<'de, A: Deserialize<'de>> Deserialize<'de> for Maybe<A> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<A>::deserialize(deserializer).map(Maybe::from)
        }
    }
}
