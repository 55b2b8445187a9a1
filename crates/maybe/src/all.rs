//! All-or-nothing aggregation of `Maybe` collections.
//!
//! [`all`] turns a collection of `Maybe<_>` into `Just` of the unwrapped
//! collection, preserving order and arity, when every element is present, and
//! into `Nothing` otherwise. Which element was absent is not reported.

use tracing::trace;

use crate::maybe::Maybe::{self, Just, Nothing};

/// A fixed-arity collection of `Maybe` values that can be turned inside out.
pub trait Sequence {
    type Output;

    fn sequence(self) -> Maybe<Self::Output>;
}

/// `Just` of every unwrapped element, in order, or `Nothing` if any is absent.
pub fn all<S: Sequence>(maybes: S) -> Maybe<S::Output> {
    maybes.sequence()
}

/// Collects until the first `Nothing`. An empty iterator gives `Just` of an
/// empty collection.
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        let mut absent = None;
        let values: V = iter
            .into_iter()
            .enumerate()
            .map_while(|(index, item)| match item {
                Just(v) => Some(v),
                Nothing => {
                    absent = Some(index);
                    None
                }
            })
            .collect();

        match absent {
            Some(index) => {
                trace!(index, "all: element is absent");
                Nothing
            }
            None => Just(values),
        }
    }
}

impl<A> Sequence for Vec<Maybe<A>> {
    type Output = Vec<A>;

    fn sequence(self) -> Maybe<Vec<A>> {
        self.into_iter().collect()
    }
}

impl<A: Clone> Sequence for &[Maybe<A>] {
    type Output = Vec<A>;

    fn sequence(self) -> Maybe<Vec<A>> {
        self.iter().cloned().collect()
    }
}

impl<A, const N: usize> Sequence for [Maybe<A>; N] {
    type Output = [A; N];

    fn sequence(self) -> Maybe<[A; N]> {
        self.into_iter().collect::<Maybe<Vec<A>>>().chain(|values| {
            let values: Option<[A; N]> = values.try_into().ok();
            Maybe::from(values)
        })
    }
}

impl Sequence for () {
    type Output = ();

    fn sequence(self) -> Maybe<()> {
        Just(())
    }
}

macro_rules! impl_sequence_for_tuple {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> Sequence for ($(Maybe<$ty>,)+) {
            type Output = ($($ty,)+);

            fn sequence(self) -> Maybe<Self::Output> {
                match self {
                    ($(Just($var),)+) => Just(($($var,)+)),
                    _ => {
                        trace!("all: tuple element is absent");
                        Nothing
                    }
                }
            }
        }
    };
}

impl_sequence_for_tuple!(A a);
impl_sequence_for_tuple!(A a, B b);
impl_sequence_for_tuple!(A a, B b, C c);
impl_sequence_for_tuple!(A a, B b, C c, D d);
impl_sequence_for_tuple!(A a, B b, C c, D d, E e);
