//! Capability traits over containers that may hold a value.
//!
//! Each capability is its own trait so a consumer can ask for just one of
//! them. The rebound container is a generic associated type, which lets an
//! implementor fix it to its own shape (`Maybe<B>` for `Maybe<A>`).

/// Transform the contained value, keeping presence or absence.
pub trait Functor<A> {
    type Rebind<B>: Functor<B>;

    fn map<B, F>(self, f: F) -> Self::Rebind<B>
    where
        F: FnOnce(A) -> B;
}

/// Monadic bind: run a computation that itself yields a container and
/// flatten the result.
///
/// `B` cannot be inferred back through `Rebind<B>`, so generic callers name
/// it: `value.chain::<u32, _>(f)`.
pub trait Chain<A> {
    type Rebind<B>: Chain<B>;

    fn chain<B, F>(self, f: F) -> Self::Rebind<B>
    where
        F: FnOnce(A) -> Self::Rebind<B>;
}

/// Case analysis into a plain value.
pub trait Foldable<A> {
    /// `f` runs on a present value, `g` when there is none.
    fn fold<B, F, G>(self, f: F, g: G) -> B
    where
        F: FnOnce(A) -> B,
        G: FnOnce() -> B;
}
