//! maybe: an optional value with total combinators.
//!
//! `Maybe<A>` is `Just(A)` or `Nothing`. Computations compose through `map`,
//! `chain`, `filter`, `guard` and `fold` without presence checks at each step;
//! `unsafe_get` is the one fallible way out. Sentinel-based absence enters
//! through [`from_nullable`], and [`all`] aggregates collections and tuples.
//! The `serde` feature adds `Serialize`/`Deserialize`; its tests run with
//! `cargo test --all-features`.
//!
//! ```
//! use maybe::{all, from_nullable, of, Just, Nothing};
//!
//! let name = from_nullable(Some("Alice")).filter(|n| !n.is_empty()).get_or_else("anonymous");
//! assert_eq!(name, "Alice");
//! assert_eq!(all((of(1), of("two"))), Just((1, "two")));
//! assert_eq!(all(vec![of(1), Nothing, of(3)]), Nothing);
//! ```

pub mod all;
pub mod error;
pub mod kind;
pub mod maybe;
pub mod nullable;

pub use all::{all, Sequence};
pub use error::{Error, Result};
pub use kind::{Chain, Foldable, Functor};
pub use maybe::Maybe::{Just, Nothing};
pub use maybe::{nothing, of, Maybe};
pub use nullable::{from_nullable, Nullable};
