use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `unsafe_get` was called on `Nothing`.
    #[error("a Nothing holds no value")]
    EmptyValueAccess,
}

pub type Result<T> = core::result::Result<T, Error>;
