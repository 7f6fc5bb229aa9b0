//! Lowest level crate of `sds`. Provides the interned name tokens that every
//! container in the data model is keyed by.

mod token;
pub use token::Token;
