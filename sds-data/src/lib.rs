//! The core container model of `sds`: shared immutable data-source handles,
//! the named-child container capability, the retained (fixed-at-construction)
//! container implementation, and locator paths for addressing nested fields
//! without holding a live reference to them.
//!
//! Everything in this crate is immutable after construction and shared
//! through atomically reference-counted handles, so values may be read from
//! any number of threads without locking. The only mutable surface is
//! [`RetainedContainerBuilder`], which is a short-lived, single-writer,
//! stack-local helper.

pub use data_source::*;
pub use locator::*;
pub use retained::*;

mod data_source;
mod locator;
mod retained;
