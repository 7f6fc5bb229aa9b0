//! `sds` is an immutable, lazily-shareable scene-description data model.
//! Values live in sparse named containers addressed by interned tokens and
//! locator paths, and are read through typed schema views generated by
//! `declare_container_schema!`.
//!
//! The crates layer as follows:
//! - `sds-base`: interned name tokens
//! - `sds-data`: data-source handles, retained containers, locators
//! - `sds-schema`: typed schema views and their builders

pub use sds_base as base;

pub use sds_data as data;

pub use sds_schema as schema;

pub use sds_schema::declare_container_schema;
pub use sds_schema::declare_dynamic_container_schema;
pub use sds_schema::schema_prelude;
