//! Typed schema views over the container model in `sds-data`.
//!
//! A schema view wraps a container handle (or wraps nothing, for an absent
//! field) and exposes strongly-typed accessors for the field names it knows
//! about. The per-schema boilerplate is emitted by
//! [`declare_container_schema!`](crate::declare_container_schema) and
//! [`declare_dynamic_container_schema!`](crate::declare_dynamic_container_schema)
//! rather than written by hand; the concrete schemas in this crate are
//! single invocations of those macros.

mod schema;
pub use schema::ContainerSchema;

mod macro_container_schema;

mod material_node_parameter;
pub use material_node_parameter::MaterialNodeParameterContainerSchema;
pub use material_node_parameter::MaterialNodeParameterSchema;
pub use material_node_parameter::MaterialNodeParameterSchemaBuilder;

mod material_override;
pub use material_override::MaterialOverrideSchema;
pub use material_override::MaterialOverrideSchemaBuilder;

pub mod schema_prelude {
    pub use lazy_static::lazy_static;

    pub use sds_base::Token;

    pub use sds_data::{
        container_from, typed_value, ContainerDataSource, ContainerDataSourceHandle, DataSource,
        DataSourceHandle, DataSourceLocator, RetainedContainerBuilder, RetainedContainerDataSource,
        RetainedValueDataSource,
    };

    pub use crate::ContainerSchema;
}
