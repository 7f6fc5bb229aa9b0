use crate::schema_prelude::*;
use crate::MaterialNodeParameterContainerSchema;

crate::declare_container_schema!(
    /// Material overrides authored on a prim. The `interfaceValues` field
    /// carries replacement values for named material interface parameters.
    MaterialOverrideSchema,
    MaterialOverrideSchemaBuilder,
    schema_token: "materialOverride",
    fields: [
        (schema, interface_values, set_interface_values, interface_values_token,
            "interfaceValues", MaterialNodeParameterContainerSchema),
    ]
);
