use crate::schema_prelude::*;

crate::declare_container_schema!(
    /// One overridden material parameter: the value itself plus the color
    /// space it is authored in.
    MaterialNodeParameterSchema,
    MaterialNodeParameterSchemaBuilder,
    fields: [
        (source, value, set_value, value_token, "value"),
        (value, color_space, set_color_space, color_space_token, "colorSpace", Token),
    ]
);

crate::declare_dynamic_container_schema!(
    /// Parameter overrides keyed by material interface parameter name. Entry
    /// names are authored data, not fixed by the schema.
    MaterialNodeParameterContainerSchema -> MaterialNodeParameterSchema
);
