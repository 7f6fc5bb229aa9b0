//! Builds a material override payload, nests it inside a prim-level
//! container, and reads it back through the typed schema views.

use sds::schema::{
    MaterialNodeParameterContainerSchema, MaterialNodeParameterSchemaBuilder,
    MaterialOverrideSchema, MaterialOverrideSchemaBuilder,
};
use sds::schema_prelude::*;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // One overridden parameter: diffuseGain = 0.8 in lin_srgb
    let diffuse_gain = MaterialNodeParameterSchemaBuilder::new()
        .set_value(Some(RetainedValueDataSource::new(0.8f32)))
        .set_color_space(Some(RetainedValueDataSource::new(Token::new("lin_srgb"))))
        .build();

    let interface_values = MaterialNodeParameterContainerSchema::build_retained([(
        Token::new("diffuseGain"),
        Some(diffuse_gain),
    )]);

    let material_override = MaterialOverrideSchemaBuilder::new()
        .set_interface_values(Some(interface_values))
        .build();

    // The prim-level container holds the override under its schema token,
    // exactly where from_parent will look for it
    let prim: DataSourceHandle = material_override;
    let prim_container = RetainedContainerDataSource::new([(
        MaterialOverrideSchema::schema_token(),
        Some(prim),
    )]);

    log::info!(
        "override payload lives at locator '{}'",
        MaterialOverrideSchema::default_locator()
    );

    let schema = MaterialOverrideSchema::from_parent(Some(&prim_container));
    let overrides = schema.interface_values();
    for name in overrides.names() {
        let parameter = overrides.get(name);
        let value = typed_value::<f32>(parameter.value().as_ref());
        log::info!(
            "parameter '{}': value {:?}, color space {:?}",
            name,
            value,
            parameter.color_space()
        );
    }

    // A prim with no override authored reports absent at every level
    let absent = MaterialOverrideSchema::from_parent(None);
    assert!(!absent.is_defined());
    assert!(absent.interface_values().names().is_empty());
    log::info!("absent override propagated cleanly");
}
