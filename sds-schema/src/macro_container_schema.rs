/// Use to declare a typed schema view over a fixed set of named fields,
/// together with its fluent builder. This replaces the per-schema accessor
/// boilerplate that would otherwise be written by hand for every field.
///
/// Use like this:
///
/// ```ignore
/// use sds_schema::schema_prelude::*;
///
/// sds_schema::declare_container_schema!(
///     MaterialOverrideSchema,
///     MaterialOverrideSchemaBuilder,
///     schema_token: "materialOverride",
///     fields: [
///         (schema, interface_values, set_interface_values, interface_values_token,
///             "interfaceValues", MaterialNodeParameterContainerSchema),
///     ]
/// );
/// ```
///
/// The macro expects `schema_prelude` to be imported at the invocation site.
/// Each field is `(kind, getter, setter, token_fn, "tokenString"[, Type])`
/// where `kind` is one of:
/// - `schema`: the getter wraps the child as the given nested schema type
///   and the setter takes `Option<ContainerDataSourceHandle>`;
/// - `source`: untyped, getter yields `Option<DataSourceHandle>`;
/// - `value`: typed leaf, getter yields `Option<Type>` via downcast and the
///   setter takes the leaf's handle.
///
/// The `schema_token:` line is optional; schemas that only ever appear under
/// dynamic names omit it and with it the `schema_token`/`default_locator`/
/// `from_parent` accessors.
#[macro_export]
macro_rules! declare_container_schema {
    (
        $(#[$schema_meta:meta])*
        $schema:ident,
        $builder:ident,
        $( schema_token: $schema_token_str:literal, )?
        fields: [
            $( ($kind:ident, $field:ident, $setter:ident, $token_fn:ident, $token_str:literal $(, $fty:ty)?) ),* $(,)?
        ]
    ) => {
        $(#[$schema_meta])*
        #[derive(Clone)]
        pub struct $schema(Option<ContainerDataSourceHandle>);

        impl ContainerSchema for $schema {
            fn wrap(container: Option<ContainerDataSourceHandle>) -> Self {
                $schema(container)
            }

            fn container(&self) -> Option<&ContainerDataSourceHandle> {
                self.0.as_ref()
            }
        }

        impl $schema {
            $(
                /// The stable name this schema nests under inside its parent
                /// container.
                pub fn schema_token() -> Token {
                    lazy_static! {
                        static ref SCHEMA_TOKEN: Token = Token::new($schema_token_str);
                    }
                    *SCHEMA_TOKEN
                }

                /// Canonical address of this schema's field at the root of
                /// its owning container. Constant across calls and across
                /// instances.
                pub fn default_locator() -> &'static DataSourceLocator {
                    lazy_static! {
                        static ref DEFAULT_LOCATOR: DataSourceLocator =
                            DataSourceLocator::from_token($schema::schema_token());
                    }
                    &DEFAULT_LOCATOR
                }

                /// Locates this schema as a named child of `parent`. An
                /// absent parent, a missing child, or a child without the
                /// container capability all produce the absent view.
                pub fn from_parent(parent: Option<&ContainerDataSourceHandle>) -> Self {
                    let child = parent.and_then(|p| p.get($schema::schema_token()));
                    <Self as ContainerSchema>::wrap(container_from(child))
                }
            )?

            $(
                pub fn $token_fn() -> Token {
                    lazy_static! {
                        static ref TOKEN: Token = Token::new($token_str);
                    }
                    *TOKEN
                }

                $crate::__declare_container_schema_getter!($kind, $field, $token_fn $(, $fty)?);
            )*
        }

        /// Transient accumulator of the schema's optional fields. Configure
        /// via chained setters in any order, then call `build`. Building
        /// reads rather than consumes, so a builder may be reused.
        /// Single-writer, stack-local use only.
        #[derive(Default)]
        pub struct $builder {
            $( $field: Option<DataSourceHandle>, )*
        }

        impl $builder {
            pub fn new() -> Self {
                Default::default()
            }

            $(
                $crate::__declare_container_schema_setter!($kind, $setter, $field);
            )*

            /// Runs the retained-container construction algorithm over the
            /// builder's slots in declared field order. Absent slots occupy
            /// no storage in the result.
            pub fn build(&self) -> ContainerDataSourceHandle {
                RetainedContainerDataSource::new([
                    $( ($schema::$token_fn(), self.$field.clone()), )*
                ])
            }
        }
    };
}

/// Use to declare a typed schema view over a container whose entry names are
/// not fixed by the schema: every present entry resolves to the same nested
/// schema type. The counterpart of `declare_container_schema!` for
/// dictionary-shaped fields such as interface-value overrides keyed by
/// parameter name.
#[macro_export]
macro_rules! declare_dynamic_container_schema {
    (
        $(#[$schema_meta:meta])*
        $schema:ident -> $child:ty
    ) => {
        $(#[$schema_meta])*
        #[derive(Clone)]
        pub struct $schema(Option<ContainerDataSourceHandle>);

        impl ContainerSchema for $schema {
            fn wrap(container: Option<ContainerDataSourceHandle>) -> Self {
                $schema(container)
            }

            fn container(&self) -> Option<&ContainerDataSourceHandle> {
                self.0.as_ref()
            }
        }

        impl $schema {
            /// Typed lookup of an arbitrary entry. Unknown names produce the
            /// absent view.
            pub fn get(
                &self,
                name: Token,
            ) -> $child {
                <$child as ContainerSchema>::wrap(
                    <Self as ContainerSchema>::container_data_source(self, name),
                )
            }

            /// Names of the entries that are present.
            pub fn names(&self) -> Vec<Token> {
                <Self as ContainerSchema>::container(self)
                    .map(|container| container.names())
                    .unwrap_or_default()
            }

            /// Builds a retained container from `(name, entry)` pairs.
            /// Absent entries are skipped; duplicate names keep the last
            /// value.
            pub fn build_retained(
                entries: impl IntoIterator<Item = (Token, Option<ContainerDataSourceHandle>)>
            ) -> ContainerDataSourceHandle {
                RetainedContainerDataSource::new(entries.into_iter().map(|(name, value)| {
                    (name, value.map(|handle| -> DataSourceHandle { handle }))
                }))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declare_container_schema_getter {
    (schema, $field:ident, $token_fn:ident, $fty:ty) => {
        pub fn $field(&self) -> $fty {
            <$fty as ContainerSchema>::wrap(<Self as ContainerSchema>::container_data_source(
                self,
                Self::$token_fn(),
            ))
        }
    };
    (source, $field:ident, $token_fn:ident) => {
        pub fn $field(&self) -> Option<DataSourceHandle> {
            <Self as ContainerSchema>::data_source(self, Self::$token_fn())
        }
    };
    (value, $field:ident, $token_fn:ident, $fty:ty) => {
        pub fn $field(&self) -> Option<$fty> {
            <Self as ContainerSchema>::value::<$fty>(self, Self::$token_fn())
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declare_container_schema_setter {
    (schema, $setter:ident, $field:ident) => {
        /// Stores the given handle in the field's slot, overwriting any
        /// prior value. `None` marks the field absent.
        pub fn $setter(
            mut self,
            $field: Option<ContainerDataSourceHandle>,
        ) -> Self {
            self.$field = $field.map(|handle| -> DataSourceHandle { handle });
            self
        }
    };
    (source, $setter:ident, $field:ident) => {
        /// Stores the given handle in the field's slot, overwriting any
        /// prior value. `None` marks the field absent.
        pub fn $setter(
            mut self,
            $field: Option<DataSourceHandle>,
        ) -> Self {
            self.$field = $field;
            self
        }
    };
    (value, $setter:ident, $field:ident) => {
        /// Stores the given leaf handle in the field's slot, overwriting any
        /// prior value. `None` marks the field absent.
        pub fn $setter(
            mut self,
            $field: Option<DataSourceHandle>,
        ) -> Self {
            self.$field = $field;
            self
        }
    };
}
