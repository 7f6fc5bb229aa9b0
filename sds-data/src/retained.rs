//! Retained (fixed-at-construction) data sources.
//!
//! Schema payloads routinely have mostly-absent optional fields. The
//! retained container therefore stores only the fields that were actually
//! supplied: an absent value never occupies an entry, so storage and
//! traversal cost scale with the instance's actual content rather than the
//! full schema's field count.

use crate::{ContainerDataSource, ContainerDataSourceHandle, DataSource, DataSourceHandle};
use fnv::FnvHashMap;
use sds_base::Token;
use std::sync::Arc;

/// A concrete, immutable, in-memory container. The mapping from name to
/// child handle is established exactly once at construction and never
/// changes afterward; `get` and `names` reflect exactly that mapping with
/// no further allocation or mutation.
pub struct RetainedContainerDataSource {
    values: FnvHashMap<Token, DataSourceHandle>,
    // Names in first-insertion order so enumeration is deterministic
    names: Vec<Token>,
}

impl RetainedContainerDataSource {
    /// Builds a retained container from `(name, value)` pairs.
    ///
    /// Pairs with an absent value are skipped entirely; an absent value is
    /// equivalent to the field never having been supplied, not a
    /// present-but-empty entry. If the same name appears more than once the
    /// later pair overrides the earlier one.
    #[profiling::function]
    pub fn new(
        pairs: impl IntoIterator<Item = (Token, Option<DataSourceHandle>)>
    ) -> ContainerDataSourceHandle {
        let mut values = FnvHashMap::default();
        let mut names = Vec::new();

        for (name, value) in pairs {
            if let Some(value) = value {
                // Last write wins for duplicate names
                if values.insert(name, value).is_some() {
                    log::debug!("retained container: duplicate name {} overwritten", name);
                } else {
                    names.push(name);
                }
            }
        }

        Arc::new(RetainedContainerDataSource { values, names })
    }

    /// A retained container with no children.
    pub fn empty() -> ContainerDataSourceHandle {
        Self::new(std::iter::empty())
    }
}

impl DataSource for RetainedContainerDataSource {
    fn as_container(self: Arc<Self>) -> Option<ContainerDataSourceHandle> {
        Some(self)
    }
}

impl ContainerDataSource for RetainedContainerDataSource {
    fn get(
        &self,
        name: Token,
    ) -> Option<DataSourceHandle> {
        self.values.get(&name).cloned()
    }

    fn names(&self) -> Vec<Token> {
        self.names.clone()
    }
}

/// A retained leaf holding a single typed value. The typed value is
/// recovered from an untyped handle by downcast, so consumers that know a
/// field's type read it without the container model knowing anything about
/// value semantics.
pub struct RetainedValueDataSource<T: Clone + Send + Sync + 'static> {
    value: T,
}

impl<T: Clone + Send + Sync + 'static> RetainedValueDataSource<T> {
    pub fn new(value: T) -> DataSourceHandle {
        Arc::new(RetainedValueDataSource { value })
    }

    pub fn value(&self) -> T {
        self.value.clone()
    }
}

impl<T: Clone + Send + Sync + 'static> DataSource for RetainedValueDataSource<T> {}

/// Reads a typed leaf value out of an optional untyped handle. Absent
/// handles and type mismatches both report absent.
pub fn typed_value<T: Clone + Send + Sync + 'static>(
    handle: Option<&DataSourceHandle>
) -> Option<T> {
    handle
        .and_then(|h| h.downcast_ref::<RetainedValueDataSource<T>>())
        .map(|source| source.value())
}

/// Accumulates optional named fields and produces retained containers.
///
/// Intended for single-writer, short-lived, stack-local use: configure via
/// chained `with` calls (or `insert`), then call `build` as many times as
/// needed. Building reads the accumulated state without consuming it.
#[derive(Default)]
pub struct RetainedContainerBuilder {
    slots: Vec<(Token, Option<DataSourceHandle>)>,
}

impl RetainedContainerBuilder {
    /// Creates a builder with no fields set.
    pub fn new() -> Self {
        RetainedContainerBuilder { slots: Vec::new() }
    }

    /// Builder-style API that sets one field slot
    pub fn with(
        mut self,
        name: Token,
        value: Option<DataSourceHandle>,
    ) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets one field slot, overwriting any prior value for that name.
    /// Setting `None` clears the slot back to absent.
    pub fn insert(
        &mut self,
        name: Token,
        value: Option<DataSourceHandle>,
    ) {
        if let Some(slot) = self.slots.iter_mut().find(|(slot_name, _)| *slot_name == name) {
            slot.1 = value;
        } else {
            self.slots.push((name, value));
        }
    }

    /// Runs the retained-container construction algorithm over the slots in
    /// the order they were first set. Absent slots are omitted from the
    /// result entirely.
    pub fn build(&self) -> ContainerDataSourceHandle {
        RetainedContainerDataSource::new(self.slots.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: u32) -> DataSourceHandle {
        RetainedValueDataSource::new(value)
    }

    #[test]
    fn test_round_trip_single_pair() {
        let name = Token::new("interfaceValues");
        let value = leaf(7);
        let container = RetainedContainerDataSource::new([(name, Some(value.clone()))]);

        let fetched = container.get(name).unwrap();
        assert!(Arc::ptr_eq(&fetched, &value));
        assert!(container.get(Token::new("somethingElse")).is_none());
    }

    #[test]
    fn test_absent_values_occupy_no_storage() {
        let present = Token::new("present");
        let absent = Token::new("absent");
        let container = RetainedContainerDataSource::new([
            (absent, None),
            (present, Some(leaf(1))),
        ]);

        assert_eq!(container.names(), vec![present]);
        assert!(container.get(absent).is_none());
    }

    #[test]
    fn test_all_absent_builds_empty_container() {
        let container = RetainedContainerDataSource::new([
            (Token::new("a"), None),
            (Token::new("b"), None),
        ]);
        assert!(container.names().is_empty());
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let name = Token::new("value");
        let first = leaf(1);
        let second = leaf(2);
        let container = RetainedContainerDataSource::new([
            (name, Some(first)),
            (name, Some(second.clone())),
        ]);

        assert!(Arc::ptr_eq(&container.get(name).unwrap(), &second));
        assert_eq!(container.names(), vec![name]);
    }

    #[test]
    fn test_typed_value_round_trip() {
        let handle = RetainedValueDataSource::new(2.5f32);
        assert_eq!(typed_value::<f32>(Some(&handle)), Some(2.5));
        // Wrong type and absent handle both report absent
        assert_eq!(typed_value::<u32>(Some(&handle)), None);
        assert_eq!(typed_value::<f32>(None), None);
    }

    #[test]
    fn test_builder_overwrites_are_idempotent() {
        let name = Token::new("value");
        let second = leaf(2);

        let mut builder = RetainedContainerBuilder::new();
        builder.insert(name, Some(leaf(1)));
        builder.insert(name, Some(second.clone()));

        let container = builder.build();
        assert!(Arc::ptr_eq(&container.get(name).unwrap(), &second));
        assert_eq!(container.names(), vec![name]);
    }

    #[test]
    fn test_builder_clearing_a_slot_removes_the_field() {
        let name = Token::new("value");
        let builder = RetainedContainerBuilder::new()
            .with(name, Some(leaf(1)))
            .with(name, None);

        assert!(builder.build().names().is_empty());
    }

    #[test]
    fn test_builder_is_reusable() {
        let name = Token::new("value");
        let mut builder = RetainedContainerBuilder::new();
        builder.insert(name, Some(leaf(1)));

        let first = builder.build();
        let second = builder.build();

        // Distinct containers with the same contents
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.names(), second.names());
        assert!(Arc::ptr_eq(
            &first.get(name).unwrap(),
            &second.get(name).unwrap()
        ));
    }

    #[test]
    fn test_container_capability_query() {
        let container = RetainedContainerDataSource::empty();
        let untyped: DataSourceHandle = container;
        assert!(untyped.as_container().is_some());
    }
}
