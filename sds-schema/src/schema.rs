use sds_base::Token;
use sds_data::{
    typed_value, ContainerDataSource, ContainerDataSourceHandle, DataSource, DataSourceHandle,
};

/// A typed read-only facade over a container handle.
///
/// A schema view has exactly two logical states with no transitions: "bound"
/// (wrapping a container) and "absent" (wrapping nothing). Absent is the
/// natural terminal state reached whenever any lookup in an accessor chain
/// misses, so a deeply nested accessor on a wholly-absent root reports
/// absent at every level without any special-case guards.
pub trait ContainerSchema: Sized {
    /// Wraps a container handle directly. `None` produces the absent view.
    fn wrap(container: Option<ContainerDataSourceHandle>) -> Self;

    /// The wrapped container, if this view is bound.
    fn container(&self) -> Option<&ContainerDataSourceHandle>;

    fn is_defined(&self) -> bool {
        self.container().is_some()
    }

    /// Untyped field lookup. Absent view and unknown name both report
    /// absent.
    fn data_source(
        &self,
        name: Token,
    ) -> Option<DataSourceHandle> {
        self.container().and_then(|container| container.get(name))
    }

    /// Field lookup plus container capability query. A present value that
    /// is not a container reports absent, not an error.
    fn container_data_source(
        &self,
        name: Token,
    ) -> Option<ContainerDataSourceHandle> {
        self.data_source(name).and_then(|child| child.as_container())
    }

    /// Field lookup plus typed-leaf downcast. A present value of a
    /// different type reports absent.
    fn value<T: Clone + Send + Sync + 'static>(
        &self,
        name: Token,
    ) -> Option<T> {
        typed_value::<T>(self.data_source(name).as_ref())
    }
}
