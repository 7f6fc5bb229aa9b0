//! The polymorphic data-source handle and its container capability.
//!
//! A data source is an opaque immutable value or subtree, shared by
//! reference. Capabilities are discovered by query: asking a source for a
//! capability it does not have is a normal absent result, never an error.
//! This mirrors how optional fields behave everywhere else in the model,
//! so a miss at any level of a nested lookup chain simply propagates
//! `None` outward with no special-case guards in callers.

use downcast_rs::DowncastSync;
use sds_base::Token;
use std::sync::Arc;

/// Shared handle to an immutable data source. Created once, shared by any
/// number of holders, dropped when the last holder releases it.
pub type DataSourceHandle = Arc<dyn DataSource>;

/// Shared handle to a data source known to have the container capability.
pub type ContainerDataSourceHandle = Arc<dyn ContainerDataSource>;

/// Base trait for all data sources. Implementations must be immutable after
/// construction; every operation on this trait and its subtraits is a pure,
/// synchronous, in-memory query.
///
/// `DowncastSync` allows callers that know a concrete source type (e.g. a
/// retained leaf value) to recover it from an untyped handle.
pub trait DataSource: DowncastSync {
    /// Capability query: a container returns itself, everything else reports
    /// absent. The equivalent of a checked cast.
    fn as_container(self: Arc<Self>) -> Option<ContainerDataSourceHandle> {
        None
    }
}

downcast_rs::impl_downcast!(sync DataSource);

/// The container capability: named-child lookup plus enumeration of the
/// names that are currently present.
pub trait ContainerDataSource: DataSource {
    /// Returns the child bound to `name`, or `None` if no such child exists.
    /// An unknown name is not an error; it means "this optional field was
    /// not set". Repeated calls with the same name return semantically
    /// identical handles.
    fn get(
        &self,
        name: Token,
    ) -> Option<DataSourceHandle>;

    /// The complete set of currently-present child names.
    fn names(&self) -> Vec<Token>;
}

/// Applies the container capability query through an optional handle.
/// An absent input and a non-container value both produce `None`.
pub fn container_from(handle: Option<DataSourceHandle>) -> Option<ContainerDataSourceHandle> {
    handle.and_then(|h| h.as_container())
}
