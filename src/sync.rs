//! Thread-shareable handle around a [`FamilyGraph`].
//!
//! The graph itself never locks. This wrapper is the external
//! synchronization for callers that edit from more than one thread:
//! many concurrent readers, one writer at a time.

use std::sync::Arc;
use parking_lot::RwLock;

use crate::graph::FamilyGraph;

/// Cloneable, lock-protected pedigree.
#[derive(Debug, Clone, Default)]
pub struct SharedFamilyGraph {
    inner: Arc<RwLock<FamilyGraph>>,
}

impl SharedFamilyGraph {
    pub fn new(graph: FamilyGraph) -> Self {
        Self { inner: Arc::new(RwLock::new(graph)) }
    }

    /// Run a query under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&FamilyGraph) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run an edit under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut FamilyGraph) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Take the graph back once this is the last handle.
    pub fn into_inner(self) -> Option<FamilyGraph> {
        Arc::try_unwrap(self.inner).ok().map(RwLock::into_inner)
    }
}

impl From<FamilyGraph> for SharedFamilyGraph {
    fn from(graph: FamilyGraph) -> Self {
        Self::new(graph)
    }
}
