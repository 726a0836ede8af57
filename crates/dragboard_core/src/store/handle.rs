//! Shared store handle for multi-collaborator wiring.
//!
//! # Responsibility
//! - Let every collaborator (form intake, drop zones, column views) reach
//!   the one process-wide store without a hidden global.
//! - Turn reentrant access during listener notification into a clear
//!   failure instead of a crash or an infinite notification loop.
//!
//! # Invariants
//! - Exactly one `ProjectStore` sits behind all clones of a handle.
//! - A listener that calls back into the store through a handle gets
//!   `StoreAccessError::ReentrantAccess`; the notification pass it was
//!   called from continues unharmed.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::ProjectStore;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type StoreResult<T> = Result<T, StoreAccessError>;

/// Failure raised when the store is re-entered mid-notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAccessError {
    ReentrantAccess,
}

impl Display for StoreAccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReentrantAccess => {
                write!(f, "store re-entered during listener notification")
            }
        }
    }
}

impl Error for StoreAccessError {}

/// Cloneable handle to the single board store.
///
/// The embedding process constructs one handle and clones it into every
/// collaborator that needs store access (dependency injection; there is no
/// global instance). All operations are synchronous and run to completion
/// on the single logical thread.
#[derive(Clone, Default)]
pub struct SharedProjectStore {
    inner: Rc<RefCell<ProjectStore>>,
}

impl SharedProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an independent copy of the current projects in board order.
    ///
    /// Fails only when called from inside a listener; the listener already
    /// holds the snapshot it was notified with.
    pub fn snapshot(&self) -> StoreResult<Vec<Project>> {
        let store = self
            .inner
            .try_borrow()
            .map_err(|_| StoreAccessError::ReentrantAccess)?;
        Ok(store.snapshot())
    }

    /// Registers an observer for future commits. No replay of prior state.
    pub fn subscribe<F>(&self, listener: F) -> StoreResult<()>
    where
        F: FnMut(Vec<Project>) + 'static,
    {
        let mut store = self
            .inner
            .try_borrow_mut()
            .map_err(|_| StoreAccessError::ReentrantAccess)?;
        store.add_listener(listener);
        Ok(())
    }

    /// Appends a new `Active` project; see [`ProjectStore::add_project`].
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> StoreResult<ProjectId> {
        let mut store = self
            .inner
            .try_borrow_mut()
            .map_err(|_| StoreAccessError::ReentrantAccess)?;
        Ok(store.add_project(title, description, people))
    }

    /// Requests a status transition; see [`ProjectStore::move_project`].
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) -> StoreResult<()> {
        let mut store = self
            .inner
            .try_borrow_mut()
            .map_err(|_| StoreAccessError::ReentrantAccess)?;
        store.move_project(id, new_status);
        Ok(())
    }

    /// Runs one synchronous operation with exclusive store access.
    ///
    /// Used by collaborators that drive multi-step interactions, such as a
    /// drop zone consuming a transfer.
    pub fn with_mut<R>(&self, operation: impl FnOnce(&mut ProjectStore) -> R) -> StoreResult<R> {
        let mut store = self
            .inner
            .try_borrow_mut()
            .map_err(|_| StoreAccessError::ReentrantAccess)?;
        Ok(operation(&mut store))
    }
}
