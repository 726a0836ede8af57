//! Observable project store.
//!
//! # Responsibility
//! - Keep the ordered sequence of all projects on the board.
//! - Fan committed mutations out to registered snapshot observers.
//!
//! # Invariants
//! - `add_project` appends; order is creation order, never re-sorted.
//! - `move_project` commits only real transitions: an unknown id or a
//!   redundant status is ignored without notifying anyone.
//! - Each listener receives its own independent snapshot copy.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::debug;

/// Observer callback invoked with a full board snapshot after each commit.
pub type SnapshotListener = Box<dyn FnMut(Vec<Project>)>;

/// Single-threaded container of all board projects.
///
/// The embedding process creates exactly one store and hands it to
/// collaborators, either directly or through
/// [`SharedProjectStore`](crate::store::handle::SharedProjectStore).
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<SnapshotListener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an independent copy of the current projects in board order.
    ///
    /// Mutating the returned vector has no effect on the store.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Registers an observer for future commits.
    ///
    /// The listener is not replayed against existing state: it first fires
    /// on the next committed mutation. Listeners cannot be removed; they
    /// live as long as the store.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<Project>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new `Active` project and notifies all listeners.
    ///
    /// # Contract
    /// - Performs no field validation; intake has already accepted the
    ///   values before this call.
    /// - Always succeeds and returns the new project's stable id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        debug!(
            "event=project_added module=store id={id} total={}",
            self.projects.len()
        );
        self.notify_listeners();
        id
    }

    /// Transitions a project to `new_status` and notifies all listeners.
    ///
    /// # Contract
    /// - Unknown id: silent no-op, no notification. A stale or forged
    ///   identifier cannot corrupt state.
    /// - Same status: silent no-op, no notification (idempotent).
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!("event=move_ignored module=store reason=unknown_id id={id}");
            return;
        };
        if project.status == new_status {
            debug!("event=move_ignored module=store reason=same_status id={id}");
            return;
        }
        project.status = new_status;
        debug!(
            "event=project_moved module=store id={id} status={}",
            new_status.as_str()
        );
        self.notify_listeners();
    }

    /// Invokes listeners in registration order, each with its own snapshot.
    fn notify_listeners(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(self.projects.clone());
        }
    }
}
