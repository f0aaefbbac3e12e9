//! The project store: single source of truth for the board.

use crate::project::{
    domain::{NewProject, Project, ProjectId, ProjectStatus},
    ports::ProjectListener,
};
use mockable::{Clock, DefaultClock};
use std::fmt;
use tracing::debug;

/// Result of a status transition request.
///
/// Transitions never fail. The outcome only reports whether anything
/// changed, and only [`TransitionOutcome::Moved`] is followed by a broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The project changed status and listeners were notified.
    Moved {
        /// Status before the transition.
        from: ProjectStatus,
        /// Status after the transition.
        to: ProjectStatus,
    },
    /// The project already had the requested status.
    Unchanged,
    /// No project has the requested identifier.
    NotFound,
}

impl TransitionOutcome {
    /// Returns whether the transition changed the store.
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Owns the ordered project collection and the registered listeners.
///
/// Every mutation ends by handing each listener, in registration order, its
/// own copy of the whole collection. Delivery is synchronous. A listener that
/// panics unwinds out of the mutating call and the listeners after it are not
/// notified.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Box<dyn ProjectListener>>,
    clock: Box<dyn Clock>,
}

impl ProjectStore {
    /// Creates an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }

    /// Creates an empty store stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Registers a listener behind all previously registered ones.
    ///
    /// Listeners are not de-duplicated and cannot be removed.
    pub fn add_listener(&mut self, listener: impl ProjectListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new active project and notifies listeners.
    ///
    /// The store trusts its input; form input must already have passed
    /// validation.
    pub fn add_project(&mut self, data: NewProject) -> ProjectId {
        let project = Project::new(data, &*self.clock);
        let id = project.id();
        self.projects.push(project);
        debug!(project_id = %id, total = self.projects.len(), "project added");
        self.broadcast();
        id
    }

    /// Moves the project identified by `id` to `status`.
    ///
    /// Unknown identifiers and transitions to the current status are ignored
    /// silently and do not notify listeners.
    pub fn move_project(&mut self, id: ProjectId, status: ProjectStatus) -> TransitionOutcome {
        let Some(project) = self.projects.iter_mut().find(|project| project.id() == id) else {
            return TransitionOutcome::NotFound;
        };

        let from = project.status();
        if !project.transition_to(status) {
            return TransitionOutcome::Unchanged;
        }

        debug!(project_id = %id, %from, to = %status, "project moved");
        self.broadcast();
        TransitionOutcome::Moved { from, to: status }
    }

    /// Returns every project in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns an owned copy of every project in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Finds a project by identifier.
    #[must_use]
    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether the store holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn broadcast(&mut self) {
        for listener in &mut self.listeners {
            listener.on_projects_changed(self.projects.clone());
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
