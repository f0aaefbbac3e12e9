//! Listener port notified after every store mutation.

use crate::project::domain::Project;

/// Observer of the project collection.
///
/// The store invokes every registered listener synchronously, in
/// registration order, after each mutation that changes state. Each call
/// receives its own copy of the full collection, never a diff.
///
/// Any `FnMut(Vec<Project>)` closure is a listener.
pub trait ProjectListener {
    /// Receives a fresh snapshot of every project in insertion order.
    fn on_projects_changed(&mut self, projects: Vec<Project>);
}

impl<F> ProjectListener for F
where
    F: FnMut(Vec<Project>),
{
    fn on_projects_changed(&mut self, projects: Vec<Project>) {
        self(projects);
    }
}
