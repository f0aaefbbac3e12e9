//! Per-status project column; a store listener and the drop target of the
//! transition protocol.

use super::{ItemView, View, ViewError};
use crate::project::{
    domain::{Project, ProjectId, ProjectStatus},
    services::ProjectStore,
    transfer::{DataTransfer, DropDecision, DropOutcome, DropRejection, DropTarget},
};
use minijinja::{Environment, context};
use std::{cell::RefCell, rc::Rc};

const COLUMN_TEMPLATE: &str = "{{ title }}{% for item in items %}\n\n{{ item }}{% endfor %}";

#[derive(Debug, Default)]
struct ColumnState {
    items: Vec<ItemView>,
    droppable: bool,
}

impl ColumnState {
    fn replace_items(&mut self, status: ProjectStatus, projects: Vec<Project>) {
        self.items = projects
            .into_iter()
            .filter(|project| project.status() == status)
            .map(ItemView::new)
            .collect();
    }
}

/// Column listing every project with one status.
///
/// The rendered list is shared with the listener registered in
/// [`View::configure`]; each broadcast replaces it wholesale.
#[derive(Debug)]
pub struct ColumnView {
    status: ProjectStatus,
    state: Rc<RefCell<ColumnState>>,
}

impl ColumnView {
    /// Creates an empty, unconfigured column for `status`.
    #[must_use]
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            state: Rc::new(RefCell::new(ColumnState::default())),
        }
    }

    /// Creates a column for `status` and registers it with `store`.
    #[must_use]
    pub fn attach(status: ProjectStatus, store: &mut ProjectStore) -> Self {
        let mut column = Self::new(status);
        column.configure(store);
        column
    }

    /// Returns the status this column shows.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the column element identifier, e.g. `active-projects`.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    /// Returns the list element identifier, e.g. `active-projects-list`.
    #[must_use]
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Returns copies of the listed projects in store order.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.state
            .borrow()
            .items
            .iter()
            .map(|item| item.project().clone())
            .collect()
    }

    /// Returns the identifiers of the listed projects in store order.
    #[must_use]
    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.state
            .borrow()
            .items
            .iter()
            .map(ItemView::project_id)
            .collect()
    }

    /// Returns the card for `id` if this column lists it.
    #[must_use]
    pub fn item(&self, id: ProjectId) -> Option<ItemView> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.project_id() == id)
            .cloned()
    }

    /// Returns the number of listed projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    /// Returns whether the column lists no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    /// Returns whether the droppable affordance is showing.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.state.borrow().droppable
    }

    fn set_droppable(&self, droppable: bool) {
        self.state.borrow_mut().droppable = droppable;
    }
}

impl View for ColumnView {
    fn configure(&mut self, store: &mut ProjectStore) {
        let status = self.status;
        self.state.borrow_mut().replace_items(status, store.snapshot());

        let state = Rc::clone(&self.state);
        store.add_listener(move |projects: Vec<Project>| {
            state.borrow_mut().replace_items(status, projects);
        });
    }

    fn render(&self) -> Result<String, ViewError> {
        let items = self
            .state
            .borrow()
            .items
            .iter()
            .map(View::render)
            .collect::<Result<Vec<_>, _>>()?;

        Environment::new()
            .render_str(
                COLUMN_TEMPLATE,
                context! {
                    title => self.status.column_title(),
                    items => items,
                },
            )
            .map_err(|error| ViewError::template("column", &error))
    }
}

impl DropTarget for ColumnView {
    fn on_drag_over(&mut self, transfer: &DataTransfer) -> DropDecision {
        if let Err(rejection) = transfer.project_payload() {
            return DropDecision::Reject(rejection);
        }
        self.set_droppable(true);
        DropDecision::Accept
    }

    fn on_drag_leave(&mut self) {
        self.set_droppable(false);
    }

    fn on_drop(&mut self, transfer: &DataTransfer, store: &mut ProjectStore) -> DropOutcome {
        self.set_droppable(false);

        let payload = match transfer.project_payload() {
            Ok(payload) => payload,
            Err(rejection) => return DropOutcome::Rejected(rejection),
        };
        let Ok(id) = payload.parse::<ProjectId>() else {
            return DropOutcome::Rejected(DropRejection::MalformedId);
        };

        DropOutcome::Applied(store.move_project(id, self.status))
    }
}
