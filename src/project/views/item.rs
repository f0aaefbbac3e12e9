//! Single-project card; the drag source of the transition protocol.

use super::{View, ViewError};
use crate::project::{
    domain::{Project, ProjectId},
    transfer::{DataTransfer, DragSource, PLAIN_TEXT},
};
use minijinja::{Environment, context};

const ITEM_TEMPLATE: &str = "{{ title }}\n{{ persons }} assigned!\n{{ description }}";

/// Read-only card for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    project: Project,
}

impl ItemView {
    /// Creates a card for `project`.
    #[must_use]
    pub const fn new(project: Project) -> Self {
        Self { project }
    }

    /// Returns the displayed project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the identifier of the displayed project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project.id()
    }

    /// Returns the headcount label, e.g. `"1 person"` or `"3 persons"`.
    #[must_use]
    pub fn persons(&self) -> String {
        match self.project.people_count() {
            1 => "1 person".to_owned(),
            count => format!("{count} persons"),
        }
    }
}

impl View for ItemView {
    fn render(&self) -> Result<String, ViewError> {
        Environment::new()
            .render_str(
                ITEM_TEMPLATE,
                context! {
                    title => self.project.title(),
                    persons => self.persons(),
                    description => self.project.description(),
                },
            )
            .map_err(|error| ViewError::template("item", &error))
    }
}

impl DragSource for ItemView {
    fn on_drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(PLAIN_TEXT, self.project.id().to_string());
    }
}
