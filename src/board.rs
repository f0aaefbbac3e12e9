//! Composition root wiring the store, the form and both columns.

use crate::project::{
    domain::{ProjectId, ProjectStatus},
    services::{ProjectForm, ProjectFormError, ProjectStore},
    transfer::{DataTransfer, DragSource, DropDecision, DropOutcome, DropTarget},
    validation::ProjectFormRules,
    views::{ColumnView, Host, InsertPosition, View, ViewError, mount},
};

/// Identifier of the host the board renders into.
pub const APP_HOST_ID: &str = "app";

/// A complete project board: one store, one form and a column per status.
#[derive(Debug)]
pub struct ProjectBoard {
    store: ProjectStore,
    form: ProjectForm,
    active: ColumnView,
    finished: ColumnView,
}

impl ProjectBoard {
    /// Creates an empty board with the default form rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(ProjectStore::new(), ProjectFormRules::default())
    }

    /// Creates a board around an existing store and form rules.
    #[must_use]
    pub fn with_parts(mut store: ProjectStore, rules: ProjectFormRules) -> Self {
        let active = ColumnView::attach(ProjectStatus::Active, &mut store);
        let finished = ColumnView::attach(ProjectStatus::Finished, &mut store);
        Self {
            store,
            form: ProjectForm::new(rules),
            active,
            finished,
        }
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &ProjectForm {
        &self.form
    }

    /// Returns the form for input collection.
    pub const fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    /// Returns the column showing `status`.
    #[must_use]
    pub const fn column(&self, status: ProjectStatus) -> &ColumnView {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Submits the form's current input.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectFormError::InvalidInput`] when validation fails; the
    /// store is left untouched.
    pub fn submit_form(&mut self) -> Result<ProjectId, ProjectFormError> {
        self.form.submit(&mut self.store)
    }

    /// Fills the form with raw input and submits it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectFormError::InvalidInput`] when validation fails.
    pub fn submit(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Result<ProjectId, ProjectFormError> {
        self.form.set_title(title);
        self.form.set_description(description);
        self.form.set_people(people);
        self.submit_form()
    }

    /// Drags the card for `id` onto the column for `target`.
    ///
    /// Runs the whole protocol: the card exports its identifier, the target
    /// column inspects the payload while hovering, and the drop asks the
    /// store for the transition. A card that no column lists exports
    /// nothing, so the drop is rejected as an empty payload.
    pub fn drag_project(&mut self, id: ProjectId, target: ProjectStatus) -> DropOutcome {
        let mut transfer = DataTransfer::new();
        if let Some(item) = ProjectStatus::ALL
            .iter()
            .find_map(|status| self.column(*status).item(id))
        {
            item.on_drag_start(&mut transfer);
        }
        self.drop_onto(&transfer, target)
    }

    /// Hovers `transfer` over the column for `target` and drops it there.
    pub fn drop_onto(&mut self, transfer: &DataTransfer, target: ProjectStatus) -> DropOutcome {
        let column = match target {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        };

        if let DropDecision::Reject(rejection) = column.on_drag_over(transfer) {
            column.on_drag_leave();
            return DropOutcome::Rejected(rejection);
        }
        column.on_drop(transfer, &mut self.store)
    }

    /// Renders the form followed by both columns.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if any view fails to render.
    pub fn render(&self) -> Result<String, ViewError> {
        let mut host = Host::new(APP_HOST_ID);
        for status in ProjectStatus::ALL {
            mount(&mut host, self.column(status).render()?, InsertPosition::AtEnd);
        }
        mount(&mut host, self.form.render()?, InsertPosition::AtStart);
        Ok(host.contents())
    }
}

impl Default for ProjectBoard {
    fn default() -> Self {
        Self::new()
    }
}
