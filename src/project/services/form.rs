//! Form submission: raw input to validated project creation.

use crate::project::{
    domain::{NewProject, ProjectId},
    services::ProjectStore,
    validation::{FieldValue, ProjectFormRules, validate_field},
};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Input field of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Project title input.
    Title,
    /// Project description input.
    Description,
    /// People count input.
    People,
}

impl FormField {
    /// Returns the input name used by the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when a form submission is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectFormError {
    /// One or more inputs failed validation; the store was not called.
    #[error("Invalid input. Please try again!")]
    InvalidInput {
        /// Every input that failed, in form order.
        fields: Vec<FormField>,
    },
}

/// Project creation form.
///
/// Holds the raw text of each input until it is submitted. A successful
/// submission clears every input.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    rules: ProjectFormRules,
    title: String,
    description: String,
    people: String,
}

impl ProjectForm {
    /// Creates an empty form checked against `rules`.
    #[must_use]
    pub fn new(rules: ProjectFormRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Sets the raw title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the raw description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the raw people count input.
    pub fn set_people(&mut self, people: impl Into<String>) {
        self.people = people.into();
    }

    /// Fills all three inputs at once.
    #[must_use]
    pub fn with_input(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        self.set_title(title);
        self.set_description(description);
        self.set_people(people);
        self
    }

    /// Returns the raw title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw people count input.
    #[must_use]
    pub fn people(&self) -> &str {
        &self.people
    }

    /// Validates the current input and extracts the project fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectFormError::InvalidInput`] listing every failing
    /// input.
    pub fn gather_input(&self) -> Result<NewProject, ProjectFormError> {
        let mut fields = Vec::new();

        if !validate_field(FieldValue::Text(&self.title), &self.rules.title) {
            fields.push(FormField::Title);
        }
        if !validate_field(FieldValue::Text(&self.description), &self.rules.description) {
            fields.push(FormField::Description);
        }

        let people_count = self
            .people
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|count| validate_field(FieldValue::Number(*count), &self.rules.people))
            .and_then(|count| u32::try_from(count).ok());
        if people_count.is_none() {
            fields.push(FormField::People);
        }

        match people_count {
            Some(people_count) if fields.is_empty() => Ok(NewProject::new(
                self.title.clone(),
                self.description.clone(),
                people_count,
            )),
            _ => Err(ProjectFormError::InvalidInput { fields }),
        }
    }

    /// Submits the form to `store`.
    ///
    /// On success the new project is added, the inputs are cleared and the
    /// project identifier is returned. On failure the store and the inputs
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectFormError::InvalidInput`] when validation fails.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Result<ProjectId, ProjectFormError> {
        let project = self.gather_input().inspect_err(|error| {
            let ProjectFormError::InvalidInput { fields } = error;
            debug!(?fields, "project form rejected");
        })?;
        let id = store.add_project(project);
        self.clear();
        Ok(id)
    }

    fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}
