//! Display of the project creation form.

use super::{View, ViewError};
use crate::project::services::ProjectForm;
use minijinja::{Environment, context};

const FORM_TEMPLATE: &str =
    "ADD PROJECT\nTitle: {{ title }}\nDescription: {{ description }}\nPeople: {{ people }}";

impl View for ProjectForm {
    fn render(&self) -> Result<String, ViewError> {
        Environment::new()
            .render_str(
                FORM_TEMPLATE,
                context! {
                    title => self.title(),
                    description => self.description(),
                    people => self.people(),
                },
            )
            .map_err(|error| ViewError::template("form", &error))
    }
}
