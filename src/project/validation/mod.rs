//! Field validation for project form input.
//!
//! Validation is a pure predicate over a single value and its declared
//! constraints. [`ProjectFormRules`] bundles the constraints the project form
//! applies to each of its fields.

pub mod config;
pub mod rules;

pub use config::ProjectFormRules;
pub use rules::{FieldConstraints, FieldValue, validate_field};
