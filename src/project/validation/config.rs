//! Per-field rule configuration for the project form.

use super::FieldConstraints;

/// Constraints the project form applies to each of its inputs.
///
/// # Examples
///
/// ```
/// use taskboard::project::validation::ProjectFormRules;
///
/// let rules = ProjectFormRules::default();
/// assert_eq!(rules.title.min_length, Some(5));
/// assert_eq!(rules.people.max, Some(5));
///
/// let lenient = ProjectFormRules::lenient();
/// assert_eq!(lenient.title.min_length, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFormRules {
    /// Rules for the title input.
    pub title: FieldConstraints,
    /// Rules for the description input.
    pub description: FieldConstraints,
    /// Rules for the people count input.
    pub people: FieldConstraints,
}

impl Default for ProjectFormRules {
    fn default() -> Self {
        Self {
            title: FieldConstraints::required().with_min_length(5),
            description: FieldConstraints::required().with_min_length(5),
            people: FieldConstraints::required().with_min(1).with_max(5),
        }
    }
}

impl ProjectFormRules {
    /// Creates a configuration that only rejects blank inputs.
    ///
    /// Useful for testing or when any non-empty entry is acceptable.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            title: FieldConstraints::required(),
            description: FieldConstraints::required(),
            people: FieldConstraints::required(),
        }
    }
}
