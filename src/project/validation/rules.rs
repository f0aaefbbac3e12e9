//! Declarative field constraints and the predicate that checks them.
//!
//! Every constraint is optional and checked independently; a value is valid
//! only when all present constraints hold. Length bounds apply to text
//! values only and range bounds to numeric values only. All bounds are
//! inclusive.

/// A single form value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text as entered.
    Text(&'a str),
    /// Integer value.
    Number(i64),
}

impl FieldValue<'_> {
    fn is_blank(self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            // The text form of an integer always has at least one digit.
            Self::Number(_) => false,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Constraints declared for one field.
///
/// # Examples
///
/// ```
/// use taskboard::project::validation::{FieldConstraints, FieldValue, validate_field};
///
/// let title = FieldConstraints::required().with_min_length(5);
/// assert!(validate_field(FieldValue::Text("Build API"), &title));
/// assert!(!validate_field(FieldValue::Text("Hi"), &title));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldConstraints {
    /// Value must not be blank once trimmed.
    pub required: bool,
    /// Minimum text length in characters.
    pub min_length: Option<usize>,
    /// Maximum text length in characters.
    pub max_length: Option<usize>,
    /// Minimum numeric value.
    pub min: Option<i64>,
    /// Maximum numeric value.
    pub max: Option<i64>,
}

impl FieldConstraints {
    /// Creates an empty constraint set that accepts any value.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Creates a constraint set that only requires a non-blank value.
    #[must_use]
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Sets the inclusive minimum text length.
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the inclusive maximum text length.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the inclusive minimum numeric value.
    #[must_use]
    pub const fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive maximum numeric value.
    #[must_use]
    pub const fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `value` satisfies every constraint in `constraints`.
#[must_use]
pub fn validate_field(value: FieldValue<'_>, constraints: &FieldConstraints) -> bool {
    if constraints.required && value.is_blank() {
        return false;
    }

    match value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            constraints.min_length.is_none_or(|min| length >= min)
                && constraints.max_length.is_none_or(|max| length <= max)
        }
        FieldValue::Number(number) => {
            constraints.min.is_none_or(|min| number >= min)
                && constraints.max.is_none_or(|max| number <= max)
        }
    }
}
