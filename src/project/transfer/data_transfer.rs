//! In-process model of a drag session's payload.

use super::DropRejection;

/// Content type carrying a project identifier.
pub const PLAIN_TEXT: &str = "text/plain";

/// Typed string payload carried by one drag session.
///
/// Entries keep the order in which their content types were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
}

impl DataTransfer {
    /// Creates an empty transfer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores `data` under `content_type`, replacing any previous value.
    pub fn set_data(&mut self, content_type: impl Into<String>, data: impl Into<String>) {
        let key = content_type.into();
        let value = data.into();
        match self.entries.iter_mut().find(|(ty, _)| *ty == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the data stored under `content_type`.
    #[must_use]
    pub fn get_data(&self, content_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(ty, _)| ty == content_type)
            .map(|(_, data)| data.as_str())
    }

    /// Returns the content types in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(ty, _)| ty.as_str())
    }

    /// Returns the first content type set on the transfer.
    #[must_use]
    pub fn first_type(&self) -> Option<&str> {
        self.entries.first().map(|(ty, _)| ty.as_str())
    }

    /// Returns the project identifier text a drop target may consume.
    ///
    /// Only a transfer whose first content type is [`PLAIN_TEXT`] carries
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`DropRejection::EmptyPayload`] when nothing was set and
    /// [`DropRejection::WrongContentType`] when the first entry is of
    /// another type.
    pub fn project_payload(&self) -> Result<&str, DropRejection> {
        match self.entries.first() {
            None => Err(DropRejection::EmptyPayload),
            Some((ty, data)) if ty == PLAIN_TEXT => Ok(data.as_str()),
            Some(_) => Err(DropRejection::WrongContentType),
        }
    }
}
