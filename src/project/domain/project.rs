//! Project entity and its two-state status.

use super::{ParseProjectStatusError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is still being worked on.
    Active,
    /// Project has been completed.
    Finished,
}

impl ProjectStatus {
    /// Every status, in column display order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Returns the heading shown above the column for this status.
    #[must_use]
    pub const fn column_title(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object for creating a project.
///
/// Inputs are trusted: callers validate them through
/// [`crate::project::validation`] before they reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Project title.
    pub title: String,
    /// Free-form project description.
    pub description: String,
    /// Number of people assigned.
    pub people_count: u32,
}

impl NewProject {
    /// Creates a parameter object from its three fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people_count,
        }
    }
}

/// A single project on the board.
///
/// Everything except `status` is write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people_count: u32,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates an active project with a fresh identifier.
    #[must_use]
    pub fn new(data: NewProject, clock: &dyn Clock) -> Self {
        Self {
            id: ProjectId::new(),
            title: data.title,
            description: data.description,
            people_count: data.people_count,
            status: ProjectStatus::Active,
            created_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned.
    #[must_use]
    pub const fn people_count(&self) -> u32 {
        self.people_count
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the project to `status`.
    ///
    /// Returns `false` without touching the project when it already has that
    /// status.
    pub(crate) fn transition_to(&mut self, status: ProjectStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }
}
