//! Shared world state for project board BDD scenarios.

use rstest::fixture;
use taskboard::{
    board::ProjectBoard,
    project::{
        domain::{ProjectId, ProjectStatus},
        services::ProjectFormError,
        transfer::DropOutcome,
    },
};

/// Scenario world for project board behaviour tests.
pub struct BoardWorld {
    pub board: ProjectBoard,
    pub last_project: Option<ProjectId>,
    pub last_submission: Option<Result<ProjectId, ProjectFormError>>,
    pub last_drop: Option<DropOutcome>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: ProjectBoard::new(),
            last_project: None,
            last_submission: None,
            last_drop: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a column name used in feature files.
pub fn parse_status(status: &str) -> Result<ProjectStatus, eyre::Report> {
    ProjectStatus::try_from(status).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
