//! Domain model for the project board.
//!
//! A project is created once with a fresh identity and afterwards only its
//! status may change. Nothing here knows about rendering or drag sessions.

mod error;
mod ids;
mod project;

pub use error::ParseProjectStatusError;
pub use ids::ProjectId;
pub use project::{NewProject, Project, ProjectStatus};
