//! Taskboard: a reactive project board core.
//!
//! Projects are entered through a validated form, kept in a single store
//! that broadcasts a fresh snapshot to every listener after each change,
//! and moved between the "active" and "finished" columns by a drag-and-drop
//! protocol.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Project identity and status with no rendering concerns
//! - **Ports**: The listener contract the store notifies
//! - **Services**: The store and the form that feeds it
//! - **Views**: Columns and cards composed around the store
//!
//! # Modules
//!
//! - [`project`]: Domain, validation, store, drag protocol and views
//! - [`board`]: Composition root wiring one store to its views

pub mod board;
pub mod project;
