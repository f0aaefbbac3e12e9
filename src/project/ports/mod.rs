//! Port contracts for the project board.
//!
//! Ports define the seams between the store and the components that react
//! to its changes.

pub mod listener;

pub use listener::ProjectListener;
