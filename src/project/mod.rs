//! Project board core.
//!
//! Projects are created through a validated form, held by a single
//! [`services::ProjectStore`], and moved between the active and finished
//! columns by a drag-and-drop protocol. The module is organised as:
//!
//! - Domain types in [`domain`]
//! - Field validation in [`validation`]
//! - The listener port in [`ports`]
//! - The store and form in [`services`]
//! - The drag protocol in [`transfer`]
//! - Rendering components in [`views`]

pub mod domain;
pub mod ports;
pub mod services;
pub mod transfer;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;
