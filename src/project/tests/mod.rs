//! Unit tests for the project board core.
