//! Lint rule implementations.

pub mod semantic;
