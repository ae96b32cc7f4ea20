//! Command-line driver for the schema converter

pub mod commands;
pub mod error;
pub mod validation;
