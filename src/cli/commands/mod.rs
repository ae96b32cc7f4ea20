//! CLI command implementations

#[cfg(feature = "cli")]
pub mod fix;
