//! Utility modules: logging and data-directory persistence.

pub mod logging;
pub mod persistence;
