//! Platform-agnostic core: catalog, selection state, configuration.

pub mod catalog;
pub mod config;
pub mod format;
pub mod gate;
pub mod platform;
pub mod selection;
