//! Shared UI crate for Affectmap: descriptor catalog, chart renderer, map
//! workspace and the views both launchers route to.

pub mod chart;
pub mod components;
pub mod core;
pub mod i18n;
pub mod map;
pub mod views;
