// PressureCheck-web lib.rs
//
// Presentation layer for the blood pressure indicator: the presenter seam,
// the controller for the page triggers, configuration and logging. The
// browser bindings are only compiled for wasm32.

pub mod config;
pub mod controller;
pub mod entities;
pub mod logging;
pub mod mount_guard;
pub mod presenter;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{ConfigError, IndicatorConfig};
pub use controller::IndicatorController;
