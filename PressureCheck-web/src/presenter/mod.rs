//! Presenters render classification results and form state.
//!
//! The controller only talks to the `ResultPresenter` trait, so the same
//! flow drives the browser page, the terminal and tests.

pub mod in_memory;
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod dom;

use pressure_check_domain::entities::MeasurementContext;

use crate::entities::PanelView;

pub use in_memory::InMemoryPresenter;
pub use terminal::TerminalPresenter;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomError, DomPresenter};

/// Output side of the indicator
#[cfg_attr(test, mockall::automock)]
pub trait ResultPresenter {
    /// Fill the results panel and make it visible
    fn show_result(&mut self, view: &PanelView);

    /// Hide the results panel
    fn hide_result(&mut self);

    /// Tell the user something went wrong
    fn notify(&mut self, message: &str);

    /// Empty both numeric fields and put the selector on `context`
    fn clear_form(&mut self, context: MeasurementContext);
}
