// View entities for the results panel and the form
// These are what a presenter renders; they carry no classification logic

pub mod panel;

pub use panel::{FormState, PanelView};
