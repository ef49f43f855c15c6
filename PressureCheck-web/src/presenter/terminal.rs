use std::io::Write;

use tracing::error;

use pressure_check_domain::entities::MeasurementContext;

use super::ResultPresenter;
use crate::entities::PanelView;

/// Presenter that writes the panel as text
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            error!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> ResultPresenter for TerminalPresenter<W> {
    fn show_result(&mut self, view: &PanelView) {
        let line = format!("({}) {} [{}; {}]", view.circle_text, view.label_text, view.border_color, view.animation);
        self.write_line(&line);
    }

    fn hide_result(&mut self) {}

    fn notify(&mut self, message: &str) {
        self.write_line(&format!("! {}", message));
    }

    fn clear_form(&mut self, context: MeasurementContext) {
        self.write_line(&format!("Form cleared ({})", context));
    }
}
