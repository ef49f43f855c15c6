use pressure_check_domain::entities::{MeasurementContext, ReadingForm};

use super::ResultPresenter;
use crate::entities::{FormState, PanelView};

/// Presenter that keeps page state in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryPresenter {
    form: FormState,
    panel: Option<PanelView>,
    visible: bool,
    notifications: Vec<String>,
}

impl InMemoryPresenter {
    /// Create a presenter with an empty form and a hidden panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Type values into the form
    pub fn fill(&mut self, systolic: &str, diastolic: &str, context: MeasurementContext) {
        self.form = FormState {
            systolic: systolic.to_string(),
            diastolic: diastolic.to_string(),
            context,
        };
    }

    /// Current form contents as a reading form
    pub fn read_form(&self) -> ReadingForm {
        ReadingForm::from(&self.form)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Last rendered panel, kept even while hidden
    pub fn panel(&self) -> Option<&PanelView> {
        self.panel.as_ref()
    }

    pub fn is_result_visible(&self) -> bool {
        self.visible
    }

    /// Messages shown to the user, oldest first
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl ResultPresenter for InMemoryPresenter {
    fn show_result(&mut self, view: &PanelView) {
        self.panel = Some(view.clone());
        self.visible = true;
    }

    fn hide_result(&mut self) {
        self.visible = false;
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn clear_form(&mut self, context: MeasurementContext) {
        self.form = FormState::cleared(context);
    }
}
