use serde::{Deserialize, Serialize};

use pressure_check_domain::entities::{ClassificationResult, MeasurementContext, ReadingForm};

/// Everything the results panel displays for one classified reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelView {
    /// Text inside the heartbeat circle, e.g. `120/80`
    pub circle_text: String,

    /// Border color of the circle
    pub border_color: String,

    /// CSS `animation` value for the circle
    pub animation: String,

    /// Label under the circle
    pub label_text: String,

    /// Color of the label text
    pub label_color: String,
}

impl From<&ClassificationResult> for PanelView {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            circle_text: result.display_value.clone(),
            border_color: result.color.clone(),
            animation: result.animation_css(),
            label_text: result.label.clone(),
            label_color: result.color.clone(),
        }
    }
}

/// Current contents of the input form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub systolic: String,
    pub diastolic: String,
    pub context: MeasurementContext,
}

impl FormState {
    /// Empty fields with the selector on `context`
    pub fn cleared(context: MeasurementContext) -> Self {
        Self {
            systolic: String::new(),
            diastolic: String::new(),
            context,
        }
    }
}

impl From<&FormState> for ReadingForm {
    fn from(state: &FormState) -> Self {
        ReadingForm::new(state.systolic.clone(), state.diastolic.clone(), state.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressure_check_domain::entities::{Reading, SeverityBand};

    #[test]
    fn test_panel_view_from_result() {
        let reading = Reading::new(170, 95, MeasurementContext::Home);
        let result = ClassificationResult::new(&reading, SeverityBand::SuperHigh);

        let view = PanelView::from(&result);
        assert_eq!(view.circle_text, "170/95");
        assert_eq!(view.border_color, "#880808");
        assert_eq!(view.label_color, "#880808");
        assert_eq!(view.label_text, "REALLY HIGH! CALL EMERGENCY SERVICES!");
        assert_eq!(view.animation, "heartbeat-animation 0.2s infinite ease-in-out");
    }

    #[test]
    fn test_cleared_form() {
        let state = FormState::cleared(MeasurementContext::Clinic);
        assert!(state.systolic.is_empty());
        assert!(state.diastolic.is_empty());
        assert_eq!(ReadingForm::from(&state).context, MeasurementContext::Clinic);
    }
}
