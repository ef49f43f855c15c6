//! Handlers for the two page triggers: "get result" and "reset"

use tracing::{info, instrument, warn};

use pressure_check_domain::entities::{ClassificationResult, MeasurementContext, ReadingForm};
use pressure_check_domain::services::{PressureCheckServiceTrait, ReadingError};

use crate::entities::PanelView;
use crate::presenter::ResultPresenter;

/// Runs one evaluation at a time from form input to rendered panel
pub struct IndicatorController<S, P> {
    service: S,
    presenter: P,
    default_context: MeasurementContext,
}

impl<S, P> IndicatorController<S, P>
where
    S: PressureCheckServiceTrait,
    P: ResultPresenter,
{
    pub fn new(service: S, presenter: P, default_context: MeasurementContext) -> Self {
        Self {
            service,
            presenter,
            default_context,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Validate and classify the form, then render the result.
    ///
    /// On failure nothing is rendered: the panel is hidden, the user is
    /// told why, and the error is returned.
    #[instrument(skip(self), fields(context = %form.context))]
    pub fn handle_get_result(&mut self, form: &ReadingForm) -> Result<ClassificationResult, ReadingError> {
        match self.service.evaluate(form) {
            Ok(result) => {
                self.presenter.show_result(&PanelView::from(&result));
                Ok(result)
            }
            Err(error) => {
                warn!("Reading rejected: {}", error);
                self.presenter.hide_result();
                self.presenter.notify(&error.to_string());
                Err(error)
            }
        }
    }

    /// Clear the inputs, reset the selector and hide the panel
    pub fn handle_reset(&mut self) {
        info!(context = %self.default_context, "Resetting form");
        self.presenter.clear_form(self.default_context);
        self.presenter.hide_result();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::MockResultPresenter;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use pressure_check_domain::services::PressureCheckService;

    #[test]
    fn test_valid_reading_shows_panel() {
        let mut presenter = MockResultPresenter::new();
        presenter
            .expect_show_result()
            .withf(|view| view.label_text == "HIGH!" && view.circle_text == "136/80" && view.border_color == "#DC143C")
            .times(1)
            .return_const(());
        presenter.expect_hide_result().never();
        presenter.expect_notify().never();

        let mut controller = IndicatorController::new(PressureCheckService::new(), presenter, MeasurementContext::Home);
        let result = controller
            .handle_get_result(&ReadingForm::new("136", "80", MeasurementContext::Home))
            .unwrap();
        assert_eq!(result.label, "HIGH!");
    }

    #[test]
    fn test_invalid_reading_hides_panel_and_notifies() {
        let mut sequence = Sequence::new();
        let mut presenter = MockResultPresenter::new();
        presenter.expect_show_result().never();
        presenter
            .expect_hide_result()
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(());
        presenter
            .expect_notify()
            .withf(|message| message == "Diastolic reading should be lower than your systolic reading.")
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(());

        let mut controller = IndicatorController::new(PressureCheckService::new(), presenter, MeasurementContext::Home);
        let result = controller.handle_get_result(&ReadingForm::new("100", "110", MeasurementContext::Home));
        assert!(matches!(result, Err(ReadingError::InconsistentReading { .. })));
    }

    #[test]
    fn test_out_of_range_message() {
        let mut presenter = MockResultPresenter::new();
        presenter.expect_hide_result().times(1).return_const(());
        presenter
            .expect_notify()
            .withf(|message| message == "Systolic reading must be 300 or below.")
            .times(1)
            .return_const(());

        let mut controller = IndicatorController::new(PressureCheckService::new(), presenter, MeasurementContext::Home);
        assert!(controller
            .handle_get_result(&ReadingForm::new("320", "100", MeasurementContext::Clinic))
            .is_err());
    }

    #[test]
    fn test_reset_clears_to_default_context() {
        let mut presenter = MockResultPresenter::new();
        presenter
            .expect_clear_form()
            .with(eq(MeasurementContext::Clinic))
            .times(1)
            .return_const(());
        presenter.expect_hide_result().times(1).return_const(());

        let mut controller = IndicatorController::new(PressureCheckService::new(), presenter, MeasurementContext::Clinic);
        controller.handle_reset();
    }
}
