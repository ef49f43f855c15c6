use tracing::info;

use crate::entities::blood_pressure::{Reading, ReadingForm};
use crate::entities::classification::{ClassificationResult, SeverityBand};
use crate::services::classification::classify_reading;
use crate::services::validation::{self, ReadingError};

/// Trait for blood pressure check operations
pub trait PressureCheckServiceTrait {
    /// Parse raw form text into a validated reading
    fn parse_form(&self, form: &ReadingForm) -> Result<Reading, ReadingError>;

    /// Validate an already parsed reading
    fn validate_reading(&self, reading: &Reading) -> Result<(), ReadingError>;

    /// Classify a validated reading
    fn classify_reading(&self, reading: &Reading) -> ClassificationResult;

    /// Check if a reading calls for emergency services
    fn is_emergency(&self, reading: &Reading) -> bool {
        self.classify_reading(reading).band == SeverityBand::SuperHigh
    }

    /// Parse, validate and classify in one step. Nothing is classified
    /// unless every check passes.
    fn evaluate(&self, form: &ReadingForm) -> Result<ClassificationResult, ReadingError> {
        let reading = self.parse_form(form)?;
        Ok(self.classify_reading(&reading))
    }
}

/// Default service backed by the fixed threshold tables
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureCheckService;

impl PressureCheckService {
    /// Create a new pressure check service
    pub fn new() -> Self {
        Self
    }
}

impl PressureCheckServiceTrait for PressureCheckService {
    fn parse_form(&self, form: &ReadingForm) -> Result<Reading, ReadingError> {
        validation::parse_form(form)
    }

    fn validate_reading(&self, reading: &Reading) -> Result<(), ReadingError> {
        validation::validate_reading(reading)
    }

    fn classify_reading(&self, reading: &Reading) -> ClassificationResult {
        let result = classify_reading(reading);
        if result.requires_emergency() {
            info!(reading = %result.display_value, context = %reading.context, "Reading is at emergency level");
        }
        result
    }
}

/// Create the default pressure check service
pub fn create_default_pressure_check_service() -> impl PressureCheckServiceTrait + Clone {
    PressureCheckService::new()
}

/// Create a mock pressure check service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_pressure_check_service() -> impl PressureCheckServiceTrait {
    crate::testing::MockPressureCheckService::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::blood_pressure::MeasurementContext;

    #[test]
    fn test_evaluate_valid_form() {
        let service = PressureCheckService::new();
        let form = ReadingForm::new("120", "70", MeasurementContext::Home);

        let result = service.evaluate(&form).unwrap();
        assert_eq!(result.label, "HEALTHY!");
        assert_eq!(result.display_value, "120/70");
    }

    #[test]
    fn test_evaluate_stops_at_first_error() {
        let service = PressureCheckService::new();

        let form = ReadingForm::new("x", "500", MeasurementContext::Home);
        assert_eq!(service.evaluate(&form), Err(ReadingError::InvalidInput));

        let form = ReadingForm::new("100", "120", MeasurementContext::Home);
        assert!(matches!(service.evaluate(&form), Err(ReadingError::InconsistentReading { .. })));
    }

    #[test]
    fn test_is_emergency() {
        let service = create_default_pressure_check_service();
        assert!(service.is_emergency(&Reading::new(170, 95, MeasurementContext::Home)));
        assert!(!service.is_emergency(&Reading::new(170, 95, MeasurementContext::Clinic)));
        assert!(!service.is_emergency(&Reading::new(120, 80, MeasurementContext::Home)));
    }

    #[test]
    fn test_validate_reading_delegates() {
        let service = PressureCheckService::new();
        assert!(service.validate_reading(&Reading::new(120, 80, MeasurementContext::Home)).is_ok());
        assert!(service.validate_reading(&Reading::new(350, 80, MeasurementContext::Home)).is_err());
    }
}
