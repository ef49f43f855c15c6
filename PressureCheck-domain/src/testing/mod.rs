// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::sync::RwLock;

use crate::entities::blood_pressure::{Reading, ReadingForm};
use crate::entities::classification::{ClassificationResult, SeverityBand};
use crate::services::pressure_check::PressureCheckServiceTrait;
use crate::services::validation::{self, ReadingError};

/// Mock implementation of the PressureCheckServiceTrait for testing
pub struct MockPressureCheckService {
    forms: RwLock<Vec<ReadingForm>>,
    validation_failure: Option<ReadingError>,
    fixed_band: Option<SeverityBand>,
}

impl Default for MockPressureCheckService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPressureCheckService {
    /// Create a new mock pressure check service
    pub fn new() -> Self {
        Self {
            forms: RwLock::new(Vec::new()),
            validation_failure: None,
            fixed_band: None,
        }
    }

    /// Configure the mock to fail validation with the given error
    pub fn with_validation_failure(mut self, error: ReadingError) -> Self {
        self.validation_failure = Some(error);
        self
    }

    /// Configure the mock to classify every reading into `band`
    pub fn with_band(mut self, band: SeverityBand) -> Self {
        self.fixed_band = Some(band);
        self
    }

    /// Forms passed to `parse_form` so far
    pub fn parsed_forms(&self) -> Vec<ReadingForm> {
        self.forms.read().unwrap().clone()
    }
}

impl PressureCheckServiceTrait for MockPressureCheckService {
    fn parse_form(&self, form: &ReadingForm) -> Result<Reading, ReadingError> {
        self.forms.write().unwrap().push(form.clone());

        if let Some(error) = &self.validation_failure {
            return Err(error.clone());
        }

        let systolic = validation::parse_pressure(&form.systolic).ok_or(ReadingError::InvalidInput)?;
        let diastolic = validation::parse_pressure(&form.diastolic).ok_or(ReadingError::InvalidInput)?;
        Ok(Reading::new(systolic, diastolic, form.context))
    }

    fn validate_reading(&self, _reading: &Reading) -> Result<(), ReadingError> {
        match &self.validation_failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn classify_reading(&self, reading: &Reading) -> ClassificationResult {
        let band = self.fixed_band.unwrap_or(SeverityBand::Healthy);
        ClassificationResult::new(reading, band)
    }
}
