// PressureCheck Domain
// This crate contains the business logic for classifying a blood pressure reading

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;

pub use crate::entities::{ClassificationResult, MeasurementContext, Reading, ReadingForm, SeverityBand};
pub use crate::services::ReadingError;
