// Domain entities and value objects
pub mod blood_pressure;
pub mod classification;

// Re-export common types for easier imports
pub use blood_pressure::{MeasurementContext, PressureField, Reading, ReadingForm, UnknownContext};
pub use classification::{BandThreshold, ClassificationResult, SeverityBand, ThresholdTable};
