pub mod classification;
pub mod pressure_check;
pub mod validation;

// Domain services
// Validation and classification are pure functions; the service trait is the
// seam the presentation layer depends on.

// Re-export service traits and factory functions
pub use pressure_check::{create_default_pressure_check_service, PressureCheckService, PressureCheckServiceTrait};
pub use validation::{LimitSide, ReadingError};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use pressure_check::create_mock_pressure_check_service;
