use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Lowest systolic value accepted from the form
pub const SYSTOLIC_MINIMUM: i32 = 70;

/// Highest systolic value accepted from the form
pub const SYSTOLIC_MAXIMUM: i32 = 300;

/// Lowest diastolic value accepted from the form
pub const DIASTOLIC_MINIMUM: i32 = 40;

/// Highest diastolic value accepted from the form
pub const DIASTOLIC_MAXIMUM: i32 = 200;

/// Where the reading was taken. Clinic readings run higher than home
/// self-measurements, so the two settings use different thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementContext {
    /// Self-measurement at home
    #[default]
    Home,

    /// Measurement taken in a clinic
    Clinic,
}

impl MeasurementContext {
    /// Selector value for this context
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementContext::Home => "home",
            MeasurementContext::Clinic => "clinic",
        }
    }
}

impl fmt::Display for MeasurementContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a selector value names no known context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown measurement context: {0}")]
pub struct UnknownContext(pub String);

impl FromStr for MeasurementContext {
    type Err = UnknownContext;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(MeasurementContext::Home),
            "clinic" => Ok(MeasurementContext::Clinic),
            _ => Err(UnknownContext(s.to_string())),
        }
    }
}

/// One of the two values making up a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureField {
    /// The higher number
    Systolic,

    /// The lower number
    Diastolic,
}

impl fmt::Display for PressureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureField::Systolic => f.write_str("Systolic"),
            PressureField::Diastolic => f.write_str("Diastolic"),
        }
    }
}

/// A single blood pressure reading. Lives only for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Reading {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 70, max = 300))]
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 40, max = 200))]
    pub diastolic: i32,

    /// Measurement setting
    pub context: MeasurementContext,
}

impl Reading {
    /// Create a new reading
    pub fn new(systolic: i32, diastolic: i32, context: MeasurementContext) -> Self {
        Self { systolic, diastolic, context }
    }

    /// The reading as it is shown to the user, e.g. `120/80`
    pub fn display_value(&self) -> String {
        format!("{}/{}", self.systolic, self.diastolic)
    }
}

/// Raw values as typed into the form, before any parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingForm {
    /// Text of the systolic field
    pub systolic: String,

    /// Text of the diastolic field
    pub diastolic: String,

    /// Selected measurement context
    #[serde(default)]
    pub context: MeasurementContext,
}

impl ReadingForm {
    /// Build a form from field text
    pub fn new(systolic: impl Into<String>, diastolic: impl Into<String>, context: MeasurementContext) -> Self {
        Self {
            systolic: systolic.into(),
            diastolic: diastolic.into(),
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_parses_selector_values() {
        assert_eq!("home".parse::<MeasurementContext>(), Ok(MeasurementContext::Home));
        assert_eq!(" Clinic ".parse::<MeasurementContext>(), Ok(MeasurementContext::Clinic));
        assert!("hospital".parse::<MeasurementContext>().is_err());
    }

    #[test]
    fn test_unknown_context_message() {
        let error = "hospital".parse::<MeasurementContext>().unwrap_err();
        assert_eq!(error, UnknownContext("hospital".to_string()));
        assert_eq!(error.to_string(), "Unknown measurement context: hospital");
    }

    #[test]
    fn test_context_defaults_to_home() {
        assert_eq!(MeasurementContext::default(), MeasurementContext::Home);
        assert_eq!(ReadingForm::default().context, MeasurementContext::Home);
    }

    #[test]
    fn test_context_serializes_lowercase() {
        let json = serde_json::to_string(&MeasurementContext::Clinic).unwrap();
        assert_eq!(json, "\"clinic\"");
    }

    #[test]
    fn test_display_value() {
        let reading = Reading::new(120, 80, MeasurementContext::Home);
        assert_eq!(reading.display_value(), "120/80");
    }

    #[test]
    fn test_range_attributes_match_limits() {
        let at_limits = [
            Reading::new(SYSTOLIC_MINIMUM, DIASTOLIC_MINIMUM, MeasurementContext::Home),
            Reading::new(SYSTOLIC_MAXIMUM, DIASTOLIC_MAXIMUM, MeasurementContext::Home),
        ];
        for reading in at_limits {
            assert!(reading.validate().is_ok(), "{:?} should be in range", reading);
        }

        let systolic_low = Reading::new(SYSTOLIC_MINIMUM - 1, DIASTOLIC_MINIMUM, MeasurementContext::Home);
        let systolic_high = Reading::new(SYSTOLIC_MAXIMUM + 1, DIASTOLIC_MINIMUM, MeasurementContext::Home);
        let diastolic_low = Reading::new(SYSTOLIC_MINIMUM, DIASTOLIC_MINIMUM - 1, MeasurementContext::Home);
        let diastolic_high = Reading::new(SYSTOLIC_MAXIMUM, DIASTOLIC_MAXIMUM + 1, MeasurementContext::Home);

        for (reading, field) in [
            (systolic_low, "systolic"),
            (systolic_high, "systolic"),
            (diastolic_low, "diastolic"),
            (diastolic_high, "diastolic"),
        ] {
            let errors = reading.validate().unwrap_err();
            assert!(errors.field_errors().contains_key(field), "{:?} should fail on {}", reading, field);
        }
    }
}
