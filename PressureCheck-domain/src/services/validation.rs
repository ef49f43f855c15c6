use std::fmt;

use thiserror::Error;
use tracing::warn;
use validator::Validate;

use crate::entities::blood_pressure::{
    PressureField, Reading, ReadingForm, DIASTOLIC_MAXIMUM, DIASTOLIC_MINIMUM, SYSTOLIC_MAXIMUM,
    SYSTOLIC_MINIMUM,
};

/// Which end of the allowed range a value fell outside of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSide {
    Minimum,
    Maximum,
}

impl fmt::Display for LimitSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitSide::Minimum => f.write_str("above"),
            LimitSide::Maximum => f.write_str("below"),
        }
    }
}

/// Reasons a reading is rejected before classification.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// One of the fields is not a number
    #[error("Please enter valid numbers.")]
    InvalidInput,

    /// Diastolic is higher than systolic
    #[error("Diastolic reading should be lower than your systolic reading.")]
    InconsistentReading { systolic: i32, diastolic: i32 },

    /// A value is outside the accepted range
    #[error("{field} reading must be {limit} or {side}.")]
    OutOfRange {
        field: PressureField,
        value: i32,
        limit: i32,
        side: LimitSide,
    },
}

/// Parse one pressure field the way a browser integer parse reads a
/// number input: leading whitespace and an optional sign are skipped,
/// then digits are read up to the first other character. `120.9` reads
/// as 120 and `1e2` as 1. Text with no leading digits is rejected.
/// Values too large for `i32` saturate and fail the range check later.
pub fn parse_pressure(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    let digit_count = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digit_count == 0 {
        return None;
    }

    let negative = trimmed.starts_with('-');
    let literal = &trimmed[..trimmed.len() - unsigned.len() + digit_count];
    Some(literal.parse::<i32>().unwrap_or(if negative { i32::MIN } else { i32::MAX }))
}

/// Turn raw form text into a reading and validate it
pub fn parse_form(form: &ReadingForm) -> Result<Reading, ReadingError> {
    let (Some(systolic), Some(diastolic)) = (parse_pressure(&form.systolic), parse_pressure(&form.diastolic)) else {
        warn!(systolic = %form.systolic, diastolic = %form.diastolic, "Rejected non-numeric reading");
        return Err(ReadingError::InvalidInput);
    };

    let reading = Reading::new(systolic, diastolic, form.context);
    validate_reading(&reading)?;
    Ok(reading)
}

/// Check a parsed reading. Checks run in a fixed order and the first
/// failure wins: consistency, then the systolic range, then the
/// diastolic range.
pub fn validate_reading(reading: &Reading) -> Result<(), ReadingError> {
    if reading.diastolic > reading.systolic {
        warn!(systolic = reading.systolic, diastolic = reading.diastolic, "Diastolic above systolic");
        return Err(ReadingError::InconsistentReading {
            systolic: reading.systolic,
            diastolic: reading.diastolic,
        });
    }

    if let Err(validation_errors) = reading.validate() {
        let field_errors = validation_errors.field_errors();
        let error = if field_errors.contains_key("systolic") {
            out_of_range(PressureField::Systolic, reading.systolic, SYSTOLIC_MINIMUM, SYSTOLIC_MAXIMUM)
        } else {
            out_of_range(PressureField::Diastolic, reading.diastolic, DIASTOLIC_MINIMUM, DIASTOLIC_MAXIMUM)
        };
        warn!(error = %error, "Reading out of range");
        return Err(error);
    }

    Ok(())
}

fn out_of_range(field: PressureField, value: i32, minimum: i32, maximum: i32) -> ReadingError {
    if value < minimum {
        ReadingError::OutOfRange { field, value, limit: minimum, side: LimitSide::Minimum }
    } else {
        ReadingError::OutOfRange { field, value, limit: maximum, side: LimitSide::Maximum }
    }
}
