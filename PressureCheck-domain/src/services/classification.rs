use tracing::debug;

use crate::entities::blood_pressure::{MeasurementContext, Reading};
use crate::entities::classification::{ClassificationResult, SeverityBand, ThresholdTable};

/// Pick the severity band for a pair of values.
///
/// Bands are scanned from most to least severe and the first one whose
/// threshold matches wins. Values below every healthy minimum are `Low`.
pub fn categorize_blood_pressure(systolic: i32, diastolic: i32, context: MeasurementContext) -> SeverityBand {
    ThresholdTable::for_context(context)
        .bands()
        .into_iter()
        .find(|(_, threshold)| threshold.matches(systolic, diastolic))
        .map(|(band, _)| band)
        .unwrap_or(SeverityBand::Low)
}

/// Classify a validated reading
pub fn classify_reading(reading: &Reading) -> ClassificationResult {
    let band = categorize_blood_pressure(reading.systolic, reading.diastolic, reading.context);
    debug!(
        systolic = reading.systolic,
        diastolic = reading.diastolic,
        context = %reading.context,
        band = %band,
        "Classified reading"
    );
    ClassificationResult::new(reading, band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::blood_pressure::{DIASTOLIC_MAXIMUM, DIASTOLIC_MINIMUM, SYSTOLIC_MAXIMUM, SYSTOLIC_MINIMUM};

    const CONTEXTS: [MeasurementContext; 2] = [MeasurementContext::Home, MeasurementContext::Clinic];

    fn label(systolic: i32, diastolic: i32, context: MeasurementContext) -> String {
        classify_reading(&Reading::new(systolic, diastolic, context)).label
    }

    #[test]
    fn test_home_readings() {
        let home = MeasurementContext::Home;
        assert_eq!(label(120, 70, home), "HEALTHY!");
        assert_eq!(label(136, 80, home), "HIGH!");
        assert_eq!(label(170, 95, home), "REALLY HIGH! CALL EMERGENCY SERVICES!");
        assert_eq!(label(85, 55, home), "LOW!");
        assert_eq!(label(125, 75, home), "Slightly raised");
    }

    #[test]
    fn test_clinic_readings() {
        let clinic = MeasurementContext::Clinic;
        assert_eq!(label(141, 70, clinic), "HIGH!");
        assert_eq!(label(90, 60, clinic), "HEALTHY!");
        assert_eq!(label(136, 80, clinic), "Slightly raised");
        assert_eq!(label(175, 110, clinic), "HIGH!");
        assert_eq!(label(180, 70, clinic), "REALLY HIGH! CALL EMERGENCY SERVICES!");
    }

    #[test]
    fn test_diastolic_alone_triggers_band() {
        let home = MeasurementContext::Home;
        assert_eq!(categorize_blood_pressure(110, 100, home), SeverityBand::SuperHigh);
        assert_eq!(categorize_blood_pressure(110, 85, home), SeverityBand::High);
        assert_eq!(categorize_blood_pressure(110, 81, home), SeverityBand::Medium);
        assert_eq!(categorize_blood_pressure(80, 60, home), SeverityBand::Healthy);
    }

    #[test]
    fn test_band_minimums_are_inclusive() {
        for context in CONTEXTS {
            for (band, threshold) in ThresholdTable::for_context(context).bands() {
                assert_eq!(categorize_blood_pressure(threshold.systolic_minimum, 0, context), band);
                assert_eq!(categorize_blood_pressure(0, threshold.diastolic_minimum, context), band);
                assert!(categorize_blood_pressure(threshold.systolic_minimum - 1, 0, context) < band);
            }
        }
    }

    #[test]
    fn test_clinic_healthy_band_uses_both_minimums() {
        let clinic = MeasurementContext::Clinic;
        assert_eq!(categorize_blood_pressure(90, 50, clinic), SeverityBand::Healthy);
        assert_eq!(categorize_blood_pressure(89, 59, clinic), SeverityBand::Low);
    }

    #[test]
    fn test_classification_is_monotonic() {
        for context in CONTEXTS {
            for systolic in SYSTOLIC_MINIMUM..=SYSTOLIC_MAXIMUM {
                let mut previous = SeverityBand::Low;
                for diastolic in DIASTOLIC_MINIMUM..=DIASTOLIC_MAXIMUM {
                    let band = categorize_blood_pressure(systolic, diastolic, context);
                    assert!(band >= previous, "{}/{} ({}) dropped to {}", systolic, diastolic, context, band);
                    previous = band;
                }
            }

            for diastolic in DIASTOLIC_MINIMUM..=DIASTOLIC_MAXIMUM {
                let mut previous = SeverityBand::Low;
                for systolic in SYSTOLIC_MINIMUM..=SYSTOLIC_MAXIMUM {
                    let band = categorize_blood_pressure(systolic, diastolic, context);
                    assert!(band >= previous, "{}/{} ({}) dropped to {}", systolic, diastolic, context, band);
                    previous = band;
                }
            }
        }
    }

    #[test]
    fn test_result_fields() {
        let result = classify_reading(&Reading::new(136, 80, MeasurementContext::Home));
        assert_eq!(result.band, SeverityBand::High);
        assert_eq!(result.display_value, "136/80");
        assert_eq!(result.color, "#DC143C");
        assert_eq!(result.animation_speed, 0.5);
    }
}
