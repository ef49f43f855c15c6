use std::fmt;

use serde::{Deserialize, Serialize};

use super::blood_pressure::{MeasurementContext, Reading};

/// Severity tier assigned to a reading, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    /// Below the healthy minimums on both values
    Low,

    /// Healthy reading
    Healthy,

    /// Slightly raised
    Medium,

    /// High blood pressure
    High,

    /// Emergency level
    SuperHigh,
}

impl SeverityBand {
    /// CSS color used for the circle border and label
    pub fn color(&self) -> &'static str {
        match self {
            SeverityBand::SuperHigh => "#880808",
            SeverityBand::High => "#DC143C",
            SeverityBand::Medium => "#CC5500",
            SeverityBand::Healthy => "#228B22",
            SeverityBand::Low => "purple",
        }
    }

    /// Label shown under the circle
    pub fn label(&self) -> &'static str {
        match self {
            SeverityBand::SuperHigh => "REALLY HIGH! CALL EMERGENCY SERVICES!",
            SeverityBand::High => "HIGH!",
            SeverityBand::Medium => "Slightly raised",
            SeverityBand::Healthy => "HEALTHY!",
            SeverityBand::Low => "LOW!",
        }
    }

    /// Heartbeat animation period in seconds
    pub fn animation_speed(&self) -> f64 {
        match self {
            SeverityBand::SuperHigh => 0.2,
            SeverityBand::High => 0.5,
            SeverityBand::Medium => 1.0,
            SeverityBand::Healthy => 2.0,
            SeverityBand::Low => 0.5,
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityBand::SuperHigh => f.write_str("super high"),
            SeverityBand::High => f.write_str("high"),
            SeverityBand::Medium => f.write_str("medium"),
            SeverityBand::Healthy => f.write_str("healthy"),
            SeverityBand::Low => f.write_str("low"),
        }
    }
}

/// Minimum values that put a reading into a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThreshold {
    pub systolic_minimum: i32,
    pub diastolic_minimum: i32,
}

impl BandThreshold {
    pub const fn new(systolic_minimum: i32, diastolic_minimum: i32) -> Self {
        Self { systolic_minimum, diastolic_minimum }
    }

    /// Either value at or above its minimum is enough to enter the band
    pub fn matches(&self, systolic: i32, diastolic: i32) -> bool {
        systolic >= self.systolic_minimum || diastolic >= self.diastolic_minimum
    }
}

/// Band minimums for one measurement context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub super_high: BandThreshold,
    pub high: BandThreshold,
    pub medium: BandThreshold,
    pub healthy: BandThreshold,
}

impl ThresholdTable {
    /// Thresholds for home self-measurement
    pub const HOME: ThresholdTable = ThresholdTable {
        super_high: BandThreshold::new(170, 100),
        high: BandThreshold::new(135, 85),
        medium: BandThreshold::new(121, 81),
        healthy: BandThreshold::new(90, 60),
    };

    /// Thresholds for clinic measurement
    pub const CLINIC: ThresholdTable = ThresholdTable {
        super_high: BandThreshold::new(180, 120),
        high: BandThreshold::new(140, 90),
        medium: BandThreshold::new(121, 81),
        healthy: BandThreshold::new(90, 60),
    };

    pub fn for_context(context: MeasurementContext) -> &'static ThresholdTable {
        match context {
            MeasurementContext::Home => &Self::HOME,
            MeasurementContext::Clinic => &Self::CLINIC,
        }
    }

    /// Bands in scan order, most severe first
    pub fn bands(&self) -> [(SeverityBand, BandThreshold); 4] {
        [
            (SeverityBand::SuperHigh, self.super_high),
            (SeverityBand::High, self.high),
            (SeverityBand::Medium, self.medium),
            (SeverityBand::Healthy, self.healthy),
        ]
    }
}

/// What the results panel shows for a classified reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Assigned severity tier
    pub band: SeverityBand,

    /// Text label for the tier
    pub label: String,

    /// Reading rendered as `systolic/diastolic`
    pub display_value: String,

    /// CSS color for the tier
    pub color: String,

    /// Heartbeat animation period in seconds
    pub animation_speed: f64,
}

impl ClassificationResult {
    /// Build the result for a reading that has been assigned `band`
    pub fn new(reading: &Reading, band: SeverityBand) -> Self {
        Self {
            band,
            label: band.label().to_string(),
            display_value: reading.display_value(),
            color: band.color().to_string(),
            animation_speed: band.animation_speed(),
        }
    }

    /// CSS `animation` shorthand for the heartbeat circle
    pub fn animation_css(&self) -> String {
        format!("heartbeat-animation {}s infinite ease-in-out", self.animation_speed)
    }

    pub fn requires_emergency(&self) -> bool {
        self.band == SeverityBand::SuperHigh
    }
}
