/// Soil moisture classification and irrigation advice
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Moisture thresholds (percent). Boundary values belong to the lower bucket.
pub const DRY_BELOW: f64 = 30.0;
pub const OVERWATERED_ABOVE: f64 = 60.0;
pub const CRITICALLY_DRY_BELOW: f64 = 15.0;
pub const SEVERELY_OVERWATERED_ABOVE: f64 = 80.0;

const MOISTURE_MIN: f64 = 0.0;
const MOISTURE_MAX: f64 = 100.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SoilError {
    /// Moisture value is not a finite number or lies outside 0-100
    #[error("invalid soil moisture '{value}': {reason}")]
    InvalidInput { value: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilClassification {
    Dry,
    Optimal,
    Overwatered,
}

impl SoilClassification {
    pub fn from_moisture(soil_moisture: f64) -> Self {
        if soil_moisture < DRY_BELOW {
            SoilClassification::Dry
        } else if soil_moisture <= OVERWATERED_ABOVE {
            SoilClassification::Optimal
        } else {
            SoilClassification::Overwatered
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilClassification::Dry => "Dry",
            SoilClassification::Optimal => "Optimal",
            SoilClassification::Overwatered => "Overwatered",
        }
    }

    /// Farmer-facing advice for this state at the given moisture
    pub fn recommendation(&self, soil_moisture: f64) -> String {
        match self {
            SoilClassification::Dry => format!(
                "⚠️ IRRIGATION NEEDED: Soil moisture is at {:.1}%. \
                 Water your crops immediately. \
                 Increase irrigation frequency to prevent crop stress.",
                soil_moisture
            ),
            SoilClassification::Optimal => format!(
                "✅ CONDITIONS NORMAL: Soil moisture is at {:.1}%. \
                 Maintain current irrigation schedule. Crops are in ideal growing conditions.",
                soil_moisture
            ),
            SoilClassification::Overwatered => format!(
                "⚠️ REDUCE WATERING: Soil moisture is at {:.1}%. \
                 Stop irrigation for now to prevent waterlogging and root rot. \
                 Improve drainage if possible.",
                soil_moisture
            ),
        }
    }
}

impl fmt::Display for SoilClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// Optimal soil is never urgent; the extreme buckets escalate past a second threshold.
    pub fn for_classification(classification: SoilClassification, soil_moisture: f64) -> Self {
        match classification {
            SoilClassification::Optimal => Urgency::Low,
            SoilClassification::Dry if soil_moisture < CRITICALLY_DRY_BELOW => Urgency::High,
            SoilClassification::Dry => Urgency::Medium,
            SoilClassification::Overwatered if soil_moisture > SEVERELY_OVERWATERED_ABOVE => {
                Urgency::High
            }
            SoilClassification::Overwatered => Urgency::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilAssessment {
    pub soil_moisture: f64,
    pub classification: SoilClassification,
    pub recommendation: String,
    pub urgency: Urgency,
    pub valid: bool,
}

/// Classifier bound to a single validated moisture reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilAnalyzer {
    soil_moisture: f64,
}

impl SoilAnalyzer {
    /// Rejects NaN, infinities and anything outside 0-100 inclusive
    pub fn new(soil_moisture: f64) -> Result<Self, SoilError> {
        if !soil_moisture.is_finite() {
            return Err(SoilError::InvalidInput {
                value: soil_moisture.to_string(),
                reason: "must be a finite number",
            });
        }
        if !(MOISTURE_MIN..=MOISTURE_MAX).contains(&soil_moisture) {
            return Err(SoilError::InvalidInput {
                value: soil_moisture.to_string(),
                reason: "must be between 0 and 100",
            });
        }
        Ok(Self { soil_moisture })
    }

    pub fn soil_moisture(&self) -> f64 {
        self.soil_moisture
    }

    pub fn assess(&self) -> SoilAssessment {
        let classification = SoilClassification::from_moisture(self.soil_moisture);
        SoilAssessment {
            soil_moisture: self.soil_moisture,
            classification,
            recommendation: classification.recommendation(self.soil_moisture),
            urgency: Urgency::for_classification(classification, self.soil_moisture),
            valid: true,
        }
    }
}

impl FromStr for SoilAnalyzer {
    type Err = SoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| SoilError::InvalidInput {
                value: trimmed.to_string(),
                reason: "must be numeric",
            })?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(m: f64) -> SoilAssessment {
        SoilAnalyzer::new(m).unwrap().assess()
    }

    #[test]
    fn dry_below_thirty() {
        for m in [0.0, 5.0, 14.9, 15.0, 29.9, 29.999] {
            assert_eq!(assess(m).classification, SoilClassification::Dry, "m={}", m);
        }
    }

    #[test]
    fn optimal_between_thirty_and_sixty_inclusive() {
        for m in [30.0, 30.1, 45.0, 59.9, 60.0] {
            let a = assess(m);
            assert_eq!(a.classification, SoilClassification::Optimal, "m={}", m);
            assert_eq!(a.urgency, Urgency::Low, "m={}", m);
        }
    }

    #[test]
    fn overwatered_above_sixty() {
        for m in [60.001, 60.1, 75.0, 80.0, 80.1, 100.0] {
            assert_eq!(
                assess(m).classification,
                SoilClassification::Overwatered,
                "m={}",
                m
            );
        }
    }

    #[test]
    fn dry_urgency_thresholds() {
        assert_eq!(assess(14.9).urgency, Urgency::High);
        assert_eq!(assess(0.0).urgency, Urgency::High);
        assert_eq!(assess(15.0).urgency, Urgency::Medium);
        assert_eq!(assess(29.9).urgency, Urgency::Medium);
    }

    #[test]
    fn overwatered_urgency_thresholds() {
        assert_eq!(assess(60.5).urgency, Urgency::Medium);
        assert_eq!(assess(80.0).urgency, Urgency::Medium);
        assert_eq!(assess(80.1).urgency, Urgency::High);
        assert_eq!(assess(100.0).urgency, Urgency::High);
    }

    #[test]
    fn rejects_out_of_range_and_non_numeric() {
        assert!(matches!(
            SoilAnalyzer::new(-1.0),
            Err(SoilError::InvalidInput { .. })
        ));
        assert!(matches!(
            SoilAnalyzer::new(101.0),
            Err(SoilError::InvalidInput { .. })
        ));
        assert!(SoilAnalyzer::new(f64::NAN).is_err());
        assert!(SoilAnalyzer::new(f64::INFINITY).is_err());
        assert!(matches!(
            "wet".parse::<SoilAnalyzer>(),
            Err(SoilError::InvalidInput { .. })
        ));
        assert!("".parse::<SoilAnalyzer>().is_err());
    }

    #[test]
    fn parses_numeric_text() {
        let analyzer: SoilAnalyzer = " 42.5 ".parse().unwrap();
        assert_eq!(analyzer.soil_moisture(), 42.5);
    }

    #[test]
    fn assess_is_idempotent() {
        let analyzer = SoilAnalyzer::new(72.3).unwrap();
        assert_eq!(analyzer.assess(), analyzer.assess());
    }

    #[test]
    fn recommendation_matches_classification() {
        assert!(assess(10.0).recommendation.contains("IRRIGATION NEEDED"));
        assert!(assess(10.0).recommendation.contains("10.0%"));
        assert!(assess(45.0).recommendation.contains("Maintain current irrigation"));
        assert!(assess(90.0).recommendation.contains("Improve drainage"));
        assert!(assess(45.0).valid);
    }

    #[test]
    fn serializes_flat_record() {
        let json = serde_json::to_value(assess(45.0)).unwrap();
        assert_eq!(json["soil_moisture"], 45.0);
        assert_eq!(json["classification"], "Optimal");
        assert_eq!(json["urgency"], "Low");
        assert_eq!(json["valid"], true);
        assert!(json["recommendation"].is_string());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
