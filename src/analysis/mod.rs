pub mod soil;

pub use soil::{SoilAnalyzer, SoilAssessment, SoilClassification, SoilError, Urgency};
