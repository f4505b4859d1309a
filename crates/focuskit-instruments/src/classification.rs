use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AssessmentError;

/// Likelihood tier, ordered from least to most concerning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LikelihoodTier {
    Low,
    Moderate,
    High,
}

impl LikelihoodTier {
    /// Lower bound (inclusive) of each tier, as a percentage of the maximum
    /// total, highest first.
    pub const THRESHOLDS: [(f64, LikelihoodTier); 3] = [
        (70.0, LikelihoodTier::High),
        (50.0, LikelihoodTier::Moderate),
        (0.0, LikelihoodTier::Low),
    ];

    pub fn from_percentage(percentage: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map_or(LikelihoodTier::Low, |(_, tier)| *tier)
    }

    pub fn label(self) -> &'static str {
        match self {
            LikelihoodTier::Low => "Low Likelihood",
            LikelihoodTier::Moderate => "Moderate Likelihood",
            LikelihoodTier::High => "High Likelihood",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LikelihoodTier::Low => {
                "Your responses suggest a low likelihood of ADHD symptoms. However, if you're \
                 experiencing difficulties, it's always good to seek professional guidance."
            }
            LikelihoodTier::Moderate => {
                "Your responses indicate moderate ADHD symptoms. While not definitive, it may be \
                 helpful to discuss these results with a healthcare provider."
            }
            LikelihoodTier::High => {
                "Your responses suggest a high likelihood of ADHD symptoms. We strongly recommend \
                 consulting with a healthcare professional for a comprehensive evaluation."
            }
        }
    }

    pub fn recommendations(self) -> [&'static str; 4] {
        match self {
            LikelihoodTier::Low => [
                "Continue monitoring any changes in symptoms",
                "Practice healthy study and work habits",
                "Use productivity tools to stay organized",
                "Reach out if symptoms worsen or change",
            ],
            LikelihoodTier::Moderate => [
                "Monitor your symptoms over the next few weeks",
                "Try implementing ADHD management strategies",
                "Consider scheduling a consultation with a professional",
                "Use our AI Memory Aid to help with organization",
            ],
            LikelihoodTier::High => [
                "Schedule an appointment with a psychiatrist or psychologist",
                "Keep a journal of your symptoms and their impact",
                "Explore our ADHD Resource Hub for management strategies",
                "Consider joining support groups or communities",
            ],
        }
    }
}

impl fmt::Display for LikelihoodTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tier together with the narrative presented to the respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub tier: LikelihoodTier,
    pub percentage: f64,
    pub label: String,
    pub description: String,
    pub recommendations: Vec<String>,
}

/// `100 × total / max_total`.
pub fn percentage(total: u32, max_total: u32) -> Result<f64, AssessmentError> {
    if max_total == 0 {
        return Err(AssessmentError::InvalidInput(
            "maximum total must be positive".to_string(),
        ));
    }
    Ok(f64::from(total) * 100.0 / f64::from(max_total))
}

pub fn classify(total: u32, max_total: u32) -> Result<Classification, AssessmentError> {
    let percentage = percentage(total, max_total)?;
    let tier = LikelihoodTier::from_percentage(percentage);

    Ok(Classification {
        tier,
        percentage,
        label: tier.label().to_string(),
        description: tier.description().to_string(),
        recommendations: tier
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect(),
    })
}
