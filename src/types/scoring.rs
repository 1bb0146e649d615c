use crate::types::feature::FeatureVector;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub raw_linear_score: f64,
    pub probability: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent Prospects",
            Tier::Good => "Good Prospects",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            Tier::Excellent => {
                "Excellent! You have a high probability of successful placement. Keep up the great work!"
            }
            Tier::Good => {
                "Good prospects! Consider improving in areas where you scored lower to increase your chances."
            }
            Tier::NeedsImprovement => {
                "Focus on skill development and gaining more experience to improve your placement prospects."
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored submission ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub features: FeatureVector,
    pub score: ScoreResult,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub feedback: &'static str,
    pub evaluated_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(features: FeatureVector, score: ScoreResult, tier: Tier) -> Self {
        Self {
            features,
            score,
            tier,
            tier_label: tier.label(),
            feedback: tier.feedback(),
            evaluated_at: Utc::now(),
        }
    }
}
