pub mod sigmoid;

use crate::types::feature::{FeatureVector, FIELD_COUNT};
use crate::types::scoring::{Prediction, ScoreResult, Tier};

pub const INTERCEPT: f64 = -28.841797314668007;

/// Per-feature weights in coefficient order (see `Field::ALL`).
pub const WEIGHTS: [f64; FIELD_COUNT] = [
    0.1079845539174013,
    1.225804047346464,
    -0.010188111356505292,
    0.04235407811768269,
    -0.010663467448247333,
    0.6457323393079181,
    0.6859962350066806,
];

pub const EXCELLENT_THRESHOLD: f64 = 80.0;
pub const GOOD_THRESHOLD: f64 = 60.0;

pub fn linear_score(features: &FeatureVector) -> f64 {
    features
        .as_array()
        .iter()
        .zip(WEIGHTS.iter())
        .fold(INTERCEPT, |acc, (x, w)| acc + x * w)
}

/// Total over finite inputs; the result is always within [0, 100].
pub fn compute(features: &FeatureVector) -> ScoreResult {
    let raw_linear_score = linear_score(features);
    let probability = sigmoid::logistic(raw_linear_score);
    let percentage = (probability * 100.0).clamp(0.0, 100.0);
    tracing::debug!(raw = raw_linear_score, probability, percentage, "computed score");
    ScoreResult {
        raw_linear_score,
        probability,
        percentage,
    }
}

pub fn evaluate(features: FeatureVector) -> Prediction {
    let score = compute(&features);
    Prediction::new(features, score, classify(score.percentage))
}

pub fn classify(percentage: f64) -> Tier {
    if percentage >= EXCELLENT_THRESHOLD {
        Tier::Excellent
    } else if percentage >= GOOD_THRESHOLD {
        Tier::Good
    } else {
        Tier::NeedsImprovement
    }
}
