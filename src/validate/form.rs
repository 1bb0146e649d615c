use super::{parse_number, validate_edit, EditOutcome};
use crate::error::{PredictorError, Result};
use crate::types::config::MissingFieldPolicy;
use crate::types::feature::{FeatureVector, Field, NumberKind, FIELD_COUNT};

/// Raw text for each field as last accepted by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; FIELD_COUNT],
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the edit through the validator and stores it on acceptance.
    /// A rejected edit leaves the previous value in place.
    pub fn apply_edit(&mut self, field: Field, raw: &str) -> bool {
        match validate_edit(field, raw) {
            EditOutcome::Accepted(value) => {
                self.values[field.index()] = value;
                true
            }
            EditOutcome::Rejected(reason) => {
                tracing::debug!(%field, raw, ?reason, "edit rejected");
                false
            }
        }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn clear(&mut self, field: Field) {
        self.values[field.index()].clear();
    }

    /// Empty fields, in display order.
    pub fn missing(&self) -> Vec<Field> {
        Field::DISPLAY_ORDER
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Only checks for emptiness; bounds were enforced on edit.
    pub fn is_ready(&self) -> bool {
        self.values.iter().all(|value| !value.is_empty())
    }

    pub fn to_features(&self, policy: MissingFieldPolicy) -> Result<FeatureVector> {
        let mut values = [0.0; FIELD_COUNT];
        for field in Field::ALL {
            values[field.index()] = coerce(field, self.get(field), policy)?;
        }
        Ok(FeatureVector::new(values))
    }

    /// Readiness check followed by a fresh vector for scoring.
    pub fn submit(&self, policy: MissingFieldPolicy) -> Result<FeatureVector> {
        if !self.is_ready() {
            return Err(PredictorError::IncompleteForm(
                self.missing()
                    .into_iter()
                    .map(|field| field.key().to_string())
                    .collect(),
            ));
        }
        self.to_features(policy)
    }
}

fn coerce(field: Field, raw: &str, policy: MissingFieldPolicy) -> Result<f64> {
    let parsed = match field.kind() {
        NumberKind::Float => parse_number(raw),
        NumberKind::Integer => parse_leading_integer(raw),
    };
    match (parsed, policy) {
        (Some(value), _) => Ok(value),
        (None, MissingFieldPolicy::Coerce) => Ok(0.0),
        (None, MissingFieldPolicy::Reject) => Err(PredictorError::InvalidNumber {
            field: field.key().to_string(),
            text: raw.to_string(),
        }),
    }
}

/// Leading optional sign and decimal digits; anything after them is
/// ignored, so `"7.9"` is 7 and `"1e1"` is 1.
fn parse_leading_integer(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value = rest[..end].parse::<f64>().ok()?;
    Some(if negative { -value } else { value })
}
