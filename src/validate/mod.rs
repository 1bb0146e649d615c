pub mod form;

use crate::types::feature::{Field, FieldLimits};
use std::fmt;

pub use form::FormState;

const STEP_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotANumber,
    OutOfRange,
    OffStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text to store, exactly as typed.
    Accepted(String),
    Rejected(Rejection),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::NotANumber => "not a number",
            Rejection::OutOfRange => "out of range",
            Rejection::OffStep => "off step",
        })
    }
}

/// Gates a single field edit. Empty text always passes so a field can be
/// cleared; anything else must parse to a finite number inside the field's
/// bounds (and on its step grid, if it has one).
pub fn validate_edit(field: Field, raw: &str) -> EditOutcome {
    if raw.is_empty() {
        return EditOutcome::Accepted(String::new());
    }

    let value = match parse_number(raw) {
        Some(value) => value,
        None => return EditOutcome::Rejected(Rejection::NotANumber),
    };

    let limits = field.limits();
    if value < limits.min || value > limits.max {
        return EditOutcome::Rejected(Rejection::OutOfRange);
    }
    if !on_step(value, &limits) {
        return EditOutcome::Rejected(Rejection::OffStep);
    }

    EditOutcome::Accepted(raw.to_string())
}

pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn on_step(value: f64, limits: &FieldLimits) -> bool {
    match limits.step {
        Some(step) => {
            let ratio = (value - limits.min) / step;
            (ratio - ratio.round()).abs() < STEP_TOLERANCE
        }
        None => true,
    }
}
