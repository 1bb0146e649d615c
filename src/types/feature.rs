use crate::error::PredictorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const FIELD_COUNT: usize = 7;

/// One of the seven model inputs. Discriminants follow coefficient order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Iq = 0,
    Cgpa = 1,
    Academic = 2,
    Internship = 3,
    Extra = 4,
    Comm = 5,
    Projects = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Float,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl Field {
    /// Coefficient order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Iq,
        Field::Cgpa,
        Field::Academic,
        Field::Internship,
        Field::Extra,
        Field::Comm,
        Field::Projects,
    ];

    /// Order the form presents fields in. Note comm comes before extra here.
    pub const DISPLAY_ORDER: [Field; FIELD_COUNT] = [
        Field::Iq,
        Field::Cgpa,
        Field::Academic,
        Field::Internship,
        Field::Comm,
        Field::Extra,
        Field::Projects,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Iq => "iq",
            Field::Cgpa => "cgpa",
            Field::Academic => "academic",
            Field::Internship => "internship",
            Field::Extra => "extra",
            Field::Comm => "comm",
            Field::Projects => "projects",
        }
    }

    /// Column name the coefficients were fitted against.
    pub fn column(self) -> &'static str {
        match self {
            Field::Iq => "IQ",
            Field::Cgpa => "CGPA",
            Field::Academic => "Academic_Performance",
            Field::Internship => "Internship_Experience",
            Field::Extra => "Extra_Curricular_Score",
            Field::Comm => "Communication_Skills",
            Field::Projects => "Projects_Completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Iq => "IQ Score",
            Field::Cgpa => "CGPA",
            Field::Academic => "Academic Performance",
            Field::Internship => "Internship Experience",
            Field::Extra => "Extra-curricular Activities",
            Field::Comm => "Communication Skills",
            Field::Projects => "Number of Projects",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Field::Iq => "Intelligence Quotient (0-200)",
            Field::Cgpa => "Cumulative Grade Point Average (0-10)",
            Field::Academic => "Academic performance rating (1-10)",
            Field::Internship => "Internship experience (0=No, 1=Yes)",
            Field::Extra => "Extra-curricular activities rating (1-10)",
            Field::Comm => "Communication skills rating (1-10)",
            Field::Projects => "Number of technical projects (0 or more)",
        }
    }

    pub fn limits(self) -> FieldLimits {
        let (min, max, step) = match self {
            Field::Iq => (0.0, 200.0, None),
            Field::Cgpa => (0.0, 10.0, Some(0.1)),
            Field::Academic => (1.0, 10.0, None),
            Field::Internship => (0.0, 1.0, None),
            Field::Extra => (1.0, 10.0, None),
            Field::Comm => (1.0, 10.0, None),
            Field::Projects => (0.0, 50.0, None),
        };
        FieldLimits { min, max, step }
    }

    pub fn kind(self) -> NumberKind {
        match self {
            Field::Iq | Field::Cgpa => NumberKind::Float,
            _ => NumberKind::Integer,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let field = match normalized.as_str() {
            "iq" => Field::Iq,
            "cgpa" => Field::Cgpa,
            "academic" | "academic_performance" => Field::Academic,
            "internship" | "internship_experience" => Field::Internship,
            "extra" | "extra_curricular" | "extra_curricular_score" => Field::Extra,
            "comm" | "communication" | "communication_skills" => Field::Comm,
            "projects" | "projects_completed" => Field::Projects,
            _ => return Err(PredictorError::UnknownField(s.trim().to_string())),
        };
        Ok(field)
    }
}

/// Immutable model input in coefficient order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FIELD_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FIELD_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, field: Field) -> f64 {
        self.0[field.index()]
    }

    pub fn as_array(&self) -> &[f64; FIELD_COUNT] {
        &self.0
    }
}
