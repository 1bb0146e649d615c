use crate::error::PredictorError;
use serde::Deserialize;

pub const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictorConfig {
    pub scoring: Option<ScoringConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub missing_fields: MissingFieldPolicy,
}

/// What to do with a field that does not parse when the vector is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    #[default]
    Coerce,
    Reject,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormatSetting>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatSetting {
    Md,
    Json,
}

impl PredictorConfig {
    pub fn missing_fields(&self) -> MissingFieldPolicy {
        self.scoring
            .as_ref()
            .map(|scoring| scoring.missing_fields)
            .unwrap_or_default()
    }

    pub fn format(&self) -> Option<OutputFormatSetting> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn delay_ms(&self) -> u64 {
        self.output
            .as_ref()
            .and_then(|output| output.delay_ms)
            .unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), PredictorError> {
        if let Some(delay_ms) = self.output.as_ref().and_then(|output| output.delay_ms) {
            if delay_ms > MAX_DELAY_MS {
                return Err(PredictorError::ConfigParse(format!(
                    "output.delay_ms must be at most {} (found {})",
                    MAX_DELAY_MS, delay_ms
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: PredictorConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.missing_fields(), MissingFieldPolicy::Coerce);
        assert_eq!(cfg.delay_ms(), 0);
        assert!(cfg.format().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parses_all_sections() {
        let cfg: PredictorConfig = toml::from_str(
            r#"
[scoring]
missing_fields = "reject"

[output]
format = "json"
delay_ms = 500
"#,
        )
        .expect("config should parse");
        assert_eq!(cfg.missing_fields(), MissingFieldPolicy::Reject);
        assert_eq!(cfg.format(), Some(OutputFormatSetting::Json));
        assert_eq!(cfg.delay_ms(), 500);
    }

    #[test]
    fn rejects_unknown_policy() {
        let result: Result<PredictorConfig, _> = toml::from_str(
            r#"
[scoring]
missing_fields = "guess"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<PredictorConfig, _> = toml::from_str(
            r#"
[scoring]
intercept = 1.0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_excessive_delay() {
        let cfg: PredictorConfig = toml::from_str(
            r#"
[output]
delay_ms = 60000
"#,
        )
        .expect("config should parse");
        assert!(matches!(
            cfg.validate(),
            Err(PredictorError::ConfigParse(message)) if message.contains("output.delay_ms")
        ));
    }
}
