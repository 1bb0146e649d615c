pub mod json;
pub mod md;

use crate::error::PredictorError;
use crate::types::config::OutputFormatSetting;
use crate::types::scoring::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl From<OutputFormatSetting> for OutputFormat {
    fn from(setting: OutputFormatSetting) -> Self {
        match setting {
            OutputFormatSetting::Json => OutputFormat::Json,
            OutputFormatSetting::Md => OutputFormat::Md,
        }
    }
}

pub fn render(prediction: &Prediction, format: OutputFormat) -> Result<String, PredictorError> {
    match format {
        OutputFormat::Json => json::to_json(prediction).map_err(PredictorError::Json),
        OutputFormat::Md => Ok(md::to_markdown(prediction)),
    }
}
