use crate::types::scoring::Prediction;

pub fn to_json(prediction: &Prediction) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(prediction)
}
