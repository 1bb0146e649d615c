use crate::engine::WEIGHTS;
use crate::types::feature::Field;
use crate::types::scoring::Prediction;

pub fn to_markdown(prediction: &Prediction) -> String {
    let mut output = String::new();
    output.push_str("# Placement Prediction\n\n");
    output.push_str(&format!(
        "Placement probability: {:.1}%\n\n",
        prediction.score.percentage
    ));
    output.push_str(&format!("Tier: {}\n\n", prediction.tier));
    output.push_str(&format!("{}\n\n", prediction.feedback));

    output.push_str("## Inputs\n\n");
    for field in Field::DISPLAY_ORDER {
        output.push_str(&format!(
            "- {}: {}\n",
            field.label(),
            prediction.features.get(field)
        ));
    }
    output.push('\n');

    output.push_str("## Model\n\n");
    for field in Field::ALL {
        let value = prediction.features.get(field);
        output.push_str(&format!(
            "- {}: {} x {:.6} = {:+.6}\n",
            field.column(),
            value,
            WEIGHTS[field.index()],
            value * WEIGHTS[field.index()]
        ));
    }
    output.push_str(&format!(
        "- raw linear score: {:.6}\n- probability: {:.6}\n- evaluated at: {}\n",
        prediction.score.raw_linear_score,
        prediction.score.probability,
        prediction.evaluated_at.to_rfc3339()
    ));

    output
}
