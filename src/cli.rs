use crate::types::config::MAX_DELAY_MS;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "placement",
    version,
    about = "Student placement probability predictor"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read settings from this file instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the seven form fields and score them
    Predict(PredictCommand),
    /// Score seven raw numbers in model order, without range checks
    Score(ScoreCommand),
    /// Check whether a single field edit would be accepted
    Check(CheckCommand),
    /// List the form fields and their ranges
    Fields,
    /// Fill in the form line by line on stdin
    Interactive(InteractiveCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct OutputArgs {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Pause before showing the result
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_DELAY_MS))]
    pub delay_ms: Option<u64>,
}

#[derive(Args)]
pub struct PredictCommand {
    /// IQ score (0-200)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub iq: String,
    /// CGPA (0-10, step 0.1)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub cgpa: String,
    /// Academic performance rating (1-10)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub academic: String,
    /// Internship experience (0 or 1)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub internship: String,
    /// Extra-curricular activities rating (1-10)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub extra: String,
    /// Communication skills rating (1-10)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub comm: String,
    /// Number of projects (0-50)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub projects: String,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// IQ, CGPA, academic, internship, extra, comm, projects
    #[arg(num_args = 7, value_name = "VALUE", allow_negative_numbers = true, required = true)]
    pub values: Vec<f64>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct CheckCommand {
    pub field: String,
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct InteractiveCommand {
    #[command(flatten)]
    pub output: OutputArgs,
}
