mod cli;
mod config;
mod engine;
mod error;
mod report;
mod session;
mod types;
mod validate;

use crate::error::PredictorError;
use crate::types::config::PredictorConfig;
use crate::types::feature::{FeatureVector, Field, FIELD_COUNT};
use crate::validate::{validate_edit, EditOutcome, FormState};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REJECTED: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn output_format(args: &cli::OutputArgs, cfg: &PredictorConfig) -> report::OutputFormat {
    match args.format {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => cfg
            .format()
            .map(report::OutputFormat::from)
            .unwrap_or(report::OutputFormat::Md),
    }
}

fn delay_ms(args: &cli::OutputArgs, cfg: &PredictorConfig) -> u64 {
    args.delay_ms.unwrap_or_else(|| cfg.delay_ms())
}

fn run() -> Result<i32, PredictorError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, cli.config.as_deref())?;
    tracing::info!(
        missing_fields = ?cfg.missing_fields(),
        delay_ms = cfg.delay_ms(),
        "configuration loaded"
    );

    match cli.command {
        cli::Commands::Predict(cmd) => {
            let mut form = FormState::new();
            for (field, raw) in [
                (Field::Iq, &cmd.iq),
                (Field::Cgpa, &cmd.cgpa),
                (Field::Academic, &cmd.academic),
                (Field::Internship, &cmd.internship),
                (Field::Extra, &cmd.extra),
                (Field::Comm, &cmd.comm),
                (Field::Projects, &cmd.projects),
            ] {
                if let EditOutcome::Rejected(reason) = validate_edit(field, raw) {
                    tracing::warn!("rejected --{field} value {raw:?}: {reason}");
                }
                form.apply_edit(field, raw);
            }

            let features = form.submit(cfg.missing_fields())?;
            let prediction = engine::evaluate(features);
            session::simulate_processing(delay_ms(&cmd.output, &cfg));
            let rendered = report::render(&prediction, output_format(&cmd.output, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let mut values = [0.0; FIELD_COUNT];
            for (slot, (field, value)) in values
                .iter_mut()
                .zip(Field::ALL.into_iter().zip(cmd.values))
            {
                if !value.is_finite() {
                    return Err(PredictorError::InvalidNumber {
                        field: field.key().to_string(),
                        text: value.to_string(),
                    });
                }
                *slot = value;
            }

            let prediction = engine::evaluate(FeatureVector::new(values));
            session::simulate_processing(delay_ms(&cmd.output, &cfg));
            let rendered = report::render(&prediction, output_format(&cmd.output, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let field = cmd.field.parse::<Field>()?;
            match validate_edit(field, &cmd.value) {
                EditOutcome::Accepted(value) => {
                    println!("accepted: {} = {:?}", field, value);
                    Ok(exit_code::SUCCESS)
                }
                EditOutcome::Rejected(reason) => {
                    let limits = field.limits();
                    println!(
                        "rejected: {} = {:?}, {} (range {}-{})",
                        field, cmd.value, reason, limits.min, limits.max
                    );
                    Ok(exit_code::REJECTED)
                }
            }
        }
        cli::Commands::Fields => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            session::write_fields(&mut out)?;
            out.flush()?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Interactive(cmd) => {
            let settings = session::SessionSettings {
                policy: cfg.missing_fields(),
                format: output_format(&cmd.output, &cfg),
                delay_ms: delay_ms(&cmd.output, &cfg),
            };
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = session::Session::new(settings, stdout.lock());
            session.run(stdin.lock())?;
            tracing::info!(
                ready = session.form().is_ready(),
                last_percentage = session.last().map(|prediction| prediction.score.percentage),
                "session ended"
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                PredictorError::IncompleteForm(_)
                | PredictorError::UnknownField(_)
                | PredictorError::InvalidNumber { .. } => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
