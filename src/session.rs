use crate::engine;
use crate::error::{PredictorError, Result};
use crate::report::{self, OutputFormat};
use crate::types::config::MissingFieldPolicy;
use crate::types::feature::Field;
use crate::types::scoring::Prediction;
use crate::validate::FormState;
use std::io::{BufRead, Write};
use std::time::Duration;

const HELP: &str = "\
commands:
  <field> <value>   set a field (also <field>=<value>)
  <field>           show a field's value
  clear <field>     empty a field
  show              show the whole form
  fields            list fields and their ranges
  submit            score the form
  help              this text
  quit              leave (also exit or end of input)";

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub policy: MissingFieldPolicy,
    pub format: OutputFormat,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Edit(Field, String),
    Get(Field),
    Clear(Field),
    Show,
    Fields,
    Submit,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some((name, value)) = line.split_once('=') {
        let field = name.parse::<Field>()?;
        return Ok(Some(Command::Edit(field, value.trim().to_string())));
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "show" => Command::Show,
        "fields" => Command::Fields,
        "submit" | "predict" => Command::Submit,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "clear" => Command::Clear(rest.parse::<Field>()?),
        _ => {
            let field = head.parse::<Field>()?;
            if rest.is_empty() {
                Command::Get(field)
            } else {
                Command::Edit(field, rest.to_string())
            }
        }
    };
    Ok(Some(command))
}

/// Line-oriented form: edits go through the validator, `submit` scores the
/// current state. Each submission replaces the previous result.
pub struct Session<W: Write> {
    form: FormState,
    last: Option<Prediction>,
    settings: SessionSettings,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(settings: SessionSettings, out: W) -> Self {
        Self {
            form: FormState::new(),
            last: None,
            settings,
            out,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn last(&self) -> Option<&Prediction> {
        self.last.as_ref()
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(self.out, "Placement Predictor. Type `help` for commands.")?;
        for line in input.lines() {
            let line = line?;
            if !self.handle_line(&line)? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` once the user asks to leave.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(true);
            }
        };

        match command {
            Command::Edit(field, value) => {
                // Rejected edits are silent; the previous value stays.
                self.form.apply_edit(field, &value);
            }
            Command::Get(field) => {
                writeln!(self.out, "{} = {}", field, display_value(self.form.get(field)))?;
            }
            Command::Clear(field) => self.form.clear(field),
            Command::Show => self.show()?,
            Command::Fields => write_fields(&mut self.out)?,
            Command::Submit => self.submit()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn show(&mut self) -> Result<()> {
        for field in Field::DISPLAY_ORDER {
            writeln!(
                self.out,
                "  {:<11} {}",
                field.key(),
                display_value(self.form.get(field))
            )?;
        }
        writeln!(
            self.out,
            "ready: {}",
            if self.form.is_ready() { "yes" } else { "no" }
        )?;
        if let Some(last) = &self.last {
            writeln!(
                self.out,
                "last result: {:.1}% ({})",
                last.score.percentage, last.tier
            )?;
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let prediction = match self.form.submit(self.settings.policy) {
            Ok(features) => engine::evaluate(features),
            Err(e @ PredictorError::IncompleteForm(_)) => {
                writeln!(self.out, "{e}")?;
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(error = %e, "submission failed");
                writeln!(self.out, "prediction failed: {e}")?;
                return Ok(());
            }
        };

        simulate_processing(self.settings.delay_ms);
        match report::render(&prediction, self.settings.format) {
            Ok(rendered) => writeln!(self.out, "{rendered}")?,
            Err(e) => {
                writeln!(self.out, "prediction failed: {e}")?;
                return Ok(());
            }
        }
        self.last = Some(prediction);
        Ok(())
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

pub fn write_fields<W: Write>(out: &mut W) -> Result<()> {
    for field in Field::DISPLAY_ORDER {
        let limits = field.limits();
        let step = limits
            .step
            .map(|step| format!(", step {step}"))
            .unwrap_or_default();
        writeln!(
            out,
            "{:<11} {} - {} (range {}-{}{})",
            field.key(),
            field.label(),
            field.description(),
            limits.min,
            limits.max,
            step
        )?;
    }
    Ok(())
}

/// Cosmetic pause before a result is shown.
pub fn simulate_processing(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}
