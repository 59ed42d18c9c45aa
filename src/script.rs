//! Runs the demonstrations in order and writes what they print.

use std::io::{self, Write};

use colored::Colorize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalogue;
use crate::config::DemoConfig;
use crate::demos::{division_block, index_block, Outcome};
use crate::divide::{divide_checked, divide_or_fallback, DivideError, Quotient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Recover,
    Inline,
    Catalogue,
    Raise,
}

impl Step {
    pub fn title(self) -> &'static str {
        match self {
            Step::Recover => "Recovering divider",
            Step::Inline => "Inline recovery blocks",
            Step::Catalogue => "Error categories",
            Step::Raise => "Validating divider (unhandled)",
        }
    }
}

/// The full script. The unhandled raise ends normal flow, so it runs last.
pub const SCRIPT: [Step; 4] = [Step::Recover, Step::Inline, Step::Catalogue, Step::Raise];

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error(transparent)]
    Divide(#[from] DivideError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub struct Runner<'a, W: Write> {
    config: &'a DemoConfig,
    out: W,
    outcomes: Vec<(Step, Outcome)>,
}

impl<'a, W: Write> Runner<'a, W> {
    pub fn new(config: &'a DemoConfig, out: W) -> Self {
        Self {
            config,
            out,
            outcomes: Vec::new(),
        }
    }

    /// Every block run so far, in order, with what it did.
    pub fn outcomes(&self) -> &[(Step, Outcome)] {
        &self.outcomes
    }

    /// How many failures were caught and recovered from so far.
    pub fn recoveries(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_recovery()).count()
    }

    fn config(&self) -> &'a DemoConfig {
        self.config
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run_all(&mut self, steps: &[Step]) -> Result<(), ScriptError> {
        let result = steps.iter().enumerate().try_for_each(|(i, step)| {
            if i > 0 {
                writeln!(self.out)?;
            }
            self.run(*step)
        });
        self.log_summary(steps.len());
        result
    }

    fn log_summary(&self, steps: usize) {
        let silent = self
            .outcomes
            .iter()
            .filter(|(_, o)| *o == Outcome::Silent)
            .count();
        let propagated = self
            .outcomes
            .iter()
            .filter(|(_, o)| *o == Outcome::Propagated)
            .count();
        info!(
            steps,
            printed = self.recoveries(),
            silent,
            propagated,
            "script finished"
        );
    }

    pub fn run(&mut self, step: Step) -> Result<(), ScriptError> {
        debug!(?step, "running step");
        writeln!(self.out, "{}", format!("=== {} ===", step.title()).bold())?;
        match step {
            Step::Recover => self.recover(),
            Step::Inline => self.inline(),
            Step::Catalogue => self.catalogue(),
            Step::Raise => self.raise(),
        }
    }

    fn record(&mut self, step: Step, outcome: Outcome) -> Result<(), ScriptError> {
        if let Outcome::Printed(line) = &outcome {
            writeln!(self.out, "{}", line)?;
        }
        self.outcomes.push((step, outcome));
        Ok(())
    }

    fn recover(&mut self) -> Result<(), ScriptError> {
        let ops = &self.config().recover;
        match divide_or_fallback(ops.numerator, ops.denominator) {
            Quotient::Fallback(text) => {
                self.record(Step::Recover, Outcome::Printed(text.to_string()))
            }
            value => {
                writeln!(self.out, "{}", value)?;
                self.record(Step::Recover, Outcome::Silent)
            }
        }
    }

    fn inline(&mut self) -> Result<(), ScriptError> {
        let inline = &self.config().inline;

        let division = division_block(inline.numerator, inline.denominator);
        self.record(Step::Inline, division.into())?;

        let element = index_block(&inline.items, inline.index);
        if let Ok(value) = &element {
            writeln!(self.out, "{}", value)?;
        }
        self.record(Step::Inline, element.into())
    }

    fn catalogue(&mut self) -> Result<(), ScriptError> {
        for line in catalogue::render() {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn raise(&mut self) -> Result<(), ScriptError> {
        let ops = &self.config().raise;
        match divide_checked(ops.numerator, ops.denominator) {
            Ok(quotient) => {
                writeln!(self.out, "{:?}", quotient)?;
                self.record(Step::Raise, Outcome::Silent)
            }
            Err(e) => {
                error!(numerator = ops.numerator, "unhandled: {}", e);
                self.outcomes.push((Step::Raise, Outcome::Propagated));
                Err(e.into())
            }
        }
    }
}
