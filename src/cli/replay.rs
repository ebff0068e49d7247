//! `replay` command
//!
//! Replays a scripted budget session from a YAML or JSON file. Rejected steps
//! are reported and the replay carries on, the same way the form keeps going
//! after showing an error.
//!
//! ```yaml
//! mode: strict
//! steps:
//!   - set_total: 500
//!   - add: { name: Food, amount: 200 }
//!   - delete: Food
//!   - submit: ~
//! ```

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Settings;
use crate::display::table::format_category_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, ReconcileMode};
use crate::services::{FileSubmitter, FormSubmitter, Reconciler, SubmittedCategory, WriterSubmitter};

/// Arguments of the `replay` command
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Script file (.yaml, .yml or .json)
    pub script: PathBuf,

    /// Write submissions to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// An amount written either as a number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(f64),
    Text(String),
}

impl AmountValue {
    /// The raw text a user would have typed
    pub fn as_input(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    pub fn to_money(&self) -> Option<Money> {
        match self {
            Self::Number(n) => Money::from_decimal(*n),
            Self::Text(s) => Money::parse(s).ok(),
        }
    }
}

impl fmt::Display for AmountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_input())
    }
}

/// One scripted user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayStep {
    SetTotal(AmountValue),
    Lock(AmountValue),
    Add { name: String, amount: AmountValue },
    Delete(String),
    /// Submit with the given total, or with the last total entered
    Submit(Option<AmountValue>),
}

impl fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetTotal(amount) => write!(f, "set total {}", amount),
            Self::Lock(amount) => write!(f, "lock {}", amount),
            Self::Add { name, amount } => write!(f, "add {} {}", name, amount),
            Self::Delete(name) => write!(f, "delete {}", name),
            Self::Submit(Some(total)) => write!(f, "submit {}", total),
            Self::Submit(None) => write!(f, "submit"),
        }
    }
}

/// A replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub mode: Option<ReconcileMode>,
    #[serde(default)]
    pub seed: Vec<SubmittedCategory>,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    /// Parse a script; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: &Path) -> BudgetResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BudgetError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(serde_yaml::from_str(&contents)?)
        }
    }
}

/// Counts of what happened during a replay
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: usize,
    pub submitted: usize,
}

/// Run a script, writing one outcome line per step to `out`
pub fn run_script(
    script: &ReplayScript,
    settings: &Settings,
    submitter: &mut dyn FormSubmitter,
    out: &mut dyn Write,
) -> BudgetResult<(Reconciler, ReplayReport)> {
    let mut reconciler = Reconciler::new(script.mode.unwrap_or(settings.mode));
    reconciler.seed(&script.seed)?;

    let mut report = ReplayReport::default();
    // Last text typed into the total field
    let mut total_input = String::new();

    for (index, step) in script.steps.iter().enumerate() {
        let result = apply_step(&mut reconciler, step, &mut total_input, submitter);

        match &result {
            Ok(()) => {
                report.applied += 1;
                if matches!(step, ReplayStep::Submit(_)) {
                    report.submitted += 1;
                }
                writeln!(out, "[{}] {}: ok", index + 1, step)?;
            }
            Err(e) => {
                report.rejected += 1;
                warn!(step = index + 1, error = %e, "replay step rejected");
                writeln!(out, "[{}] {}: rejected: {}", index + 1, step, e)?;
            }
        }
    }

    info!(
        applied = report.applied,
        rejected = report.rejected,
        submitted = report.submitted,
        "replay finished"
    );
    Ok((reconciler, report))
}

fn apply_step(
    reconciler: &mut Reconciler,
    step: &ReplayStep,
    total_input: &mut String,
    submitter: &mut dyn FormSubmitter,
) -> BudgetResult<()> {
    match step {
        ReplayStep::SetTotal(amount) => {
            *total_input = amount.as_input();
            let total = amount.to_money().ok_or(BudgetError::InvalidTotal)?;
            reconciler.set_total_budget(total)
        }
        ReplayStep::Lock(amount) => {
            if !reconciler.budget().locked {
                *total_input = amount.as_input();
            }
            let total = amount.to_money().ok_or(BudgetError::InvalidTotal)?;
            reconciler.lock_budget(total).map(|_| ())
        }
        ReplayStep::Add { name, amount } => {
            let amount = amount.to_money().ok_or(BudgetError::InvalidAmount)?;
            reconciler.add_or_update_category(name, amount).map(|_| ())
        }
        ReplayStep::Delete(name) => reconciler.delete_category_named(name).map(|_| ()),
        ReplayStep::Submit(total) => {
            if let Some(total) = total {
                *total_input = total.as_input();
            }
            reconciler.submit(total_input, submitter).map(|_| ())
        }
    }
}

/// Handle the `replay` command
pub fn handle_replay_command(args: ReplayArgs, settings: &Settings) -> BudgetResult<()> {
    let script = ReplayScript::load(&args.script)?;
    info!(script = %args.script.display(), steps = script.steps.len(), "replaying script");

    let mut stdout = io::stdout();
    let (reconciler, report) = match &args.out {
        Some(path) => {
            let mut submitter = FileSubmitter::new(path.clone());
            run_script(&script, settings, &mut submitter, &mut stdout)?
        }
        None => {
            let mut submitter = WriterSubmitter::new(io::stdout());
            run_script(&script, settings, &mut submitter, &mut stdout)?
        }
    };

    writeln!(stdout)?;
    let table = reconciler.render_table();
    write!(stdout, "{}", format_category_table(&table, &settings.currency_symbol))?;
    writeln!(
        stdout,
        "\n{} applied, {} rejected, {} submitted",
        report.applied, report.rejected, report.submitted
    )?;

    Ok(())
}
