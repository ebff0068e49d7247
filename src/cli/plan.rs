//! `plan` command
//!
//! Builds a budget non-interactively from command-line arguments and prints
//! the resulting table and submission.

use std::io;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::table::format_category_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, ReconcileMode};
use crate::services::submission::load_categories;
use crate::services::{Reconciler, WriterSubmitter};

/// Arguments of the `plan` command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Total monthly budget (e.g. "500" or "$1,250.00")
    #[arg(short, long)]
    pub total: String,

    /// Lock the total before adding categories
    #[arg(long)]
    pub lock: bool,

    /// Reconciliation mode (strict or lenient)
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<ReconcileMode>,

    /// Category allocation as NAME=AMOUNT (repeatable)
    #[arg(short = 'c', long = "category", value_name = "NAME=AMOUNT")]
    pub categories: Vec<String>,

    /// Delete a category by name after adding (repeatable)
    #[arg(long = "delete", value_name = "NAME")]
    pub deletes: Vec<String>,

    /// Previously submitted categories JSON to start from
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Print only the submission JSON
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn parse_mode(s: &str) -> Result<ReconcileMode, String> {
    s.parse()
}

/// Split a `NAME=AMOUNT` argument
pub fn parse_allocation(arg: &str) -> BudgetResult<(String, Money)> {
    let (name, amount) = arg
        .rsplit_once('=')
        .ok_or_else(|| BudgetError::Parse(format!("Expected NAME=AMOUNT, got '{}'", arg)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(BudgetError::CategoryRequired);
    }
    let amount = Money::parse(amount).map_err(|_| BudgetError::InvalidAmount)?;

    Ok((name.to_string(), amount))
}

/// Start a session for the plan, seeded if requested
pub fn start_session(args: &PlanArgs, settings: &Settings) -> BudgetResult<Reconciler> {
    let mut reconciler = Reconciler::new(args.mode.unwrap_or(settings.mode));
    if let Some(path) = &args.seed {
        let entries = load_categories(path)?;
        reconciler.seed(&entries)?;
    }
    Ok(reconciler)
}

/// Apply the total, allocations and deletions in order, stopping at the
/// first rejection
pub fn apply_plan(args: &PlanArgs, reconciler: &mut Reconciler) -> BudgetResult<()> {
    let total = Money::parse(&args.total).map_err(|_| BudgetError::InvalidTotal)?;
    if args.lock {
        reconciler.lock_budget(total)?;
    } else {
        reconciler.set_total_budget(total)?;
    }

    for arg in &args.categories {
        let (name, amount) = parse_allocation(arg)?;
        reconciler.add_or_update_category(&name, amount)?;
    }

    for name in &args.deletes {
        reconciler.delete_category_named(name)?;
    }

    Ok(())
}

/// Handle the `plan` command
pub fn handle_plan_command(args: PlanArgs, settings: &Settings) -> BudgetResult<()> {
    let mut reconciler = start_session(&args, settings)?;
    let result = apply_plan(&args, &mut reconciler);

    if !args.json {
        let table = reconciler.render_table();
        print!("{}", format_category_table(&table, &settings.currency_symbol));
        println!();
        println!(
            "Total budget: {}   Allocated: {}   Remaining: {}",
            reconciler.budget(),
            reconciler.state().allocated(),
            reconciler.state().remaining()
        );
        println!();
    }
    result?;

    let mut submitter = WriterSubmitter::new(io::stdout().lock());
    let submission = reconciler.submit(&args.total, &mut submitter)?;
    info!(total = %submission.total_budget, "plan submitted");

    Ok(())
}
