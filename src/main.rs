use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use budget_setup::cli::{
    handle_navigate_command, handle_plan_command, handle_replay_command, NavigateArgs, PlanArgs,
    ReplayArgs,
};
use budget_setup::config::{SetupPaths, Settings};
use budget_setup::logging::{self, LogTarget};
use budget_setup::models::{BudgetMonth, ReconcileMode};
use budget_setup::services::submission::load_categories;
use budget_setup::services::{FileSubmitter, FormSubmitter, Reconciler, Submission, WriterSubmitter};
use budget_setup::session::BudgetForm;

#[derive(Parser)]
#[command(
    name = "budget-setup",
    version,
    about = "Set up a monthly budget and split it into categories",
    long_about = "budget-setup lets you enter a total monthly budget and allocate it \
                  to categories. In strict mode allocations can never exceed the total \
                  and the unallocated remainder is tracked as an automatic Extra category."
)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui(TuiArgs),

    /// Build a budget from arguments and print the submission
    Plan(PlanArgs),

    /// Replay a scripted session from a YAML or JSON file
    Replay(ReplayArgs),

    /// Print the page a month change navigates to
    Navigate(NavigateArgs),

    /// Show current configuration and paths
    Config,
}

#[derive(Args)]
struct TuiArgs {
    /// Reconciliation mode (strict or lenient)
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<ReconcileMode>,

    /// Write submissions to this file instead of printing on exit
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Previously submitted categories JSON to start from
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<ReconcileMode, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SetupPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui(args)) => {
            paths.ensure_directories()?;
            let log_file = paths.log_file();
            logging::init(LogTarget::File(&log_file), cli.verbose)?;
            run_tui(args, &settings)?;
        }
        Some(Commands::Plan(args)) => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            handle_plan_command(args, &settings)?;
        }
        Some(Commands::Replay(args)) => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            handle_replay_command(args, &settings)?;
        }
        Some(Commands::Navigate(args)) => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            handle_navigate_command(args, &settings)?;
        }
        Some(Commands::Config) => {
            println!("budget-setup Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Mode:              {}", settings.mode);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Category options:  {}", settings.category_options.join(", "));
            println!(
                "  Flash timing:      {}ms visible, {}ms fade",
                settings.flash.display_ms, settings.flash.fade_ms
            );
            println!("  Submit path:       {}", settings.submit_path);
        }
        None => {
            println!("budget-setup - Monthly budget setup");
            println!();
            println!("Run 'budget-setup --help' for usage information.");
            println!("Run 'budget-setup tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

fn run_tui(args: TuiArgs, settings: &Settings) -> Result<()> {
    let mut reconciler = Reconciler::new(args.mode.unwrap_or(settings.mode));
    if let Some(path) = &args.seed {
        reconciler.seed(&load_categories(path)?)?;
    }
    let form = BudgetForm::with_reconciler(settings, BudgetMonth::current(), reconciler);

    let submitter: Box<dyn FormSubmitter> = match &args.out {
        Some(path) => Box::new(FileSubmitter::new(path.clone())),
        None => Box::new(Vec::<Submission>::new()),
    };

    let last = budget_setup::tui::run_tui(settings, form, submitter)?;

    // Without --out the submission is printed once the terminal is restored
    if args.out.is_none() {
        if let Some(submission) = last {
            WriterSubmitter::new(io::stdout()).submit(&submission)?;
        }
    }

    Ok(())
}
