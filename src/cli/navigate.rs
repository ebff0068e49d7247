//! `navigate` command
//!
//! Prints the page a month change leads to.

use clap::Args;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::models::BudgetMonth;
use crate::session::MonthNavigation;

/// Arguments of the `navigate` command
#[derive(Args, Debug)]
pub struct NavigateArgs {
    /// Month to show (YYYY-MM)
    pub month: String,

    /// Page path; defaults to the configured submit path
    #[arg(short, long)]
    pub path: Option<String>,
}

/// Resolve the navigation target for the arguments
pub fn resolve(args: &NavigateArgs, settings: &Settings) -> BudgetResult<MonthNavigation> {
    let month = BudgetMonth::parse(&args.month)?;
    let path = args.path.as_deref().unwrap_or(&settings.submit_path);
    Ok(MonthNavigation::new(path, month))
}

/// Handle the `navigate` command
pub fn handle_navigate_command(args: NavigateArgs, settings: &Settings) -> BudgetResult<()> {
    let navigation = resolve(&args, settings)?;
    println!("{}", navigation);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_path() {
        let args = NavigateArgs {
            month: "2025-03".into(),
            path: None,
        };
        let nav = resolve(&args, &Settings::default()).unwrap();
        assert_eq!(nav.target(), "/budget-setup?month=2025-03");
    }

    #[test]
    fn test_resolve_custom_path_and_bad_month() {
        let args = NavigateArgs {
            month: "2024-12".into(),
            path: Some("/plan".into()),
        };
        assert_eq!(
            resolve(&args, &Settings::default()).unwrap().target(),
            "/plan?month=2024-12"
        );

        let bad = NavigateArgs {
            month: "2024-13".into(),
            path: None,
        };
        assert!(resolve(&bad, &Settings::default()).is_err());
    }
}
