//! CLI command handlers
//!
//! Bridges the clap argument parsing with the reconciler for the
//! non-interactive commands.

pub mod navigate;
pub mod plan;
pub mod replay;

pub use navigate::{handle_navigate_command, NavigateArgs};
pub use plan::{handle_plan_command, PlanArgs};
pub use replay::{handle_replay_command, ReplayArgs, ReplayScript, ReplayStep};
