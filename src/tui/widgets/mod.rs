//! Reusable widgets for the TUI

pub mod flash;
pub mod input;

pub use flash::{flash_area, FlashWidget};
pub use input::{InputKind, InputWidget, TextInput};
