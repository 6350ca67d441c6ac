//! The interactive session core: one `QueryState`, one view, one command at a time.

mod command;
mod controller;

pub use command::{Command, Movement, SortCycle};
pub use controller::{Dispatch, Phase, SessionController, StatusLevel, StatusMessage};
