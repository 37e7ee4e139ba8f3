//! Interactive selection over ranked candidates
//!
//! The selector is a single-threaded state machine: [`state::SelectorState`]
//! reduces one [`Action`] at a time, [`render`] paints the current state and
//! [`terminal`] feeds keystrokes from the user's terminal into it.

use crate::domain::Candidate;
use anyhow::Result;

pub mod filter;
pub mod render;
pub mod state;
pub mod terminal;
pub mod viewport;

pub use filter::filter_indices;
pub use state::{Action, SelectorState};
pub use terminal::TerminalPicker;

/// How a selection session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Selected(&'a Candidate),
    /// The user explicitly declined to pick.
    Cancelled,
}

/// Something that can choose one candidate out of a ranked list.
pub trait Picker {
    fn pick<'a>(&mut self, candidates: &'a [Candidate]) -> Result<Selection<'a>>;
}
