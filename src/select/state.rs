//! Selector state and its reducer.

use super::filter::filter_indices;
use super::viewport::{list_height, visible_window};
use super::Selection;
use crate::domain::Candidate;
use std::ops::Range;

/// Longest query the input box accepts, in characters.
pub const QUERY_CHAR_LIMIT: usize = 200;

/// One user intent, already decoded from a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    DeleteWord,
    ClearQuery,
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    Resize { rows: u16 },
}

/// Query, cursor and filtered view over an immutable candidate list.
#[derive(Debug)]
pub struct SelectorState<'a> {
    candidates: &'a [Candidate],
    query: String,
    filtered: Vec<usize>,
    cursor: usize,
    height: usize,
}

impl<'a> SelectorState<'a> {
    pub fn new(candidates: &'a [Candidate]) -> Self {
        Self {
            candidates,
            query: String::new(),
            filtered: (0..candidates.len()).collect(),
            cursor: 0,
            height: list_height(0),
        }
    }

    /// Start with `query` already typed.
    pub fn with_query(mut self, query: &str) -> Self {
        for ch in query.chars() {
            self.push_char(ch);
        }
        self.refilter();
        self
    }

    /// Apply one action. Returns the outcome once the session has ended.
    pub fn apply(&mut self, action: Action) -> Option<Selection<'a>> {
        match action {
            Action::Insert(ch) => {
                if self.push_char(ch) {
                    self.refilter();
                }
            }
            Action::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            Action::DeleteWord => {
                let kept = self
                    .query
                    .trim_end()
                    .char_indices()
                    .rev()
                    .find(|(_, c)| c.is_whitespace())
                    .map_or(0, |(i, c)| i + c.len_utf8());
                if kept < self.query.len() {
                    self.query.truncate(kept);
                    self.refilter();
                }
            }
            Action::ClearQuery => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.refilter();
                }
            }
            Action::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::MoveDown => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                }
            }
            Action::Confirm => return self.current().map(Selection::Selected),
            Action::Cancel => return Some(Selection::Cancelled),
            Action::Resize { rows } => {
                self.height = list_height(rows);
            }
        }
        None
    }

    fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() || self.query.chars().count() >= QUERY_CHAR_LIMIT {
            return false;
        }
        self.query.push(ch);
        true
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(self.candidates, &self.query);
        if self.cursor >= self.filtered.len() {
            self.cursor = 0;
        }
    }

    /// Candidate under the cursor, if any match.
    pub fn current(&self) -> Option<&'a Candidate> {
        let candidates: &'a [Candidate] = self.candidates;
        self.filtered.get(self.cursor).map(|&i| &candidates[i])
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    pub fn matched(&self) -> usize {
        self.filtered.len()
    }

    /// Number of list rows the current terminal allows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Filtered positions that fit on screen around the cursor.
    pub fn window(&self) -> Range<usize> {
        visible_window(self.cursor, self.height, self.filtered.len())
    }

    /// Candidate at `pos` in the filtered view.
    pub fn matched_at(&self, pos: usize) -> Option<&'a Candidate> {
        let candidates: &'a [Candidate] = self.candidates;
        self.filtered.get(pos).map(|&i| &candidates[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn labeled(labels: &[&str]) -> Vec<Candidate> {
        labels
            .iter()
            .map(|label| {
                let mut c = Candidate::new(
                    PathBuf::from(format!("/path/{label}")),
                    label.to_string(),
                    "repo".to_string(),
                    SystemTime::UNIX_EPOCH,
                );
                c.label = label.to_string();
                c
            })
            .collect()
    }

    fn type_text(state: &mut SelectorState<'_>, text: &str) {
        for ch in text.chars() {
            assert_eq!(state.apply(Action::Insert(ch)), None);
        }
    }

    #[test]
    fn starts_with_full_list() {
        let items = labeled(&["a [r]", "b [r]", "c [r]"]);
        let state = SelectorState::new(&items);
        assert_eq!(state.query(), "");
        assert_eq!(state.matched(), 3);
        assert_eq!(state.total(), 3);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.current().map(|c| c.label.as_str()), Some("a [r]"));
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let items = labeled(&["a [r]", "b [r]", "c [r]"]);
        let mut state = SelectorState::new(&items);

        state.apply(Action::MoveUp);
        assert_eq!(state.cursor(), 0);

        state.apply(Action::MoveDown);
        state.apply(Action::MoveDown);
        state.apply(Action::MoveDown);
        assert_eq!(state.cursor(), 2);

        state.apply(Action::MoveUp);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn move_down_on_empty_view_is_a_no_op() {
        let items = labeled(&["a [r]"]);
        let mut state = SelectorState::new(&items);
        type_text(&mut state, "zzz");
        assert_eq!(state.matched(), 0);

        state.apply(Action::MoveDown);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn cursor_resets_when_view_shrinks_past_it() {
        let items = labeled(&["memo one [r]", "note two [r]", "memo three [r]", "note four [r]"]);
        let mut state = SelectorState::new(&items);
        for _ in 0..3 {
            state.apply(Action::MoveDown);
        }
        assert_eq!(state.cursor(), 3);

        type_text(&mut state, "memo");
        assert_eq!(state.matched(), 2);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.current().map(|c| c.label.as_str()), Some("memo one [r]"));
    }

    #[test]
    fn cursor_kept_when_still_in_range() {
        let items = labeled(&["memo one [r]", "memo two [r]", "note [r]"]);
        let mut state = SelectorState::new(&items);
        state.apply(Action::MoveDown);

        type_text(&mut state, "memo");
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.current().map(|c| c.label.as_str()), Some("memo two [r]"));
    }

    #[test]
    fn backspace_widens_the_view() {
        let items = labeled(&["memo [r]", "note [r]"]);
        let mut state = SelectorState::new(&items);
        type_text(&mut state, "memox");
        assert_eq!(state.matched(), 0);

        state.apply(Action::Backspace);
        assert_eq!(state.query(), "memo");
        assert_eq!(state.matched(), 1);

        state.apply(Action::ClearQuery);
        assert_eq!(state.query(), "");
        assert_eq!(state.matched(), 2);

        state.apply(Action::Backspace);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn delete_word_drops_last_token() {
        let items = labeled(&["memo [p1]", "memo [p2]"]);
        let mut state = SelectorState::new(&items);
        type_text(&mut state, "memo p1");
        assert_eq!(state.matched(), 1);

        state.apply(Action::DeleteWord);
        assert_eq!(state.query(), "memo ");
        assert_eq!(state.matched(), 2);

        state.apply(Action::DeleteWord);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn query_is_capped() {
        let items = labeled(&["a [r]"]);
        let mut state = SelectorState::new(&items);
        type_text(&mut state, &"x".repeat(QUERY_CHAR_LIMIT + 10));
        assert_eq!(state.query().chars().count(), QUERY_CHAR_LIMIT);
    }

    #[test]
    fn control_characters_are_ignored() {
        let items = labeled(&["a [r]"]);
        let mut state = SelectorState::new(&items);
        state.apply(Action::Insert('\u{7}'));
        assert_eq!(state.query(), "");
    }

    #[test]
    fn confirm_returns_candidate_under_cursor() {
        let items = labeled(&["a [r]", "b [r]"]);
        let mut state = SelectorState::new(&items);
        state.apply(Action::MoveDown);

        let outcome = state.apply(Action::Confirm);
        assert_eq!(outcome, Some(Selection::Selected(&items[1])));
    }

    #[test]
    fn confirm_with_no_matches_keeps_running() {
        let items = labeled(&["a [r]"]);
        let mut state = SelectorState::new(&items);
        type_text(&mut state, "nothing");
        assert_eq!(state.apply(Action::Confirm), None);
    }

    #[test]
    fn cancel_ends_without_selection() {
        let items = labeled(&["a [r]"]);
        let mut state = SelectorState::new(&items);
        assert_eq!(state.apply(Action::Cancel), Some(Selection::Cancelled));
    }

    #[test]
    fn resize_changes_height_only() {
        let items = labeled(&["memo a [r]", "memo b [r]", "memo c [r]"]);
        let mut state = SelectorState::new(&items);
        type_text(&mut state, "memo");
        state.apply(Action::MoveDown);

        state.apply(Action::Resize { rows: 8 });
        assert_eq!(state.height(), 3);
        assert_eq!(state.query(), "memo");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn initial_query_filters_before_first_event() {
        let items = labeled(&["memo [r]", "note [r]"]);
        let state = SelectorState::new(&items).with_query("note");
        assert_eq!(state.matched(), 1);
        assert_eq!(state.matched_at(0).map(|c| c.label.as_str()), Some("note [r]"));
    }

    #[test]
    fn window_follows_cursor() {
        let labels: Vec<String> = (0..20).map(|i| format!("item{i} [r]")).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let items = labeled(&refs);
        let mut state = SelectorState::new(&items);
        state.apply(Action::Resize { rows: 9 });
        assert_eq!(state.window(), 0..4);

        for _ in 0..10 {
            state.apply(Action::MoveDown);
        }
        assert_eq!(state.window(), 8..12);

        for _ in 0..20 {
            state.apply(Action::MoveDown);
        }
        assert_eq!(state.window(), 16..20);
    }
}
