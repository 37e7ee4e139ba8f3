//! Terminal-backed picker.

use super::filter::filter_indices;
use super::render;
use super::state::{Action, SelectorState};
use super::{Picker, Selection};
use crate::domain::Candidate;
use crate::error::HidenError;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Write};
use std::time::Duration;

#[cfg(unix)]
use std::fs::OpenOptions;
#[cfg(not(unix))]
use std::io::IsTerminal;

type TuiBackend = CrosstermBackend<TuiWriter>;
type TuiTerminal = Terminal<TuiBackend>;

#[cfg(unix)]
type TuiWriter = std::fs::File;
#[cfg(not(unix))]
type TuiWriter = io::Stdout;

/// Caret blink period while waiting for input.
const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Runs the selector on the user's terminal.
#[derive(Debug, Default)]
pub struct TerminalPicker {
    initial_query: String,
}

impl TerminalPicker {
    /// Pre-fill the query box.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self { initial_query: query.into() }
    }
}

impl Picker for TerminalPicker {
    fn pick<'a>(&mut self, candidates: &'a [Candidate]) -> Result<Selection<'a>> {
        let writer = match attach() {
            Ok(writer) => writer,
            Err(err) => return fallback_selection(candidates, &self.initial_query, err),
        };

        let mut terminal = enter_terminal(writer)?;
        let mut state = SelectorState::new(candidates).with_query(&self.initial_query);
        let res = run_loop(&mut terminal, &mut state);
        let restored = exit_terminal(&mut terminal);
        let selection = res?;
        restored?;
        Ok(selection)
    }
}

/// Outcome when no terminal can be attached: the most recent candidate
/// matching `query`, or a [`HidenError::NoInteractiveSurface`] when none does.
///
/// An empty query matches everything.
pub fn fallback_selection<'a>(
    candidates: &'a [Candidate],
    query: &str,
    err: io::Error,
) -> Result<Selection<'a>> {
    tracing::debug!("No interactive terminal ({}); picking the most recent match", err);
    match filter_indices(candidates, query).first() {
        Some(&i) => Ok(Selection::Selected(&candidates[i])),
        None => Err(HidenError::NoInteractiveSurface(err).into()),
    }
}

/// Open the drawing surface and switch it to raw mode.
fn attach() -> io::Result<TuiWriter> {
    let writer = open_tty()?;
    terminal::enable_raw_mode()?;
    Ok(writer)
}

#[cfg(unix)]
fn open_tty() -> io::Result<TuiWriter> {
    // The controlling terminal stays reachable when stdout is captured.
    OpenOptions::new().read(true).write(true).open("/dev/tty")
}

#[cfg(not(unix))]
fn open_tty() -> io::Result<TuiWriter> {
    let stdout = io::stdout();
    if !stdout.is_terminal() {
        return Err(io::Error::other("stdout is not a terminal"));
    }
    Ok(stdout)
}

fn enter_terminal(mut writer: TuiWriter) -> Result<TuiTerminal> {
    if let Err(e) = execute!(writer, terminal::EnterAlternateScreen) {
        terminal::disable_raw_mode().ok();
        return Err(e).context("enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(writer)) {
        Ok(terminal) => terminal,
        Err(e) => {
            terminal::disable_raw_mode().ok();
            return Err(e).context("create terminal");
        }
    };
    if let Err(e) = clear_screen(&mut terminal) {
        exit_terminal(&mut terminal).ok();
        return Err(e);
    }
    Ok(terminal)
}

fn clear_screen<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    terminal.clear().context("clear terminal")
}

/// Undo raw mode and the alternate screen. Every step runs even when an
/// earlier one fails; the first failure is reported.
fn exit_terminal(terminal: &mut TuiTerminal) -> Result<()> {
    let raw = terminal::disable_raw_mode().context("disable raw mode");
    let screen = execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)
        .context("leave alternate screen");
    let cursor = terminal.show_cursor().context("show cursor");
    let flushed = terminal.backend_mut().flush().context("flush terminal");
    first_failure([raw, screen, cursor, flushed])
}

fn first_failure(steps: impl IntoIterator<Item = Result<()>>) -> Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

fn run_loop<'a>(
    terminal: &mut TuiTerminal,
    state: &mut SelectorState<'a>,
) -> Result<Selection<'a>> {
    let size = terminal.size().context("read terminal size")?;
    state.apply(Action::Resize { rows: size.height });

    let mut caret_visible = true;
    loop {
        terminal.draw(|f| render::draw(f, state, caret_visible)).context("draw")?;

        if !event::poll(BLINK_INTERVAL).context("poll")? {
            caret_visible = !caret_visible;
            continue;
        }
        let Some(action) = action_for(event::read().context("read event")?) else {
            continue;
        };
        caret_visible = true;
        if let Some(selection) = state.apply(action) {
            return Ok(selection);
        }
    }
}

/// Decode a terminal event into a selector action.
pub fn action_for(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key),
        Event::Resize(_, rows) => Some(Action::Resize { rows }),
        _ => None,
    }
}

fn key_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Cancel),
            KeyCode::Char('p') => Some(Action::MoveUp),
            KeyCode::Char('n') => Some(Action::MoveDown),
            KeyCode::Char('u') => Some(Action::ClearQuery),
            KeyCode::Char('w') | KeyCode::Backspace => Some(Action::DeleteWord),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(ch) => Some(Action::Insert(ch)),
        _ => None,
    }
}
