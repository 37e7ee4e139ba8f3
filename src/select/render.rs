//! Frame rendering for the selector.

use super::state::SelectorState;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "Search...";
const NO_MATCHES: &str = "No matches found";

const COLOR_MUTED: Color = Color::Indexed(241);
const COLOR_SELECTION_BG: Color = Color::Indexed(62);
const COLOR_SELECTION_FG: Color = Color::Indexed(230);

/// Paint the query box, the match counter and the visible slice of matches.
pub fn draw(frame: &mut Frame, state: &SelectorState<'_>, caret_visible: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(frame.area());

    let input = if state.query().is_empty() {
        Line::from(vec![
            Span::raw(PROMPT),
            Span::styled(PLACEHOLDER, Style::default().fg(COLOR_MUTED)),
        ])
    } else {
        Line::from(vec![Span::raw(PROMPT), Span::raw(state.query())])
    };
    frame.render_widget(Paragraph::new(input), chunks[0]);

    if caret_visible {
        let offset = (PROMPT.width() + state.query().width()).min(u16::MAX as usize) as u16;
        let x = chunks[0].x.saturating_add(offset).min(chunks[0].right().saturating_sub(1));
        frame.set_cursor_position((x, chunks[0].y));
    }

    let counter = format!("  {}/{}", state.matched(), state.total());
    frame.render_widget(
        Paragraph::new(Line::styled(counter, Style::default().fg(COLOR_MUTED))),
        chunks[1],
    );

    frame.render_widget(Paragraph::new(list_lines(state)), chunks[2]);
}

fn list_lines<'a>(state: &SelectorState<'a>) -> Vec<Line<'a>> {
    if state.matched() == 0 {
        return vec![Line::from(vec![
            Span::raw("  "),
            Span::styled(
                NO_MATCHES,
                Style::default().fg(COLOR_MUTED).add_modifier(Modifier::ITALIC),
            ),
        ])];
    }

    let selected = Style::default().bg(COLOR_SELECTION_BG).fg(COLOR_SELECTION_FG);
    state
        .window()
        .filter_map(|pos| state.matched_at(pos).map(|c| (pos, c)))
        .map(|(pos, candidate)| {
            if pos == state.cursor() {
                Line::styled(format!("> {}", candidate.label), selected)
            } else {
                Line::raw(format!("  {}", candidate.label))
            }
        })
        .collect()
}
