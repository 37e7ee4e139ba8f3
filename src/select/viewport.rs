//! Visible window math for the match list.

use std::ops::Range;

/// Rows kept free for the query line, the counter and the screen edges.
const RESERVED_ROWS: u16 = 5;
/// Height used when the terminal is too small or its size is unknown.
const FALLBACK_HEIGHT: usize = 10;

/// Number of list rows to show on a terminal `rows` lines tall.
pub fn list_height(rows: u16) -> usize {
    match rows.saturating_sub(RESERVED_ROWS) {
        0 => FALLBACK_HEIGHT,
        n => n as usize,
    }
}

/// Slice of `0..len` to render, centered on `cursor` where possible.
///
/// The window never starts before 0 or runs past `len`; near the tail it slides
/// back so it stays full.
pub fn visible_window(cursor: usize, height: usize, len: usize) -> Range<usize> {
    let mut start = cursor.saturating_sub(height / 2);
    let mut end = start + height;
    if end > len {
        end = len;
        start = end.saturating_sub(height);
    }
    start..end
}
