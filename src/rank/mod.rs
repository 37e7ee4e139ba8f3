//! Candidate ranking by recency

use crate::domain::Candidate;
use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Order candidates most recent first and attach their display labels.
///
/// Ties keep no particular order.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    for candidate in &mut candidates {
        candidate.label = display_label(candidate);
    }
    candidates
}

/// `"<date> <relative path> [<repository>]"` with the date in local time.
pub fn display_label(candidate: &Candidate) -> String {
    format!(
        "{} {} [{}]",
        format_day(candidate.modified_at),
        candidate.relative_path,
        candidate.repository
    )
}

fn format_day(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn at(y: i32, m: u32, d: u32, h: u32) -> SystemTime {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid local time").into()
    }

    fn candidate(rel: &str, repo: &str, modified_at: SystemTime) -> Candidate {
        let path = PathBuf::from(format!("/{repo}/.hiden/{rel}"));
        Candidate::new(path, rel.into(), repo.into(), modified_at)
    }

    #[test]
    fn rank_orders_most_recent_first() {
        let ranked = rank_candidates(vec![
            candidate("a.md", "p1", at(2025, 12, 1, 12)),
            candidate("c.md", "p2", at(2025, 12, 3, 12)),
            candidate("b.md", "p1", at(2025, 12, 2, 12)),
        ]);

        let order: Vec<&str> = ranked.iter().map(|c| c.relative_path.as_str()).collect();
        assert_eq!(order, vec!["c.md", "b.md", "a.md"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].modified_at >= pair[1].modified_at);
        }
    }

    #[test]
    fn rank_attaches_labels() {
        let ranked = rank_candidates(vec![
            candidate("notes/todo.md", "my-project", at(2025, 12, 4, 9)),
            candidate("memo.md", "other", at(2025, 12, 4, 8)),
        ]);

        assert_eq!(ranked[0].label, "2025-12-04 notes/todo.md [my-project]");
        assert_eq!(ranked[1].label, "2025-12-04 memo.md [other]");
    }

    #[test]
    fn label_truncates_to_calendar_day() {
        let late = candidate("late.sh", "repo", at(2025, 1, 31, 23));
        assert!(display_label(&late).starts_with("2025-01-31 "));
    }

    #[test]
    fn rank_empty_set() {
        assert!(rank_candidates(Vec::new()).is_empty());
    }
}
