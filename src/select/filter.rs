//! AND token matching against display labels.

use crate::domain::Candidate;

/// Lowercased whitespace-separated tokens of `query`.
pub fn query_tokens(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// True when every token is a substring of `label`, ignoring case.
pub fn label_matches(label: &str, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let label = label.to_lowercase();
    tokens.iter().all(|token| label.contains(token.as_str()))
}

/// Indices of the candidates whose label matches `query`, in list order.
///
/// A query without tokens selects every candidate.
pub fn filter_indices(candidates: &[Candidate], query: &str) -> Vec<usize> {
    let tokens = query_tokens(query);
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| label_matches(&c.label, &tokens))
        .map(|(i, _)| i)
        .collect()
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

    fn matched<'a>(items: &'a [Candidate], query: &str) -> Vec<&'a str> {
        filter_indices(items, query).into_iter().map(|i| items[i].label.as_str()).collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let items = labeled(&["2025-12-04 memo.md [repo1]", "2025-12-03 notes.txt [repo2]"]);
        assert_eq!(filter_indices(&items, ""), vec![0, 1]);
    }

    #[test]
    fn whitespace_query_keeps_everything() {
        let items = labeled(&["a [x]", "b [y]", "c [z]"]);
        assert_eq!(filter_indices(&items, "   \t "), vec![0, 1, 2]);
    }

    #[test]
    fn single_keyword() {
        let items = labeled(&[
            "2025-12-04 memo.md [repo1]",
            "2025-12-03 notes.txt [repo2]",
            "2025-12-02 script.sh [repo3]",
        ]);
        assert_eq!(matched(&items, "memo"), vec!["2025-12-04 memo.md [repo1]"]);
    }

    #[test]
    fn all_tokens_must_match() {
        let items = labeled(&["A memo [p1]", "B memo [p2]", "A note [p1]"]);
        assert_eq!(matched(&items, "memo p1"), vec!["A memo [p1]"]);
    }

    #[test]
    fn and_search_across_fields() {
        let items = labeled(&[
            "2025-12-04 memo.md [my-project]",
            "2025-12-03 notes.txt [my-notes]",
            "2025-12-02 readme.md [other-project]",
            "2025-12-01 todo.md [my-project]",
        ]);
        assert_eq!(
            matched(&items, "md my"),
            vec!["2025-12-04 memo.md [my-project]", "2025-12-01 todo.md [my-project]"]
        );
    }

    #[test]
    fn case_insensitive() {
        let items = labeled(&["2025-12-04 README.md [repo1]", "2025-12-03 notes.txt [repo2]"]);
        assert_eq!(matched(&items, "readme"), vec!["2025-12-04 README.md [repo1]"]);
        assert_eq!(matched(&items, "NOTES"), vec!["2025-12-03 notes.txt [repo2]"]);
    }

    #[test]
    fn no_match() {
        let items = labeled(&["2025-12-04 memo.md [repo1]"]);
        assert!(filter_indices(&items, "nonexistent").is_empty());
    }

    #[test]
    fn same_query_same_result() {
        let items =
            labeled(&["x file3.txt [r]", "x file2.txt [r]", "y other [r]", "x file1.txt [r]"]);
        let first = filter_indices(&items, "file x");
        let second = filter_indices(&items, "file x");
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 1, 3]);
    }
}
