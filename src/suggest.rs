//! "Did you mean" hints for mistyped catalog names

/// Levenshtein edit distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows instead of the full matrix
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Closest candidates to `query` within `max_distance` edits, nearest first,
/// at most three. Comparison ignores case.
pub fn suggest<'a>(query: &str, candidates: &[&'a str], max_distance: usize) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();

    let mut scored: Vec<(&str, usize)> = candidates
        .iter()
        .map(|&c| (c, levenshtein_distance(&query, &c.to_lowercase())))
        .filter(|(_, d)| *d <= max_distance)
        .collect();
    scored.sort_by_key(|(_, d)| *d);

    scored.into_iter().take(3).map(|(c, _)| c).collect()
}

/// Render suggestions as a sentence, or `None` when there are none.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [one] => Some(format!("Did you mean '{}'?", one)),
        [a, b] => Some(format!("Did you mean '{}' or '{}'?", a, b)),
        [a, b, c, ..] => Some(format!("Did you mean '{}', '{}', or '{}'?", a, b, c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein_distance("warm", "warm"), 0);
        assert_eq!(levenshtein_distance("", "cool"), 4);
        assert_eq!(levenshtein_distance("cool", ""), 4);
        assert_eq!(levenshtein_distance("", ""), 0);
    }

    #[test]
    fn test_levenshtein_edits() {
        assert_eq!(levenshtein_distance("party", "parti"), 1);
        assert_eq!(levenshtein_distance("formal", "formall"), 1);
        assert_eq!(levenshtein_distance("autumn", "autmn"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("otoño", "otono"), 1);
    }

    #[test]
    fn test_suggest_typo() {
        let names = &["work", "casual", "party", "formal", "date"];
        assert_eq!(suggest("casul", names, 3)[0], "casual");
        assert_eq!(suggest("FORMAL", names, 3)[0], "formal");
    }

    #[test]
    fn test_suggest_orders_by_distance() {
        let names = &["gray", "green", "brown"];
        let got = suggest("grey", names, 3);
        assert_eq!(got[0], "gray");
        assert!(got.contains(&"green"));
    }

    #[test]
    fn test_suggest_no_match() {
        let names = &["fair", "medium", "deep"];
        assert!(suggest("xyzxyzxyz", names, 2).is_empty());
    }

    #[test]
    fn test_format_suggestion() {
        assert_eq!(format_suggestion(&[]), None);
        assert_eq!(format_suggestion(&["cool"]), Some("Did you mean 'cool'?".to_string()));
        assert_eq!(
            format_suggestion(&["cool", "warm"]),
            Some("Did you mean 'cool' or 'warm'?".to_string())
        );
        assert_eq!(
            format_suggestion(&["fair", "medium", "deep"]),
            Some("Did you mean 'fair', 'medium', or 'deep'?".to_string())
        );
    }
}
