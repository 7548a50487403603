//! Delimiter inference.
//!
//! Each candidate is scored by its mean number of occurrences per sample
//! line and the highest mean wins. Candidates are tried in a fixed priority
//! order and only a strictly greater mean replaces the current best, so on
//! an exact tie the earlier candidate is kept.
//!
//! The detector does not check that the winner splits every line into the
//! same number of columns.

use tracing::debug;

/// Candidate delimiters in priority order.
pub const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

/// Maximum number of non-blank lines inspected.
pub const DETECTION_SAMPLE_LINES: usize = 10;

/// Delimiter used when there is nothing to inspect.
pub const DEFAULT_DELIMITER: char = ',';

/// Infers the field separator from the first non-blank lines.
pub fn detect_delimiter(lines: &[&str]) -> char {
    let sample: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .take(DETECTION_SAMPLE_LINES)
        .collect();

    if sample.is_empty() {
        return DEFAULT_DELIMITER;
    }

    let mut best = DEFAULT_DELIMITER;
    let mut best_mean = f64::NEG_INFINITY;

    for candidate in DELIMITER_CANDIDATES {
        let total: usize = sample
            .iter()
            .map(|line| line.matches(candidate).count())
            .sum();
        let mean = total as f64 / sample.len() as f64;

        if mean > best_mean {
            best = candidate;
            best_mean = mean;
        }
    }

    debug!(
        delimiter = ?best,
        mean = best_mean,
        sample_lines = sample.len(),
        "Detected delimiter"
    );

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_comma() {
        assert_eq!(detect_delimiter(&["a,b,c", "1,2,3", "4,5,6"]), ',');
    }

    #[test]
    fn test_detect_semicolon() {
        // European exports use commas as decimal separators
        assert_eq!(detect_delimiter(&["name;price", "tea;1,50", "cake;2,75"]), ';');
    }

    #[test]
    fn test_detect_tab_and_pipe() {
        assert_eq!(detect_delimiter(&["a\tb\tc", "1\t2\t3"]), '\t');
        assert_eq!(detect_delimiter(&["a|b", "1|2"]), '|');
    }

    #[test]
    fn test_empty_sample_defaults_to_comma() {
        assert_eq!(detect_delimiter(&[]), ',');
        assert_eq!(detect_delimiter(&["", "   "]), ',');
    }

    #[test]
    fn test_no_candidate_present_defaults_to_comma() {
        assert_eq!(detect_delimiter(&["single", "column"]), ',');
    }

    #[test]
    fn test_tie_keeps_priority_order() {
        // One comma and one semicolon per line: equal means
        assert_eq!(detect_delimiter(&["a,b;c", "1,2;3"]), ',');
        // Semicolon and pipe tie, comma absent
        assert_eq!(detect_delimiter(&["a;b|c"]), ';');
    }

    #[test]
    fn test_uses_mean_not_consistency() {
        // Pipes are inconsistent across lines but have the higher mean
        let lines = ["a,b", "c,d", "x|||||||y"];
        assert_eq!(detect_delimiter(&lines), '|');
    }

    #[test]
    fn test_only_first_ten_non_blank_lines_are_sampled() {
        let mut lines = vec![""; 3];
        lines.extend(std::iter::repeat_n("a;b", 10));
        lines.extend(std::iter::repeat_n("a,b,c,d,e,f,g,h", 50));
        assert_eq!(detect_delimiter(&lines), ';');
    }

    #[test]
    fn test_detection_is_deterministic() {
        let lines = ["id|name,age", "1|Ada,36", "2|Alan,41"];
        let first = detect_delimiter(&lines);
        for _ in 0..10 {
            assert_eq!(detect_delimiter(&lines), first);
        }
    }
}
