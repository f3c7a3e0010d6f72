//! Ordered "first success wins" rule evaluation.
//!
//! Each field rule is a sequence of candidates (patterns, catalog entries) tried in a fixed
//! order; the first one that yields an accepted value ends the scan. Later candidates are
//! never consulted once one succeeds.

use regex::Regex;

/// A compiled pattern paired with a validator over the captured text.
pub struct PatternRule {
    pub pattern: Regex,
    /// Capture group to read. Group 0 is the whole match.
    pub group: usize,
    pub accept: fn(&str) -> bool,
}

impl PatternRule {
    pub fn new(pattern: Regex, group: usize) -> Self {
        Self {
            pattern,
            group,
            accept: |_| true,
        }
    }

    pub fn with_validator(mut self, accept: fn(&str) -> bool) -> Self {
        self.accept = accept;
        self
    }

    /// The first match of this pattern in `haystack`, if it passes the validator.
    pub fn apply<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        let captured = self.pattern.captures(haystack)?.get(self.group)?.as_str();
        (self.accept)(captured).then_some(captured)
    }
}

/// Tries `candidates` in order and returns the first non-`None` result.
pub fn first_success<T, R>(
    candidates: impl IntoIterator<Item = T>,
    attempt: impl FnMut(T) -> Option<R>,
) -> Option<R> {
    candidates.into_iter().find_map(attempt)
}

/// Runs an ordered pattern cascade over one haystack.
pub fn first_pattern_match<'h>(rules: &[PatternRule], haystack: &'h str) -> Option<&'h str> {
    first_success(rules, |rule| rule.apply(haystack))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> PatternRule {
        PatternRule::new(Regex::new(r"(\d+)").unwrap(), 1)
    }

    fn words() -> PatternRule {
        PatternRule::new(Regex::new(r"([a-z]+)").unwrap(), 1)
    }

    #[test]
    fn test_earlier_rule_wins_even_if_later_matches_earlier_in_text() {
        let rules = vec![digits(), words()];
        assert_eq!(first_pattern_match(&rules, "abc 123"), Some("123"));
    }

    #[test]
    fn test_falls_through_to_next_rule() {
        let rules = vec![digits(), words()];
        assert_eq!(first_pattern_match(&rules, "abc"), Some("abc"));
    }

    #[test]
    fn test_rejected_capture_moves_to_next_rule() {
        let rules = vec![digits().with_validator(|s| s.len() > 5), words()];
        assert_eq!(first_pattern_match(&rules, "abc 123"), Some("abc"));
    }

    #[test]
    fn test_no_rule_matches() {
        let rules = vec![digits()];
        assert_eq!(first_pattern_match(&rules, "nothing here"), None);
    }

    #[test]
    fn test_first_success_stops_after_hit() {
        let mut attempts = 0;
        let hit = first_success([1, 2, 3], |n| {
            attempts += 1;
            (n == 2).then_some(n * 10)
        });
        assert_eq!(hit, Some(20));
        assert_eq!(attempts, 2);
    }
}
