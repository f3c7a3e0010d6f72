//! Field extractors. Each one reads the normalized text, never another extractor's output,
//! and returns `None` when nothing qualifies.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::cascade::{first_pattern_match, first_success, PatternRule};
use crate::extraction::catalogs::{
    DEGREE_TEMPLATES, MAX_SKILLS, MAX_TITLE_CHARS, NAME_BOILERPLATE, SKILLS, TITLE_KEYWORDS,
};
use crate::extraction::normalize::NormalizedText;

/// Lines scanned for a name, counting only lines with content.
pub const NAME_SCAN_LINES: usize = 10;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap()
});

static PHONE_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    [
        // NANP, optional country code
        r"\+?1?[-.\s]?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})",
        // international groupings
        r"\+?([0-9]{1,3})[-.\s]?([0-9]{3,4})[-.\s]?([0-9]{3,4})[-.\s]?([0-9]{3,4})",
        r"\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})",
    ]
    .iter()
    .map(|p| PatternRule::new(Regex::new(p).unwrap(), 0))
    .collect()
});

static NAME_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    [
        r"^([A-Z][a-z]+(?:\s[A-Z][a-z]+)+)$",
        r"^([A-Z\s]{4,30})$",
        r"^([A-Z][a-z]+\s[A-Z]\.\s[A-Z][a-z]+)$",
    ]
    .iter()
    .map(|p| PatternRule::new(Regex::new(p).unwrap(), 1).with_validator(plausible_name))
    .collect()
});

static EDUCATION_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    DEGREE_TEMPLATES
        .iter()
        .map(|t| PatternRule::new(Regex::new(&t.pattern()).unwrap(), 1))
        .collect()
});

static TITLE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TITLE_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!("(?i){}", regex::escape(kw))).unwrap())
        .collect()
});

static LOCATION_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    [
        r"([A-Z][a-z]+,\s*[A-Z]{2})",     // City, ST
        r"([A-Z][a-z]+,\s*[A-Z][a-z]+)", // City, State
    ]
    .iter()
    .map(|p| PatternRule::new(Regex::new(p).unwrap(), 1))
    .collect()
});

pub fn extract_email(text: &NormalizedText) -> Option<String> {
    EMAIL.find(&text.clean).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &NormalizedText) -> Option<String> {
    let raw = first_pattern_match(&PHONE_RULES, &text.clean)?;
    let phone: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | '.' | ' '))
        .collect();
    let phone = phone.trim();
    (!phone.is_empty()).then(|| phone.to_string())
}

pub fn extract_full_name(text: &NormalizedText) -> Option<String> {
    first_success(text.leading_non_empty(NAME_SCAN_LINES), |line| {
        if is_boilerplate(line) {
            return None;
        }
        first_pattern_match(&NAME_RULES, line).map(|name| title_case(name.trim()))
    })
}

pub fn extract_skills(text: &NormalizedText) -> Option<Vec<String>> {
    let haystack = text.clean.to_lowercase();
    let found: Vec<String> = SKILLS
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .take(MAX_SKILLS)
        .map(|skill| skill.to_string())
        .collect();
    (!found.is_empty()).then_some(found)
}

pub fn extract_education(text: &NormalizedText) -> Option<String> {
    first_pattern_match(&EDUCATION_RULES, &text.clean)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
}

/// The first catalog keyword whose surrounding run of letters and spaces is short enough.
///
/// The span is widened from the keyword's first occurrence only as far as letters and
/// whitespace continue, so it never reaches text separated from the keyword by punctuation
/// or digits.
pub fn extract_current_title(text: &NormalizedText) -> Option<String> {
    let clean = text.clean.as_str();
    first_success(TITLE_RULES.iter(), |keyword| {
        let hit = keyword.find(clean)?;
        let span = widen_to_word_run(clean, hit.start(), hit.end()).trim();
        (!span.is_empty() && span.chars().count() < MAX_TITLE_CHARS).then(|| span.to_string())
    })
}

pub fn extract_location(text: &NormalizedText) -> Option<String> {
    first_pattern_match(&LOCATION_RULES, &text.clean).map(String::from)
}

fn is_boilerplate(line: &str) -> bool {
    let lower = line.to_lowercase();
    NAME_BOILERPLATE.iter().any(|kw| lower.contains(kw))
}

fn plausible_name(candidate: &str) -> bool {
    let candidate = candidate.trim();
    (3..=50).contains(&candidate.chars().count()) && candidate.contains(' ')
}

/// Capitalizes the first letter of every whitespace-separated token and lowercases the rest.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn widen_to_word_run(text: &str, start: usize, end: usize) -> &str {
    let in_run = |c: char| c.is_ascii_alphabetic() || c.is_whitespace();

    let run_start = text[..start]
        .char_indices()
        .rev()
        .find(|&(_, c)| !in_run(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let run_end = text[end..]
        .char_indices()
        .find(|&(_, c)| !in_run(c))
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    &text[run_start..run_end]
}
