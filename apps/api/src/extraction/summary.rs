use crate::extraction::catalogs::{SUMMARY_MIN_FIELDS, SUMMARY_SKILLS};
use crate::extraction::models::ParsedCandidateData;

/// Composes a one-sentence summary from already-derived fields.
///
/// Only attempted once at least `SUMMARY_MIN_FIELDS` fields were auto-populated. Clauses
/// appear in a fixed order (title, skills, education) and only when their field is present.
pub fn synthesize_summary(parsed: &ParsedCandidateData) -> Option<String> {
    if parsed.auto_populated_fields.len() < SUMMARY_MIN_FIELDS {
        return None;
    }

    let mut clauses = Vec::new();
    if let Some(title) = parsed.current_title.as_deref() {
        clauses.push(format!("Experienced {}", title.to_lowercase()));
    }
    if let Some(skills) = parsed.skills.as_deref().filter(|s| !s.is_empty()) {
        let top: Vec<&str> = skills.iter().take(SUMMARY_SKILLS).map(String::as_str).collect();
        clauses.push(format!("with expertise in {}", top.join(", ")));
    }
    if let Some(education) = parsed.education.as_deref() {
        clauses.push(format!("holding {education}"));
    }

    if clauses.is_empty() {
        return None;
    }
    Some(format!("{}.", clauses.join(" ")))
}
