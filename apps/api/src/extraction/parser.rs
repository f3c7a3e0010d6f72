//! Parse result assembler — runs the extractors in a fixed order over one normalized text
//! and records which fields were derived.

use tracing::debug;

use crate::extraction::document::RawDocument;
use crate::extraction::fields::{
    extract_current_title, extract_education, extract_email, extract_full_name,
    extract_location, extract_phone, extract_skills,
};
use crate::extraction::models::{CandidateField, ParsedCandidateData};
use crate::extraction::normalize::NormalizedText;
use crate::extraction::summary::synthesize_summary;
use crate::extraction::text::extract_text;

/// Full pipeline: document bytes to parsed candidate data. Never fails; an unreadable
/// document yields a result with every field absent.
pub fn extract(doc: &RawDocument) -> ParsedCandidateData {
    extract_if_readable(doc).unwrap_or_default()
}

/// Like `extract`, but `None` when the document produced no text at all, so callers can
/// tell an unreadable upload from a resume that simply matched nothing.
pub fn extract_if_readable(doc: &RawDocument) -> Option<ParsedCandidateData> {
    let text = extract_text(doc);
    if text.trim().is_empty() {
        return None;
    }
    Some(parse_candidate_text(&text))
}

pub fn parse_candidate_text(raw: &str) -> ParsedCandidateData {
    let text = NormalizedText::new(raw);
    let mut parsed = ParsedCandidateData::default();
    if text.is_empty() {
        return parsed;
    }

    let auto = &mut parsed.auto_populated_fields;
    parsed.email = derived(auto, CandidateField::Email, extract_email(&text));
    parsed.phone = derived(auto, CandidateField::Phone, extract_phone(&text));
    parsed.full_name = derived(auto, CandidateField::FullName, extract_full_name(&text));
    parsed.skills = derived(auto, CandidateField::Skills, extract_skills(&text));
    parsed.education = derived(auto, CandidateField::Education, extract_education(&text));
    parsed.current_title = derived(
        auto,
        CandidateField::CurrentTitle,
        extract_current_title(&text),
    );
    parsed.location = derived(auto, CandidateField::Location, extract_location(&text));

    if let Some(summary) = synthesize_summary(&parsed) {
        parsed.summary = Some(summary);
        parsed.auto_populated_fields.push(CandidateField::Summary);
    }

    debug_assert!(
        CandidateField::ALL
            .into_iter()
            .all(|f| parsed.is_auto_populated(f) == parsed.has_value(f)),
        "auto_populated_fields out of sync with values"
    );
    debug!(
        fields = ?parsed.auto_populated_fields,
        "Parsed candidate text"
    );
    parsed
}

fn derived<T>(auto: &mut Vec<CandidateField>, field: CandidateField, value: Option<T>) -> Option<T> {
    if value.is_some() {
        auto.push(field);
    }
    value
}
