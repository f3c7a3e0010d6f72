use serde::{Deserialize, Serialize};

/// Candidate fields the heuristics can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateField {
    FullName,
    Email,
    Phone,
    CurrentTitle,
    Education,
    Skills,
    Summary,
    Location,
}

impl CandidateField {
    pub const ALL: [CandidateField; 8] = [
        CandidateField::FullName,
        CandidateField::Email,
        CandidateField::Phone,
        CandidateField::CurrentTitle,
        CandidateField::Education,
        CandidateField::Skills,
        CandidateField::Summary,
        CandidateField::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateField::FullName => "full_name",
            CandidateField::Email => "email",
            CandidateField::Phone => "phone",
            CandidateField::CurrentTitle => "current_title",
            CandidateField::Education => "education",
            CandidateField::Skills => "skills",
            CandidateField::Summary => "summary",
            CandidateField::Location => "location",
        }
    }
}

/// Structured result of one resume parse.
///
/// `auto_populated_fields` lists, in derivation order, every field the heuristics filled.
/// A field appears there exactly when it holds a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCandidateData {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub current_title: Option<String>,
    pub education: Option<String>,
    pub skills: Option<Vec<String>>,
    pub summary: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub auto_populated_fields: Vec<CandidateField>,
}

impl ParsedCandidateData {
    pub fn is_auto_populated(&self, field: CandidateField) -> bool {
        self.auto_populated_fields.contains(&field)
    }

    /// Whether `field` currently holds a non-empty value.
    pub fn has_value(&self, field: CandidateField) -> bool {
        let text = match field {
            CandidateField::FullName => &self.full_name,
            CandidateField::Email => &self.email,
            CandidateField::Phone => &self.phone,
            CandidateField::CurrentTitle => &self.current_title,
            CandidateField::Education => &self.education,
            CandidateField::Summary => &self.summary,
            CandidateField::Location => &self.location,
            CandidateField::Skills => {
                return self.skills.as_ref().is_some_and(|s| !s.is_empty());
            }
        };
        text.as_deref().is_some_and(|s| !s.is_empty())
    }
}
