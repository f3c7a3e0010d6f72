use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    #[default]
    Manual,
    Upload,
}

/// Reviewed candidate profile, as submitted on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInput {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub current_title: Option<String>,
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub alias_name: Option<String>,
    pub manager: Option<String>,
    pub employee_id: Option<String>,
    #[serde(default)]
    pub source: CandidateSource,
    pub cv_filepath: Option<String>,
}

impl CandidateInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::Validation("full_name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::Validation("email is required".to_string()));
        }
        Ok(())
    }
}

/// A stored candidate. Identity and timestamps are owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: CandidateInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
