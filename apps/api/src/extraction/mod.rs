// Resume field extraction: document bytes -> text -> normalized views -> heuristic fields.
// Pure and synchronous; the upload handler runs it on the blocking pool.

pub mod cascade;
pub mod catalogs;
pub mod document;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod summary;
pub mod text;

pub use document::{DocumentKind, RawDocument};
pub use models::{CandidateField, ParsedCandidateData};
pub use parser::{extract, extract_if_readable, parse_candidate_text};
