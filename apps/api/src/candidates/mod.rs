// Candidate record storage and its CRUD endpoints.
// The extraction core never touches this state.

pub mod handlers;
pub mod store;
