//! Candidate intake service.
//!
//! - `extraction`: resume documents to structured candidate fields (pure, synchronous)
//! - `candidates`: reviewed candidate records and their storage
//! - `routes`: the HTTP surface over both

pub mod candidates;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod routes;
pub mod state;
