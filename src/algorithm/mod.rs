/// Candidate selection and adjacency validation
pub mod candidates;
/// Attempt loop with budgeted restarts and renderer commits
pub mod controller;
/// Accepted layouts and renderer placement records
pub mod layout;
/// Recursive backtracking search engine
pub mod search;
/// Search state with exact rollback
pub mod state;
