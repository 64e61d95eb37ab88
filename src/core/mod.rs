//! Core - shared plumbing used by every other layer
//!
//! - utils/  - indexing and console logging macros
//! - error   - the crate-wide error type

#[macro_use]
pub mod utils;
pub mod error;
