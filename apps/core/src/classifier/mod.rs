//! # Classifier Module
//!
//! Partitions raw request tokens into numeric, alphabetic and special
//! categories, and derives the running sum and the case-alternated
//! concat string.
//!
//! ## Components
//! - `token`: string form of an incoming JSON element
//! - `classify`: pattern-based partitioning and summation
//! - `concat`: reversed, case-alternated letter string

pub mod classify;
pub mod concat;
pub mod token;

pub use classify::{ClassificationResult, ClassifyError, TokenClassifier};
pub use token::Token;
