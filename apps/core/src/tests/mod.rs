//! Test Module
//!
//! ## Test Categories
//! - `classifier_tests`: reference scenarios and partition properties
//! - `assembler_tests`: success and failure envelopes
//! - `http_tests`: router behaviour driven in-process
