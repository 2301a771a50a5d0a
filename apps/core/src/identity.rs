//! Identity Builder.
//!
//! Derives the `user_id` reported with every response from the configured
//! display name and date of birth.

use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;

/// Identity fields attached to every classification response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInfo {
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}

impl IdentityInfo {
    pub fn from_config(config: &IdentityConfig) -> Self {
        Self {
            user_id: build_user_id(&config.full_name, &config.dob),
            email: config.email.clone(),
            roll_number: config.roll_number.clone(),
        }
    }
}

/// Lowercases `full_name`, joins its whitespace-separated words with `_`
/// and appends `_<dob>` verbatim.
///
/// ```rust,ignore
/// assert_eq!(build_user_id("John  Doe", "17091999"), "john_doe_17091999");
/// ```
pub fn build_user_id(full_name: &str, dob: &str) -> String {
    let name = full_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}_{}", name, dob)
}
