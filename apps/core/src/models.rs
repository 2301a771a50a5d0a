use serde::{Deserialize, Serialize};

use crate::classifier::Token;

/// Body of `POST /bfhl`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataRequest {
    /// Elements of any JSON type, each used through its string form.
    pub data: Vec<Token>,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    /// Current time, `YYYY-MM-DD HH:MM:SS IST`.
    pub timestamp: String,
    pub timezone: String,
}
