//! Response Assembler.
//!
//! Merges classifier output with the precomputed identity. A classification
//! fault never escapes: it becomes the failure variant, which still carries
//! the `user_id`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::classifier::{ClassificationResult, ClassifyError, Token, TokenClassifier};
use crate::identity::IdentityInfo;

/// Label reported in the `error` field of every failure response.
pub const FAILURE_LABEL: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessBody {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureBody {
    pub is_success: bool,
    pub error: String,
    pub details: String,
    pub user_id: String,
}

/// Outcome of one classification request. There is no partial variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success(SuccessBody),
    Failure(FailureBody),
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn user_id(&self) -> &str {
        match self {
            ApiResponse::Success(body) => &body.user_id,
            ApiResponse::Failure(body) => &body.user_id,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiResponse::Success(_) => StatusCode::OK,
            ApiResponse::Failure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Builds responses for a fixed identity. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    identity: IdentityInfo,
    classifier: TokenClassifier,
}

impl ResponseAssembler {
    pub fn new(identity: IdentityInfo) -> Self {
        Self {
            identity,
            classifier: TokenClassifier::new(),
        }
    }

    pub fn assemble(&self, tokens: &[Token]) -> ApiResponse {
        self.respond(self.classifier.classify(tokens))
    }

    /// Maps a classification outcome onto the response envelope.
    pub(crate) fn respond(
        &self,
        outcome: Result<ClassificationResult, ClassifyError>,
    ) -> ApiResponse {
        match outcome {
            Ok(result) => {
                debug!(
                    odd = result.odd_numbers.len(),
                    even = result.even_numbers.len(),
                    alphabets = result.alphabets.len(),
                    special = result.special_characters.len(),
                    sum = %result.sum,
                    "Classification succeeded"
                );
                ApiResponse::Success(SuccessBody {
                    is_success: true,
                    user_id: self.identity.user_id.clone(),
                    email: self.identity.email.clone(),
                    roll_number: self.identity.roll_number.clone(),
                    result,
                })
            }
            Err(e) => {
                error!("Classification failed: {}", e);
                ApiResponse::Failure(FailureBody {
                    is_success: false,
                    error: FAILURE_LABEL.to_string(),
                    details: e.to_string(),
                    user_id: self.identity.user_id.clone(),
                })
            }
        }
    }
}
