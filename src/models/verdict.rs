//! Evaluation Verdict Model
//!
//! Wire types for the `/run_code` exchange. The server's `result` field is
//! a sequence of per-test-case records on the success path and some other
//! JSON shape on the error path; callers must branch on array-ness before
//! touching per-case fields, which [`EvaluationResponse::into_verdict`]
//! does once, up front.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Body of a `POST /run_code` request
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRequest {
    /// Full editor contents at the moment the run was triggered
    pub code: String,
    /// Selected exercise id
    pub problem_id: i64,
}

/// Raw `/run_code` response, before shape discrimination
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationResponse {
    /// Either an array of test-case records or an arbitrary error shape
    #[serde(default)]
    pub result: serde_json::Value,

    /// Summary (success path) or error description (error path)
    #[serde(default)]
    pub message: String,

    /// Overall correctness. Only populated on the success path; absence
    /// historically correlates with the error path.
    #[serde(default)]
    pub correct: Option<bool>,
}

/// Outcome of a single server-side test case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCaseResult {
    /// Arguments the test harness passed to the program
    #[serde(default)]
    pub args: Vec<serde_json::Value>,

    /// Output the test case expects
    #[serde(default)]
    pub expected_output: String,

    /// Output the user's program produced
    #[serde(default)]
    pub user_output: String,

    /// Whether the outputs matched
    #[serde(default)]
    pub is_correct: bool,
}

/// Shape-discriminated evaluation outcome
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The server ran the test cases; records arrive in declaration order
    Cases {
        cases: Vec<TestCaseResult>,
        message: String,
        /// Missing `correct` renders as the error state
        correct: bool,
    },
    /// Anything else: the whole response is an error carrying `message`
    Message { message: String },
}

impl EvaluationResponse {
    /// Discriminate the response shape.
    ///
    /// An array `result` whose records do not decode is a malformed body,
    /// not an application-level error.
    pub fn into_verdict(self) -> Result<Verdict> {
        match self.result {
            serde_json::Value::Array(_) => {
                let cases: Vec<TestCaseResult> =
                    serde_json::from_value(self.result).map_err(|e| Error::MalformedResponse {
                        endpoint: "/run_code".to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(Verdict::Cases {
                    cases,
                    message: self.message,
                    correct: self.correct.unwrap_or(false),
                })
            }
            _ => Ok(Verdict::Message {
                message: self.message,
            }),
        }
    }
}

impl Verdict {
    /// Whether this verdict should render in the success style
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Cases { correct: true, .. })
    }
}
