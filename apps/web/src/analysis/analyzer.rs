//! Report Analyzer — turns a daily report into a structured critique via the LLM.
//!
//! Flow: build prompt → declare response schema → one LLM call →
//!       parse JSON (malformed?) → decode into `AnalysisResult` (shape?).
//!
//! Every failure is terminal for the submission. There is no retry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::analysis::prompts::{
    GOOD_POINTS_DESCRIPTION, IMPROVEMENTS_DESCRIPTION, REPORT_ANALYSIS_PROMPT_TEMPLATE,
};
use crate::llm_client::{strip_json_fences, GenerativeModel, LlmError, ResponseSchema};

/// Structured critique of one report.
/// List lengths are not enforced; the prompt asks for 3–5 items each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub good_points: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("AI service call failed: {0}")]
    Service(#[from] LlmError),

    #[error("AI response was not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Invalid response structure from AI: {0}")]
    UnexpectedShape(String),
}

impl AnalysisError {
    /// The single human-readable message shown to the user for any failure.
    pub fn user_message(&self) -> String {
        format!("An error occurred during AI analysis: {self}")
    }
}

/// Analysis client. Cheap to clone; the model backend is shared.
#[derive(Clone)]
pub struct ReportAnalyzer {
    model: Arc<dyn GenerativeModel>,
    schema: ResponseSchema,
}

impl ReportAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            schema: report_schema(),
        }
    }

    /// Analyzes a non-empty report. Blank input is rejected by callers before this point.
    pub async fn analyze(&self, report_text: &str) -> Result<AnalysisResult, AnalysisError> {
        let prompt = build_prompt(report_text);

        let outcome = match self.model.generate_json(&prompt, &self.schema).await {
            Ok(text) => decode_response(&text),
            Err(e) => Err(AnalysisError::Service(e)),
        };

        match &outcome {
            Ok(result) => info!(
                "Report analyzed: {} good points, {} improvements",
                result.good_points.len(),
                result.improvements.len()
            ),
            Err(e) => error!("Error analyzing report: {e}"),
        }

        outcome
    }
}

/// The declared output shape: `{goodPoints: string[], improvements: string[]}`, both required.
pub fn report_schema() -> ResponseSchema {
    ResponseSchema::object()
        .required_property(
            "goodPoints",
            ResponseSchema::array_of(ResponseSchema::string()).describe(GOOD_POINTS_DESCRIPTION),
        )
        .required_property(
            "improvements",
            ResponseSchema::array_of(ResponseSchema::string()).describe(IMPROVEMENTS_DESCRIPTION),
        )
}

fn build_prompt(report_text: &str) -> String {
    REPORT_ANALYSIS_PROMPT_TEMPLATE.replace("{report_text}", report_text)
}

/// Two-step decode: text → JSON value, then JSON value → `AnalysisResult`.
fn decode_response(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let value: Value =
        serde_json::from_str(strip_json_fences(text)).map_err(AnalysisError::MalformedResponse)?;

    if !value.is_object() {
        return Err(AnalysisError::UnexpectedShape(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::UnexpectedShape(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
