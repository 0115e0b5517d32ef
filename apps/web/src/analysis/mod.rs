// Report analysis: prompt construction, the single LLM call, and response validation.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;

pub use analyzer::{AnalysisError, AnalysisResult, ReportAnalyzer};
