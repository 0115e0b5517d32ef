use crate::analysis::ReportAnalyzer;
use crate::surface::SharedSurface;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: ReportAnalyzer,
    /// The one report page. Handlers lock it briefly and never across the LLM call.
    pub surface: SharedSurface,
}
