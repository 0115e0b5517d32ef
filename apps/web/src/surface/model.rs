//! Page state machine: the submission draft plus a single `RequestState`.
//!
//! Transitions:
//!   submit (blank)            → Failed(BLANK_SUBMISSION_MESSAGE), no LLM call
//!   submit (non-blank)        → Pending, yields a `PendingSubmission` ticket
//!   submit while Pending      → no effect
//!   settle(ticket, outcome)   → Succeeded | Failed
//!
//! The ticket is consumed on settlement, so each submission settles exactly once.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{AnalysisError, AnalysisResult, ReportAnalyzer};

/// Fixed message shown when the user submits an empty report.
pub const BLANK_SUBMISSION_MESSAGE: &str = "Please enter your daily report.";

/// The page shared by all handlers. The lock is never held across the LLM call.
pub type SharedSurface = Arc<Mutex<Surface>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(AnalysisResult),
    Failed(String),
}

/// Ticket for the one in-flight submission. Deliberately not `Clone`.
#[derive(Debug)]
pub struct PendingSubmission {
    id: Uuid,
    text: String,
}

impl PendingSubmission {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug)]
pub enum SubmitDecision {
    Started(PendingSubmission),
    /// Blank input; the validation error is already set.
    Rejected,
    /// A submission is already pending; nothing changed.
    Busy,
}

/// Snapshot used by the HTML renderer and the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceView {
    pub submission: String,
    pub pending: bool,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
}

#[derive(Debug, Default)]
pub struct Surface {
    submission: String,
    state: RequestState,
    in_flight: Option<Uuid>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSurface {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }

    /// Replaces the draft. Ignored while a submission is pending.
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        if self.is_pending() {
            return false;
        }
        self.submission = text.into();
        true
    }

    pub fn submit(&mut self) -> SubmitDecision {
        if self.is_pending() {
            return SubmitDecision::Busy;
        }

        if self.submission.trim().is_empty() {
            self.state = RequestState::Failed(BLANK_SUBMISSION_MESSAGE.to_string());
            return SubmitDecision::Rejected;
        }

        let ticket = PendingSubmission {
            id: Uuid::new_v4(),
            text: self.submission.clone(),
        };
        self.state = RequestState::Pending;
        self.in_flight = Some(ticket.id);

        info!(
            "Submission {} started ({} chars)",
            ticket.id,
            ticket.text.chars().count()
        );
        SubmitDecision::Started(ticket)
    }

    /// Records the outcome of the in-flight submission and leaves Pending.
    pub fn settle(
        &mut self,
        ticket: PendingSubmission,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) {
        if self.in_flight != Some(ticket.id) {
            warn!("Ignoring outcome for stale submission {}", ticket.id);
            return;
        }
        self.in_flight = None;

        self.state = match outcome {
            Ok(result) => {
                info!("Submission {} succeeded", ticket.id);
                RequestState::Succeeded(result)
            }
            Err(e) => {
                info!("Submission {} failed", ticket.id);
                RequestState::Failed(e.user_message())
            }
        };
    }

    pub fn view(&self) -> SurfaceView {
        let pending = self.is_pending();
        let (error, result) = match &self.state {
            RequestState::Failed(msg) => (Some(msg.clone()), None),
            RequestState::Succeeded(result) => (None, Some(result.clone())),
            RequestState::Idle | RequestState::Pending => (None, None),
        };

        SurfaceView {
            submission: self.submission.clone(),
            pending,
            input_enabled: !pending,
            submit_enabled: !pending && !self.submission.trim().is_empty(),
            error,
            result,
        }
    }
}

/// Runs the analysis for a started submission and settles the surface with its outcome.
pub async fn run_submission(
    surface: &Mutex<Surface>,
    analyzer: &ReportAnalyzer,
    ticket: PendingSubmission,
) {
    let outcome = analyzer.analyze(ticket.text()).await;
    surface.lock().await.settle(ticket, outcome);
}
