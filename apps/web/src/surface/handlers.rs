//! Axum route handlers for the report page.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Datelike;
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;
use crate::surface::model::{run_submission, SubmitDecision, SurfaceView};
use crate::surface::render::render_page;

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    /// Absent when the text box was disabled.
    #[serde(default)]
    pub report: Option<String>,
}

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    let view = state.surface.lock().await.view();
    Html(render_page(&view, chrono::Local::now().year()))
}

/// GET /api/v1/surface
pub async fn handle_surface(State(state): State<AppState>) -> Json<SurfaceView> {
    Json(state.surface.lock().await.view())
}

/// POST /submit
///
/// Applies the edited text and submits it. The analysis runs on its own task so the
/// page can show the loading state; a submit while one is pending does nothing.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Redirect {
    let decision = {
        let mut surface = state.surface.lock().await;
        if let Some(report) = form.report {
            surface.edit(report);
        }
        surface.submit()
    };

    match decision {
        SubmitDecision::Started(ticket) => {
            debug!("Dispatching submission {}", ticket.id());
            tokio::spawn(async move {
                run_submission(&state.surface, &state.analyzer, ticket).await;
            });
        }
        SubmitDecision::Rejected => debug!("Blank submission rejected"),
        SubmitDecision::Busy => debug!("Submission already pending; ignoring submit"),
    }

    Redirect::to("/")
}
