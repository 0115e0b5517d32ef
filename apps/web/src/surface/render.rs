//! Server-rendered HTML for the single page.
//!
//! Rendering is a pure function of `SurfaceView`; the result area shows at most one of
//! nothing, the loading indicator, the error banner, or the two feedback groupings.

use crate::surface::model::SurfaceView;

const APP_TITLE: &str = "Sales Report Check AI";
const GOOD_POINTS_TITLE: &str = "Good points";
const IMPROVEMENTS_TITLE: &str = "Improvements";
/// The page is a single-user tool: one draft and one result per process.
const SHARED_PAGE_NOTE: &str = "Single-user tool: everyone opening this page shares the same \
report and result, and only one report is analyzed at a time.";
/// Seconds between reloads while a submission is pending.
const PENDING_REFRESH_SECS: u32 = 2;

/// Full page for the given view. `year` feeds the footer.
pub fn render_page(view: &SurfaceView, year: i32) -> String {
    let refresh = if view.pending {
        format!(r#"<meta http-equiv="refresh" content="{PENDING_REFRESH_SECS}">"#)
    } else {
        String::new()
    };
    let input_disabled = if view.input_enabled { "" } else { " disabled" };
    let submit_disabled = if view.submit_enabled { "" } else { " disabled" };
    let button_label = if view.pending {
        "Analyzing..."
    } else {
        "Start check"
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {refresh}
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{title}</h1>
            <p class="subtitle">AI reads your daily report and helps you grow your sales skills.</p>
        </header>

        <main>
            <form method="post" action="/submit" class="report-form">
                <label for="report">Enter the daily report you want analyzed</label>
                <textarea id="report" name="report" placeholder="Paste your daily sales report here..."{input_disabled}>
{submission}</textarea>
                <button id="submit" type="submit"{submit_disabled}>{button_label}</button>
            </form>
            <p class="note">{shared_note}</p>
        </main>

        <div class="results">
{results}
        </div>

        <footer>
            <p>&copy; {year} {title}. All rights reserved.</p>
        </footer>
    </div>

    <script>
{js}
    </script>
</body>
</html>"#,
        refresh = refresh,
        title = APP_TITLE,
        shared_note = SHARED_PAGE_NOTE,
        css = CSS,
        js = JS,
        input_disabled = input_disabled,
        submit_disabled = submit_disabled,
        button_label = button_label,
        submission = escape_html(&view.submission),
        results = render_results(view),
        year = year,
    )
}

/// The result area alone.
pub fn render_results(view: &SurfaceView) -> String {
    if view.pending {
        return r#"<div class="spinner" role="status" aria-label="Analyzing"></div>"#.to_string();
    }

    if let Some(message) = &view.error {
        return format!(r#"<div class="error-banner">{}</div>"#, escape_html(message));
    }

    match &view.result {
        Some(result) => {
            let mut html = String::from(r#"<div class="feedback">"#);
            html.push_str(&feedback_section(
                GOOD_POINTS_TITLE,
                &result.good_points,
                "good",
            ));
            html.push_str(&feedback_section(
                IMPROVEMENTS_TITLE,
                &result.improvements,
                "improve",
            ));
            html.push_str("</div>");
            html
        }
        None => String::new(),
    }
}

/// One labeled bullet grouping; empty lists render nothing.
fn feedback_section(title: &str, points: &[String], class: &str) -> String {
    if points.is_empty() {
        return String::new();
    }

    let items: String = points
        .iter()
        .map(|point| format!("<li>{}</li>", escape_html(point)))
        .collect();

    format!(r#"<section class="feedback-section {class}"><h3>{title}</h3><ul>{items}</ul></section>"#)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: #111827; color: #f3f4f6; font-family: system-ui, -apple-system, sans-serif; }
.container { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
header { text-align: center; margin-bottom: 2rem; }
h1 { font-size: 2.5rem; margin: 0; color: #93c5fd; }
.subtitle { color: #9ca3af; }
.note { color: #6b7280; font-size: 0.875rem; text-align: center; }
.report-form { display: flex; flex-direction: column; gap: 1rem; padding: 1.5rem; border: 1px solid #374151; border-radius: 1rem; }
textarea { width: 100%; height: 16rem; padding: 1rem; background: #111827; color: #e5e7eb; border: 1px solid #4b5563; border-radius: 0.5rem; resize: vertical; }
button { align-self: center; padding: 0.75rem 2rem; font-weight: bold; color: #fff; background: #4f46e5; border: 0; border-radius: 0.5rem; cursor: pointer; }
button:disabled { opacity: 0.5; cursor: not-allowed; }
.results { margin-top: 2.5rem; }
.spinner { width: 3rem; height: 3rem; margin: 0 auto; border: 4px solid #374151; border-top-color: #60a5fa; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.error-banner { padding: 1rem; text-align: center; color: #fca5a5; background: rgba(127, 29, 29, 0.5); border: 1px solid #ef4444; border-radius: 0.5rem; }
.feedback { display: flex; flex-direction: column; gap: 2rem; }
.feedback-section { padding: 1rem 1.5rem; border: 1px solid; border-radius: 0.75rem; }
.feedback-section.good { border-color: #4ade80; }
.feedback-section.good h3 { color: #4ade80; }
.feedback-section.improve { border-color: #facc15; }
.feedback-section.improve h3 { color: #facc15; }
footer { margin-top: 3rem; text-align: center; color: #6b7280; font-size: 0.875rem; }
"#;

const JS: &str = r#"
const report = document.getElementById('report');
const submit = document.getElementById('submit');
if (!report.disabled) {
    report.addEventListener('input', () => { submit.disabled = !report.value.trim(); });
}
"#;
