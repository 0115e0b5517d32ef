// All LLM prompt constants for the report analysis module.

/// Report analysis prompt template. Replace `{report_text}` before sending.
pub const REPORT_ANALYSIS_PROMPT_TEMPLATE: &str = "Read the following daily sales report and \
point out 3 to 5 things the author did well (good points) and 3 to 5 improvements for further \
growth, each as a short bullet. Keep the feedback positive in tone so that it encourages the \
author and raises their motivation.

--- Daily sales report ---
{report_text}";

/// Schema description for the `goodPoints` field.
pub const GOOD_POINTS_DESCRIPTION: &str =
    "Strengths that can be read from the report; things worth praising.";

/// Schema description for the `improvements` field.
pub const IMPROVEMENTS_DESCRIPTION: &str =
    "Improvements and advice, read from the report, that would make the work even better.";
