//! Prompt templates for model interactions.

use crate::analysis::AnalysisKind;

/// System prompt sent with every request.
pub fn system_prompt() -> &'static str {
    "You are an expert analyst of freelance-market data. You answer questions \
     using the statistical analysis provided to you, citing concrete numbers \
     and percentages. You explain the main trends and draw practical \
     conclusions for freelancers in clear, simple language."
}

/// Build the user prompt for a question and its analysis results.
pub fn question_prompt(question: &str, kind: AnalysisKind, analysis_json: &str) -> String {
    format!(
        r#"Answer the user's question using the statistical analysis below.

## User Question
{question}

## Analysis Performed
{kind} ({description})

## Analysis Results
{analysis_json}

## Instructions
1. Give a clear, structured answer to the question.
2. Use the concrete numbers and percentages from the results.
3. Explain the main trends and patterns they show.
4. Draw practical conclusions for freelancers.
5. Format the answer with headings and lists for readability."#,
        question = question,
        kind = kind,
        description = kind.description(),
        analysis_json = analysis_json,
    )
}

/// Short prompt used by the health check to verify connectivity.
pub fn health_probe_prompt() -> &'static str {
    "Reply with the single word: ok"
}

/// Static response returned when the model is unavailable.
pub fn fallback_response() -> &'static str {
    "The statistical analysis completed, but the Claude model service was \
     unavailable, so no narrative answer could be generated.\n\
     \n\
     To enable model answers:\n\
     1. Create an API key at https://console.anthropic.com/\n\
     2. Export it: export ANTHROPIC_API_KEY=\"your-api-key-here\"\n\
        (or add the line to a .env file next to the binary)\n\
     3. Re-run the command.\n\
     \n\
     Tip: the `analyze` command prints the full analysis data without \
     needing the model."
}
