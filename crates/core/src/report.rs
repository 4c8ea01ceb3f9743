//! Report Extraction
//!
//! Builds the report-request prompt from a turn history and extracts the
//! structured performance report from the backend's single free-form
//! reply. Every extraction here is parse-with-fallback: a missing score
//! or section resolves to a documented literal, never an error, so a
//! malformed-but-nonempty reply cannot fail the whole operation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::llm_client::Turn;

/// Fallback when no score line is found in the reply.
pub const SCORE_FALLBACK: &str = "N/A";

/// Fallback when a section or its bullet lines are missing.
pub const SECTION_FALLBACK: &str = "Not available.";

static SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Overall Score|Score):\s*(\d+)\s*/\s*10").expect("score regex")
});
static STRENGTHS_RE: Lazy<Regex> = Lazy::new(|| section_regex("Strengths"));
static WEAKNESSES_RE: Lazy<Regex> =
    Lazy::new(|| section_regex("(?:Areas for Improvement|Weaknesses)"));
static SUGGESTIONS_RE: Lazy<Regex> =
    Lazy::new(|| section_regex("(?:Suggestions for Improvement|Suggestions)"));

/// Matches a level-2 or level-3 markdown heading for the section, then
/// captures the first following run of bullet lines. The lazy skip
/// between heading and bullets is what keeps extraction independent of
/// section order and of unrelated prose between sections.
fn section_regex(header: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?:###|##)\s*{header}[\s\S]*?((?:\n-.*)+)")).expect("section regex")
}

/// The structured performance report derived from one backend reply.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub overall_score: String,
    pub strengths: String,
    pub weaknesses: String,
    pub suggestions_for_improvement: String,
}

/// Renders the report-request prompt: the fixed template followed by the
/// full turn history as `Role: text` blocks separated by blank lines.
pub fn build_report_prompt(template: &str, history: &[Turn]) -> String {
    let mut prompt = String::from(template);
    prompt.push_str("\n\nHere is the interview history:\n\n");
    for turn in history {
        prompt.push_str(turn.role.display_name());
        prompt.push_str(": ");
        prompt.push_str(&turn.text);
        prompt.push_str("\n\n");
    }
    prompt
}

fn extract_section(text: &str, re: &Regex) -> Option<String> {
    let bullets = re.captures(text)?.get(1)?.as_str().trim().to_string();
    if bullets.is_empty() { None } else { Some(bullets) }
}

/// Extracts the typed report fields from the backend's reply.
pub fn parse_report(text: &str) -> Report {
    let overall_score = SCORE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|score| score.as_str().to_string())
        .unwrap_or_else(|| SCORE_FALLBACK.to_string());

    Report {
        overall_score,
        strengths: extract_section(text, &STRENGTHS_RE)
            .unwrap_or_else(|| SECTION_FALLBACK.to_string()),
        weaknesses: extract_section(text, &WEAKNESSES_RE)
            .unwrap_or_else(|| SECTION_FALLBACK.to_string()),
        suggestions_for_improvement: extract_section(text, &SUGGESTIONS_RE)
            .unwrap_or_else(|| SECTION_FALLBACK.to_string()),
    }
}
