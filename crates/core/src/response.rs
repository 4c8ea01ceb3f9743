//! Response Splitting
//!
//! Separates the optional leading evaluation line of a backend reply
//! from the substantive message body.

/// Marker the backend puts in front of a per-answer evaluation line.
pub const EVALUATION_PREFIX: &str = "Evaluation: ";

/// Boundary between the evaluation line and the body. Exactly two
/// consecutive newline characters; a single newline does not split.
const EVALUATION_BOUNDARY: &str = "\n\n";

/// The outcome of splitting one raw backend reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReply {
    pub evaluation: Option<String>,
    pub body: String,
}

/// Splits a leading `Evaluation: ` line off the rest of the reply.
///
/// The split is purely syntactic. A reply that starts with the prefix
/// but never reaches a blank-line boundary is returned whole, prefix
/// included, and malformed evaluation text is passed through untouched:
/// score validation is not this layer's job.
pub fn split_reply(raw: &str) -> SplitReply {
    if raw.starts_with(EVALUATION_PREFIX) {
        if let Some(boundary) = raw.find(EVALUATION_BOUNDARY) {
            let evaluation = raw[EVALUATION_PREFIX.len()..boundary].trim().to_string();
            let body = raw[boundary + EVALUATION_BOUNDARY.len()..].trim().to_string();
            return SplitReply {
                evaluation: Some(evaluation),
                body,
            };
        }
    }

    SplitReply {
        evaluation: None,
        body: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_evaluation_from_body() {
        let split = split_reply("Evaluation: Correct (3/3).\n\nNext question: ...");
        assert_eq!(split.evaluation.as_deref(), Some("Correct (3/3)."));
        assert_eq!(split.body, "Next question: ...");
    }

    #[test]
    fn round_trips_arbitrary_evaluation_and_body() {
        let raw = format!("{}{}\n\n{}", EVALUATION_PREFIX, "Partial; use VLOOKUP (1/3).", "Hint: try =VLOOKUP(...)");
        let split = split_reply(&raw);
        assert_eq!(split.evaluation.as_deref(), Some("Partial; use VLOOKUP (1/3)."));
        assert_eq!(split.body, "Hint: try =VLOOKUP(...)");
    }

    #[test]
    fn reply_without_prefix_is_returned_verbatim() {
        let raw = "Hello! This interview will consist of 4 questions.\n\nFirst question: ...";
        let split = split_reply(raw);
        assert_eq!(split.evaluation, None);
        assert_eq!(split.body, raw);
    }

    #[test]
    fn prefix_without_blank_line_boundary_is_not_split() {
        let raw = "Evaluation: Correct (3/3).\nNext question on the same line block";
        let split = split_reply(raw);
        assert_eq!(split.evaluation, None);
        assert_eq!(split.body, raw);
    }

    #[test]
    fn prefix_not_at_start_is_ignored() {
        let raw = "Preamble.\n\nEvaluation: Correct (3/3).\n\nMore.";
        let split = split_reply(raw);
        assert_eq!(split.evaluation, None);
        assert_eq!(split.body, raw);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_on_split() {
        let split = split_reply("Evaluation:  Mostly correct (2/3).  \n\n  What about pivot tables?  ");
        assert_eq!(split.evaluation.as_deref(), Some("Mostly correct (2/3)."));
        assert_eq!(split.body, "What about pivot tables?");
    }

    #[test]
    fn empty_evaluation_text_is_preserved_as_empty() {
        let split = split_reply("Evaluation: \n\nNext question.");
        assert_eq!(split.evaluation.as_deref(), Some(""));
        assert_eq!(split.body, "Next question.");
    }

    #[test]
    fn malformed_score_text_is_stored_as_is() {
        let split = split_reply("Evaluation: score-ish, no digits\n\nBody.");
        assert_eq!(split.evaluation.as_deref(), Some("score-ish, no digits"));
    }
}
