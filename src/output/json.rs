use serde::Serialize;

use crate::core::{Evaluation, format_result};

#[derive(Debug, Serialize)]
struct EvaluationJson<'a> {
    left: &'a str,
    right: &'a str,
    op: &'a str,
    valid: bool,
    /// Full-precision decimal text, absent for invalid results
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    defaulted: Vec<&'static str>,
}

pub(crate) fn evaluation_json(evaluation: &Evaluation) -> Result<String, serde_json::Error> {
    let mut defaulted = Vec::new();
    if evaluation.left.defaulted {
        defaulted.push("left");
    }
    if evaluation.right.defaulted && !evaluation.operation.is_some_and(|op| op.is_unary()) {
        defaulted.push("right");
    }
    let out = EvaluationJson {
        left: &evaluation.left.text,
        right: &evaluation.right.text,
        op: &evaluation.symbol,
        valid: evaluation.outcome.is_valid(),
        result: evaluation.outcome.value().map(format_result),
        defaulted,
    };
    serde_json::to_string_pretty(&out)
}

pub(crate) fn history_json(lines: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(lines)
}
