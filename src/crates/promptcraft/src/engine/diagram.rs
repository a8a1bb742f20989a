//! Mermaid output check
//!
//! The architecture instruction asks the model for a restricted Mermaid
//! subset: a `graph TD;` header, nodes shaped `id[..]`, `id(..)` or `id{..}`,
//! and `-->` edges. Nothing forces the model to comply, so the generated text
//! is checked here and the configured [`DiagramPolicy`] decides what to do
//! with a non-conforming diagram.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::prompts::{EXAMPLE_DIAGRAM, MERMAID_HEADER};
use super::{EngineError, Result};

/// A single way in which generated text breaks the diagram contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramIssue {
    #[error("diagram does not start with '{}'", MERMAID_HEADER)]
    MissingHeader,

    #[error("diagram contains a markdown code fence")]
    MarkdownFence,

    #[error("line {line}: unexpected statement '{text}'")]
    UnexpectedStatement { line: usize, text: String },
}

/// What to do with a diagram that fails [`check_mermaid`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramPolicy {
    /// Log each issue and return the model output unchanged
    #[default]
    Passthrough,
    /// Fail the request
    Reject,
    /// Replace the output with the canned example diagram
    Fallback,
}

impl DiagramPolicy {
    /// Check `code` and apply the policy to the result.
    pub fn apply(&self, code: String) -> Result<String> {
        let issues = check_mermaid(&code);
        if issues.is_empty() {
            return Ok(code);
        }

        match self {
            DiagramPolicy::Passthrough => {
                for issue in &issues {
                    tracing::warn!("Generated diagram does not follow the Mermaid rules: {}", issue);
                }
                Ok(code)
            }
            DiagramPolicy::Reject => Err(EngineError::InvalidDiagram(issues)),
            DiagramPolicy::Fallback => {
                tracing::warn!(
                    issues = issues.len(),
                    "Generated diagram rejected, substituting the example diagram"
                );
                Ok(EXAMPLE_DIAGRAM.to_string())
            }
        }
    }
}

/// List every deviation from the restricted Mermaid grammar.
///
/// An empty result means the diagram conforms. Statement checks are skipped
/// when the header is missing since the rest of the text is then usually prose.
pub fn check_mermaid(code: &str) -> Vec<DiagramIssue> {
    let mut issues = Vec::new();

    if code.contains("```") {
        issues.push(DiagramIssue::MarkdownFence);
    }

    let Some(rest) = code.trim().strip_prefix(MERMAID_HEADER) else {
        issues.push(DiagramIssue::MissingHeader);
        return issues;
    };

    // Line 1 is whatever follows the header on the header's own line
    for (idx, line) in rest.lines().enumerate() {
        for statement in line.split(';') {
            let statement = statement.trim();
            if statement.is_empty() || is_edge(statement) || is_node(statement) {
                continue;
            }
            issues.push(DiagramIssue::UnexpectedStatement {
                line: idx + 1,
                text: statement.to_string(),
            });
        }
    }

    issues
}

/// `a --> b`, optionally labelled `a -->|text| b` and chained `a --> b --> c`.
/// Every endpoint must itself be a node.
fn is_edge(statement: &str) -> bool {
    let mut segments = statement.split("-->");
    let Some(source) = segments.next() else {
        return false;
    };
    if !is_node(source.trim()) {
        return false;
    }

    let mut hops = 0;
    for segment in segments {
        let Some(target) = strip_edge_label(segment.trim()) else {
            return false;
        };
        if !is_node(target) {
            return false;
        }
        hops += 1;
    }
    hops > 0
}

fn strip_edge_label(segment: &str) -> Option<&str> {
    match segment.strip_prefix('|') {
        Some(labelled) => labelled
            .split_once('|')
            .map(|(_, target)| target.trim()),
        None => Some(segment),
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_node(statement: &str) -> bool {
    let Some(open_at) = statement.find(['[', '(', '{']) else {
        // Bare reference to an existing node
        return is_identifier(statement);
    };

    let (id, shape) = statement.split_at(open_at);
    let close = match shape.as_bytes()[0] {
        b'[' => ']',
        b'(' => ')',
        _ => '}',
    };

    is_identifier(id.trim_end()) && shape.len() > 2 && shape.ends_with(close)
}
