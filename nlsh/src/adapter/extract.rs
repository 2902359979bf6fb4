//! JSON salvage from noisy adapter output
//!
//! Adapters are allowed to print banners or log lines around their JSON
//! reply. Extraction takes the first balanced top-level `{...}` span and
//! parses that, falling back to the whole text when no span exists.

use tracing::debug;

use super::{AdapterError, Proposal};

/// Extract and parse a proposal from raw adapter stdout
pub fn extract(raw: &str) -> Result<Proposal, AdapterError> {
    let candidate = balanced_object(raw).unwrap_or(raw);
    debug!(
        raw_len = raw.len(),
        candidate_len = candidate.len(),
        "extract: parsing candidate span"
    );

    serde_json::from_str(candidate).map_err(|e| AdapterError::Parse {
        message: e.to_string(),
        raw: raw.to_string(),
    })
}

/// Locate the first balanced top-level brace-delimited span
///
/// Braces inside JSON string literals (and their escape sequences) do not
/// count toward nesting depth.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + i]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_noisy_output() {
        let raw = "noise noise {\"command\":\"ls\",\"confirm\":false} trailing";
        let proposal = extract(raw).unwrap();
        assert_eq!(proposal.command, "ls");
        assert!(!proposal.confirm);
        assert_eq!(proposal.explanation, "");
    }

    #[test]
    fn test_extract_clean_json() {
        let proposal = extract(r#"{"command":"pwd","explanation":"print working directory"}"#).unwrap();
        assert_eq!(proposal.command, "pwd");
        assert_eq!(proposal.explanation, "print working directory");
    }

    #[test]
    fn test_extract_stops_at_first_balanced_span() {
        let raw = r#"{"command":"ls"} {"command":"rm -rf /"}"#;
        let proposal = extract(raw).unwrap();
        assert_eq!(proposal.command, "ls");
    }

    #[test]
    fn test_extract_braces_inside_strings() {
        let raw = r#"log line {"command":"awk '{print $1}'","explanation":"first column"} done"#;
        let proposal = extract(raw).unwrap();
        assert_eq!(proposal.command, "awk '{print $1}'");
    }

    #[test]
    fn test_extract_escaped_quote_inside_string() {
        let raw = r#"{"command":"echo \"hi\"","explanation":"say {hi}"}"#;
        let proposal = extract(raw).unwrap();
        assert_eq!(proposal.command, r#"echo "hi""#);
        assert_eq!(proposal.explanation, "say {hi}");
    }

    #[test]
    fn test_extract_failure_carries_raw_text() {
        let raw = "the adapter printed only prose";
        let err = extract(raw).unwrap_err();
        match err {
            AdapterError::Parse { ref message, ref raw } => {
                assert!(!message.is_empty());
                assert_eq!(raw, "the adapter printed only prose");
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_unbalanced_falls_back_to_whole_text() {
        // No balanced span exists, so the whole text is parsed and fails
        let raw = "prefix {\"command\":\"ls\"";
        let err = extract(raw).unwrap_err();
        assert_eq!(err.raw_output(), Some(raw));
    }

    #[test]
    fn test_balanced_object_nested() {
        let text = r#"x {"a":{"b":1},"c":2} y"#;
        assert_eq!(balanced_object(text), Some(r#"{"a":{"b":1},"c":2}"#));
    }

    #[test]
    fn test_balanced_object_none_without_braces() {
        assert_eq!(balanced_object("no json here"), None);
    }
}
