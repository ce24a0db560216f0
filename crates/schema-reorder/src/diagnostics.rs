use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A JSON parse error with exact source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(schema_reorder::parse))]
pub struct ParseDiagnostic {
    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    pub message: String,
}

impl ParseDiagnostic {
    pub fn new(file_name: &str, content: &str, err: &serde_json::Error) -> Self {
        let offset = line_col_to_offset(content, err.line(), err.column());
        Self {
            src: NamedSource::new(file_name, content.to_string()),
            span: offset.into(),
            message: err.to_string(),
        }
    }
}

/// Everything that can stop a reorder run.
#[derive(Debug, Error, Diagnostic)]
pub enum ReorderError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(schema_reorder::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseDiagnostic),

    #[error("expected {pointer} to be a JSON object, found {found}")]
    #[diagnostic(
        code(schema_reorder::not_an_object),
        help("the rule definitions must live in an object at /properties/configureRules/properties")
    )]
    NotAnObject {
        pointer: String,
        found: &'static str,
    },

    #[error("failed to serialize schema")]
    #[diagnostic(code(schema_reorder::serialize))]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(schema_reorder::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convert 1-based line and column to a byte offset in content.
pub fn line_col_to_offset(content: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    // Lines keep their terminator so `\r\n` counts as two bytes.
    for (i, l) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return (offset + col.saturating_sub(1)).min(content.len());
        }
        offset += l.len();
    }
    offset.min(content.len())
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_to_offset_first_line() {
        assert_eq!(line_col_to_offset("hello\nworld", 1, 1), 0);
        assert_eq!(line_col_to_offset("hello\nworld", 1, 3), 2);
    }

    #[test]
    fn line_col_to_offset_second_line() {
        assert_eq!(line_col_to_offset("hello\nworld", 2, 1), 6);
        assert_eq!(line_col_to_offset("hello\nworld", 2, 3), 8);
    }

    #[test]
    fn line_col_to_offset_counts_crlf() {
        let content = "{\r\n  \"a\": 1,\r\n  oops\r\n}";
        let offset = line_col_to_offset(content, 3, 3);
        assert!(content[offset..].starts_with("oops"));
        assert_eq!(line_col_to_offset("a\r\nb\r\nc", 3, 1), 6);
    }

    #[test]
    fn line_col_to_offset_past_end_is_clamped() {
        assert_eq!(line_col_to_offset("ab", 5, 1), 2);
        assert_eq!(line_col_to_offset("ab", 1, 9), 2);
    }

    #[test]
    fn parse_diagnostic_points_at_error() {
        let content = "{\n  \"a\": ,\n}";
        let Err(err) = serde_json::from_str::<serde_json::Value>(content) else {
            panic!("expected parse error");
        };
        let diag = ParseDiagnostic::new("bad.json", content, &err);
        assert_eq!(diag.span.offset(), line_col_to_offset(content, err.line(), err.column()));
        assert!(diag.message.contains("line 2"));
    }

    #[test]
    fn type_names() {
        assert_eq!(json_type_name(&serde_json::json!([])), "array");
        assert_eq!(json_type_name(&serde_json::json!("x")), "string");
        assert_eq!(json_type_name(&serde_json::json!(null)), "null");
    }
}
