//! Go source parsing via tree-sitter.
//!
//! Wraps the `tree-sitter-go` grammar behind a small collaborator interface:
//! the rest of the crate only sees a parsed [`Tree`] or a [`ParseError`].
//! tree-sitter is error-tolerant, so a tree whose root reports syntax errors
//! is surfaced as a per-file parse failure rather than analyzed half-parsed.

use thiserror::Error;
use tree_sitter::{Language, Parser, Tree};

/// Errors from parsing one Go source unit.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load Go grammar: {0}")]
    Language(String),

    /// tree-sitter returned no tree (cancellation or invalid input).
    #[error("parser produced no syntax tree")]
    NoTree,

    /// The source contains syntax errors.
    #[error("syntax error at line {line}, column {column}")]
    Syntax {
        /// Line of the first error node (1-indexed).
        line: usize,
        /// Column of the first error node (1-indexed).
        column: usize,
    },
}

/// Parser for Go source files.
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Parses one Go source unit into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] when the source does not parse cleanly,
    /// with the position of the first error node.
    pub fn parse(&self, source: &str) -> Result<Tree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;

        let root = tree.root_node();
        if root.has_error() {
            let point = first_error_point(root);
            return Err(ParseError::Syntax {
                line: point.row + 1,
                column: point.column + 1,
            });
        }

        Ok(tree)
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the start position of the first ERROR or MISSING node.
fn first_error_point(root: tree_sitter::Node<'_>) -> tree_sitter::Point {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return node.start_position();
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return root.start_position();
            }
        }
    }
}
