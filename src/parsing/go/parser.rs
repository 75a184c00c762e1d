//! Go parser implementation
//!
//! Uses tree-sitter-go crate’s LANGUAGE constant (converted via .into()).
//!
//! Note: This parser uses ABI-15 (upgraded from ABI-14).
//! When migrating or updating the parser, ensure compatibility with ABI-15 features.

use crate::error::{GenError, GenResult};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Go language parser
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> GenResult<Self> {
        let mut parser = Parser::new();
        let lang = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&lang.into())
            .map_err(|e| GenError::ParserInit {
                reason: format!("Failed to set Go language: {e}"),
            })?;

        Ok(Self { parser })
    }

    /// Parse a whole Go file.
    ///
    /// Tree-sitter recovers from syntax errors, so the tree is searched for
    /// `ERROR` and `MISSING` nodes and the first one is reported as a failure.
    pub fn parse(&mut self, path: &Path, code: &str) -> GenResult<Tree> {
        let tree = self
            .parser
            .parse(code, None)
            .ok_or_else(|| GenError::SourceParse {
                path: path.to_path_buf(),
                line: 0,
                column: 0,
                reason: "parser produced no tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let (node, reason) = first_syntax_error(root)
                .map(|node| {
                    let reason = if node.is_missing() {
                        format!("missing {}", node.kind())
                    } else {
                        "unexpected syntax".to_string()
                    };
                    (node, reason)
                })
                .unwrap_or((root, "syntax error".to_string()));
            let position = node.start_position();
            return Err(GenError::SourceParse {
                path: path.to_path_buf(),
                line: position.row as u32 + 1,
                column: position.column as u32 + 1,
                reason,
            });
        }

        Ok(tree)
    }
}

/// Depth-first search for the earliest error or missing node
fn first_syntax_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(child) {
            return Some(found);
        }
    }
    None
}
