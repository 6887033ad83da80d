//! Context types for rule execution.
//!
//! [`AncestorContext`] reconstructs ancestry with an explicit stack maintained
//! by the traversal engine, instead of giving tree nodes parent back-references.
//! Each traversal session owns its own context, so concurrent sessions over
//! different files never observe each other's state.

use std::path::{Path, PathBuf};
use tree_sitter::Node;

/// The path of enclosing syntax nodes from the tree root down to the direct
/// parent of the node currently being inspected.
///
/// Index 0 is the tree root; the last element is the direct parent. The stack
/// is pushed on entering a node and popped on leaving it, only by the
/// traversal engine. Rules receive it read-only.
#[derive(Debug, Default)]
pub struct AncestorContext<'tree> {
    nodes: Vec<Node<'tree>>,
}

impl<'tree> AncestorContext<'tree> {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Pushes a node on entering it. Engine-only.
    pub(crate) fn push(&mut self, node: Node<'tree>) {
        self.nodes.push(node);
    }

    /// Pops the most recently entered node on leaving it. Engine-only.
    pub(crate) fn pop(&mut self) {
        self.nodes.pop();
    }

    /// The ancestor path, root first.
    #[must_use]
    pub fn nodes(&self) -> &[Node<'tree>] {
        &self.nodes
    }

    /// Iterates the ancestors from the root down to the direct parent.
    pub fn iter(&self) -> std::slice::Iter<'_, Node<'tree>> {
        self.nodes.iter()
    }

    /// Current nesting depth (number of ancestors).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no ancestors are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The direct parent of the node currently being inspected.
    #[must_use]
    pub fn parent(&self) -> Option<&Node<'tree>> {
        self.nodes.last()
    }

    /// Returns true if any ancestor, at any depth, has the given node kind.
    #[must_use]
    pub fn has_kind(&self, kind: &str) -> bool {
        self.nodes.iter().any(|n| n.kind() == kind)
    }
}

impl<'a, 'tree> IntoIterator for &'a AncestorContext<'tree> {
    type Item = &'a Node<'tree>;
    type IntoIter = std::slice::Iter<'a, Node<'tree>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Context provided to rules about the file being analyzed.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Whether this file follows the Go test file convention (`_test.go`).
    pub is_test: bool,
    /// Path relative to the scan root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let is_test = Self::detect_test_file(path);
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            is_test,
            relative_path,
        }
    }

    /// Returns the source text covered by a node, or `""` on a range mismatch.
    #[must_use]
    pub fn node_text(&self, node: &Node<'_>) -> &'a str {
        node.utf8_text(self.content.as_bytes()).unwrap_or("")
    }

    /// Detects if a file is a Go test file (`*_test.go`).
    fn detect_test_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with("_test.go"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn push_pop_follow_stack_discipline() {
        let tree = parse("package main\nfunc f() {}\n");
        let root = tree.root_node();
        let child = root.child(0).unwrap();

        let mut ctx = AncestorContext::new();
        assert!(ctx.is_empty());

        ctx.push(root);
        ctx.push(child);
        assert_eq!(ctx.depth(), 2);
        assert_eq!(ctx.parent().map(tree_sitter::Node::kind), Some(child.kind()));
        assert_eq!(ctx.nodes()[0].kind(), "source_file");

        ctx.pop();
        assert_eq!(ctx.depth(), 1);
        ctx.pop();
        assert!(ctx.is_empty());
        assert!(ctx.parent().is_none());
    }

    #[test]
    fn has_kind_scans_entire_path() {
        let tree = parse("package main\nfunc f() { select {} }\n");
        let root = tree.root_node();

        let mut ctx = AncestorContext::new();
        ctx.push(root);
        assert!(ctx.has_kind("source_file"));
        assert!(!ctx.has_kind("select_statement"));
    }

    #[test]
    fn detects_go_test_files() {
        assert!(FileContext::detect_test_file(Path::new("pkg/server_test.go")));
        assert!(!FileContext::detect_test_file(Path::new("pkg/server.go")));
        assert!(!FileContext::detect_test_file(Path::new("pkg/test_server.go")));
        assert!(!FileContext::detect_test_file(Path::new("tests.go")));
    }

    #[test]
    fn relative_path_strips_root() {
        let content = "package main\n";
        let ctx = FileContext::new(
            Path::new("/proj/pkg/main.go"),
            content,
            Path::new("/proj"),
        );
        assert_eq!(ctx.relative_path, PathBuf::from("pkg/main.go"));
        assert!(!ctx.is_test);
    }

    #[test]
    fn node_text_returns_source_slice() {
        let source = "package main\n";
        let tree = parse(source);
        let ctx = FileContext::new(Path::new("main.go"), source, Path::new("."));
        assert_eq!(ctx.node_text(&tree.root_node()), source);
    }
}
