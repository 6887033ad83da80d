//! Traversal engine: depth-first tree walk with ancestor tracking.
//!
//! The walker visits every node of one syntax tree exactly once. On entering
//! a node it offers the node to every rule registered for that node's kind,
//! then pushes the node onto the ancestor stack before descending into its
//! children; the stack is popped on ascent. Pushes and pops pair exactly, so
//! the context a caller passes in is empty again when the walk returns, and
//! two sibling subtrees never see each other's ancestors.

use tree_sitter::Node;

use crate::context::{AncestorContext, FileContext};
use crate::rule::{Rule, RuleBox};
use crate::types::IssueCollector;

/// Drives one depth-first traversal session over a parsed tree.
///
/// The walker holds only the rule set; all per-session state (the ancestor
/// context and the issue collector) is supplied by the caller, one fresh pair
/// per file, so sessions share no mutable state and may run concurrently on
/// different files.
pub struct Walker<'r> {
    rules: Vec<&'r dyn Rule>,
}

impl<'r> Walker<'r> {
    /// Creates a walker over the given rule set.
    #[must_use]
    pub fn new(rules: &'r [RuleBox]) -> Self {
        Self {
            rules: rules.iter().map(AsRef::as_ref).collect(),
        }
    }

    /// Creates a walker from borrowed rules, e.g. a filtered subset.
    pub fn from_rules(rules: impl IntoIterator<Item = &'r dyn Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Walks the tree rooted at `root`, dispatching matching rules per node.
    ///
    /// Rules see the ancestor path from the tree root down to the current
    /// node's direct parent. Issues are appended to `collector` in visit
    /// order. The walk mutates only `ancestors` and `collector`, never the
    /// tree.
    pub fn walk<'tree>(
        &self,
        ctx: &FileContext<'_>,
        root: Node<'tree>,
        ancestors: &mut AncestorContext<'tree>,
        collector: &mut IssueCollector,
    ) {
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();
            self.dispatch(ctx, &node, ancestors, collector);

            if cursor.goto_first_child() {
                ancestors.push(node);
                continue;
            }

            // Leaf: move to the next sibling, unwinding the stack as we
            // leave exhausted subtrees.
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
                ancestors.pop();
            }
        }
    }

    fn dispatch(
        &self,
        ctx: &FileContext<'_>,
        node: &Node<'_>,
        ancestors: &AncestorContext<'_>,
        collector: &mut IssueCollector,
    ) {
        let kind = node.kind();
        for rule in &self.rules {
            if rule.kinds().contains(&kind) {
                collector.extend(rule.inspect(ctx, node, ancestors));
            }
        }
    }
}
