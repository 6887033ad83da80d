//! Rule trait for defining channel-usage lint rules.

use tree_sitter::Node;

use crate::context::{AncestorContext, FileContext};
use crate::types::{Issue, Severity};

/// A per-node lint rule driven by the traversal engine.
///
/// Rules declare the node kinds they react to via [`Rule::kinds`] and are
/// invoked once for every visited node of a matching kind, together with the
/// ancestor path from the tree root to that node's parent. Rules hold no
/// mutable state; everything they need is in the node, the ancestor context,
/// and the file context, which keeps them independently testable without a
/// full tree walk.
///
/// # Example
///
/// ```ignore
/// use chanlint_core::{AncestorContext, FileContext, Issue, Rule, Severity};
///
/// pub struct NoGotoSend;
///
/// impl Rule for NoGotoSend {
///     fn name(&self) -> &'static str { "no-goto-send" }
///     fn code(&self) -> &'static str { "CH099" }
///     fn kinds(&self) -> &'static [&'static str] { &["send_statement"] }
///
///     fn inspect(
///         &self,
///         ctx: &FileContext<'_>,
///         node: &tree_sitter::Node<'_>,
///         ancestors: &AncestorContext<'_>,
///     ) -> Vec<Issue> {
///         // ...
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "send-without-select").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CH001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for issues from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Returns the tree-sitter node kinds this rule wants to inspect.
    fn kinds(&self) -> &'static [&'static str];

    /// Inspects a single node and returns any issues found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `node` - The node being visited; its kind is one of [`Rule::kinds`]
    /// * `ancestors` - Read-only path from the tree root to the node's parent
    ///
    /// # Returns
    ///
    /// Zero or more issues for this node.
    fn inspect(
        &self,
        ctx: &FileContext<'_>,
        node: &Node<'_>,
        ancestors: &AncestorContext<'_>,
    ) -> Vec<Issue>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
