//! Rule flagging channel sends outside any select statement.
//!
//! # Rationale
//!
//! A bare send on a channel blocks the sending goroutine until a receiver is
//! ready. Wrapping the send in a `select` (typically with a `default` case)
//! makes the blocking behavior explicit and escapable.
//!
//! # Precision
//!
//! The check is purely syntactic: a select statement *anywhere* in the
//! ancestor chain suppresses the warning, whether or not the send is one of
//! the select's case operands and whether or not the select has a `default`
//! case. Sends nested in blocks, closures, or goroutines under a select are
//! all exempt.

use chanlint_core::{AncestorContext, FileContext, Issue, Location, Rule, Severity};
use tree_sitter::Node;

/// Rule code for send-without-select.
pub const CODE: &str = "CH001";

/// Rule name for send-without-select.
pub const NAME: &str = "send-without-select";

/// Fixed message emitted for every finding.
pub const MESSAGE: &str = "channel send without select statement may block indefinitely";

/// Flags send statements with no enclosing select statement.
#[derive(Debug, Clone)]
pub struct SendWithoutSelect {
    /// Skip Go test files (`*_test.go`).
    pub allow_in_tests: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SendWithoutSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl SendWithoutSelect {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_in_tests: false,
            severity: Severity::Warning,
        }
    }

    /// Sets whether to skip test files.
    #[must_use]
    pub fn allow_in_tests(mut self, allow: bool) -> Self {
        self.allow_in_tests = allow;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for SendWithoutSelect {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags channel sends outside any select statement"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn kinds(&self) -> &'static [&'static str] {
        &["send_statement"]
    }

    fn inspect(
        &self,
        ctx: &FileContext<'_>,
        node: &Node<'_>,
        ancestors: &AncestorContext<'_>,
    ) -> Vec<Issue> {
        if self.allow_in_tests && ctx.is_test {
            return Vec::new();
        }

        // Any select at any depth above the send suppresses the finding.
        if ancestors.has_kind("select_statement") {
            return Vec::new();
        }

        vec![Issue::new(
            CODE,
            NAME,
            self.severity,
            Location::from_node(ctx.relative_path.clone(), node),
            MESSAGE,
        )]
    }
}
