//! Rule flagging unbuffered channel creation.
//!
//! `make(chan T)` without a capacity argument creates a channel on which
//! every send blocks until a receiver is ready, a common source of
//! accidental blocking. The rule only looks at the builtin `make` called as
//! a bare identifier with a channel type as its first argument; `make` calls
//! for slices and maps, and calls that supply a capacity, are ignored.

use chanlint_core::{AncestorContext, FileContext, Issue, Location, Rule, Severity};
use tree_sitter::Node;

/// Rule code for unbuffered-channel.
pub const CODE: &str = "CH002";

/// Rule name for unbuffered-channel.
pub const NAME: &str = "unbuffered-channel";

/// Fixed message emitted for every finding.
pub const MESSAGE: &str = "unbuffered channel creation detected - consider specifying buffer size";

/// Flags `make(chan T)` calls with no buffer capacity.
#[derive(Debug, Clone)]
pub struct UnbufferedChannel {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for UnbufferedChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl UnbufferedChannel {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Info,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for UnbufferedChannel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags make(chan T) calls without a buffer capacity"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn kinds(&self) -> &'static [&'static str] {
        &["call_expression"]
    }

    fn inspect(
        &self,
        ctx: &FileContext<'_>,
        node: &Node<'_>,
        _ancestors: &AncestorContext<'_>,
    ) -> Vec<Issue> {
        let Some(callee) = node.child_by_field_name("function") else {
            return Vec::new();
        };
        if callee.kind() != "identifier" || ctx.node_text(&callee) != "make" {
            return Vec::new();
        }

        let Some(args) = node.child_by_field_name("arguments") else {
            return Vec::new();
        };
        let Some(first) = args.named_child(0) else {
            return Vec::new();
        };
        if first.kind() != "channel_type" {
            return Vec::new();
        }

        // A second argument is the capacity; its presence means buffered.
        if args.named_child_count() != 1 {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chanlint_core::{GoParser, IssueCollector, RuleBox, Walker};
    use std::path::Path;

    fn check(source: &str) -> Vec<Issue> {
        let tree = GoParser::new().parse(source).unwrap();
        let ctx = FileContext::new(Path::new("main.go"), source, Path::new("."));
        let rules: Vec<RuleBox> = vec![Box::new(UnbufferedChannel::new())];
        let mut ancestors = AncestorContext::new();
        let mut collector = IssueCollector::new();
        Walker::new(&rules).walk(&ctx, tree.root_node(), &mut ancestors, &mut collector);
        collector.into_issues()
    }

    #[test]
    fn flags_unbuffered_channel() {
        let issues = check(
            "package main\n\
             func f() {\n\
             \tch := make(chan int)\n\
             \t_ = ch\n\
             }\n",
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, CODE);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[0].message, MESSAGE);
        assert_eq!(issues[0].location.line, 3);
    }

    #[test]
    fn buffered_channel_is_fine() {
        let issues = check(
            "package main\n\
             func f() {\n\
             \tch := make(chan int, 1)\n\
             \t_ = ch\n\
             }\n",
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn make_slice_is_ignored() {
        let issues = check(
            "package main\n\
             func f() {\n\
             \ts := make([]int, 0)\n\
             \t_ = s\n\
             }\n",
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn make_map_is_ignored() {
        let issues = check(
            "package main\n\
             func f() {\n\
             \tm := make(map[string]int)\n\
             \t_ = m\n\
             }\n",
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn empty_struct_channel_matches() {
        let issues = check(
            "package main\n\
             func f() {\n\
             \tch := make(chan struct{})\n\
             \t_ = ch\n\
             }\n",
        );
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn qualified_call_is_ignored() {
        let issues = check(
            "package main\n\
             import \"builderpkg\"\n\
             func f() {\n\
             \tch := builderpkg.Make(1)\n\
             \t_ = ch\n\
             }\n",
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn directional_channel_type_counts() {
        let issues = check(
            "package main\n\
             func f() chan<- int {\n\
             \treturn make(chan<- int)\n\
             }\n",
        );
        assert_eq!(issues.len(), 1);
    }
}
