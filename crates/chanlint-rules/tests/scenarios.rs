//! End-to-end scenarios running both built-in rules over one traversal.

use chanlint_core::{
    AncestorContext, FileContext, GoParser, IssueCollector, Severity, Walker,
};
use chanlint_rules::recommended_rules;
use std::path::Path;

fn scan(source: &str) -> Vec<chanlint_core::Issue> {
    let rules = recommended_rules();
    let tree = GoParser::new().parse(source).expect("scenario must parse");
    let ctx = FileContext::new(Path::new("main.go"), source, Path::new("."));
    let mut ancestors = AncestorContext::new();
    let mut collector = IssueCollector::new();
    Walker::new(&rules).walk(&ctx, tree.root_node(), &mut ancestors, &mut collector);
    assert!(ancestors.is_empty(), "context must drain after traversal");
    collector.into_issues()
}

#[test]
fn unbuffered_creation_and_bare_send() {
    let issues = scan(
        "package main\n\
         func bad() {\n\
         \tch := make(chan int)\n\
         \tch <- 1\n\
         }\n",
    );
    assert_eq!(issues.len(), 2);

    // Issues arrive in visit order: the make call precedes the send.
    assert_eq!(issues[0].severity, Severity::Info);
    assert!(issues[0].message.contains("unbuffered channel creation"));
    assert_eq!(issues[0].location.line, 3);

    assert_eq!(issues[1].severity, Severity::Warning);
    assert!(issues[1].message.contains("may block indefinitely"));
    assert_eq!(issues[1].location.line, 4);
}

#[test]
fn buffered_creation_still_warns_about_send() {
    let issues = scan(
        "package main\n\
         func someFunc() {\n\
         \tch := make(chan int, 1)\n\
         \tch <- 1\n\
         }\n",
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(issues[0].message.contains("may block indefinitely"));
}

#[test]
fn buffered_creation_with_select_is_clean() {
    let issues = scan(
        "package main\n\
         func good() {\n\
         \tch := make(chan int, 1)\n\
         \tselect {\n\
         \tcase ch <- 1:\n\
         \tdefault:\n\
         \t}\n\
         }\n",
    );
    assert!(issues.is_empty());
}

#[test]
fn unbuffered_creation_in_select_only_flags_creation() {
    let issues = scan(
        "package main\n\
         func good() {\n\
         \tch := make(chan int)\n\
         \tselect {\n\
         \tcase ch <- 1:\n\
         \tdefault:\n\
         \t}\n\
         }\n",
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Info);
    assert!(issues[0].message.contains("unbuffered channel creation"));
}

#[test]
fn send_two_blocks_deep_inside_select_case_is_clean() {
    let issues = scan(
        "package main\n\
         func good(ch chan int) {\n\
         \tselect {\n\
         \tcase <-ch:\n\
         \t\t{\n\
         \t\t\t{\n\
         \t\t\t\tch <- 1\n\
         \t\t\t}\n\
         \t\t}\n\
         \tdefault:\n\
         \t}\n\
         }\n",
    );
    assert!(issues.is_empty());
}

#[test]
fn only_the_send_outside_select_is_flagged() {
    let issues = scan(
        "package main\n\
         func mixed(ch chan int) {\n\
         \tselect {\n\
         \tcase ch <- 1:\n\
         \tdefault:\n\
         \t}\n\
         \tch <- 2\n\
         }\n",
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].location.line, 7);
}

#[test]
fn goroutine_with_select_is_clean() {
    let issues = scan(
        "package main\n\
         func good(ch chan int) {\n\
         \tgo func() {\n\
         \t\tselect {\n\
         \t\tcase ch <- 1:\n\
         \t\tdefault:\n\
         \t\t}\n\
         \t}()\n\
         }\n",
    );
    assert!(issues.is_empty());
}

#[test]
fn rescan_is_idempotent() {
    let source = "package main\n\
                  func bad() {\n\
                  \tch := make(chan int)\n\
                  \tch <- 1\n\
                  }\n";
    let first: Vec<String> = scan(source).iter().map(ToString::to_string).collect();
    let second: Vec<String> = scan(source).iter().map(ToString::to_string).collect();
    assert_eq!(first, second);
}

#[test]
fn empty_file_yields_no_issues() {
    assert!(scan("").is_empty());
    assert!(scan("package main\n").is_empty());
}
