//! # chanlint-core
//!
//! Core framework for linting Go channel usage, built on tree-sitter.
//!
//! This crate provides the foundational traits and types for the chanlint
//! diagnostic tool. It includes:
//!
//! - [`Rule`] trait for per-node syntax tree rules
//! - [`Walker`] for depth-first traversal with ancestor tracking
//! - [`AncestorContext`] exposing the path from the tree root to the
//!   current node's parent
//! - [`Analyzer`] for orchestrating lint execution across files
//! - [`Issue`] for representing diagnostic findings
//!
//! ## Example
//!
//! ```ignore
//! use chanlint_core::Analyzer;
//! use chanlint_rules::SendWithoutSelect;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./cmd")
//!     .rule(SendWithoutSelect::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod parser;
mod rule;
mod types;
mod walker;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{AncestorContext, FileContext};
pub use parser::{GoParser, ParseError};
pub use rule::{Rule, RuleBox};
pub use types::{Issue, IssueCollector, Location, ScanResult, Severity};
pub use walker::Walker;
