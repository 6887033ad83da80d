//! # chanlint-rules
//!
//! Built-in rules for chanlint.
//!
//! ## Available Rules
//!
//! | Code | Name | Severity | Description |
//! |-------|------|----------|-------------|
//! | CH001 | `send-without-select` | warning | Channel send outside any select statement |
//! | CH002 | `unbuffered-channel` | info | `make(chan T)` without a buffer capacity |
//!
//! ## Usage
//!
//! ```ignore
//! use chanlint_core::Analyzer;
//! use chanlint_rules::{SendWithoutSelect, UnbufferedChannel};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./cmd")
//!     .rule(SendWithoutSelect::new())
//!     .rule(UnbufferedChannel::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod presets;
mod send_without_select;
mod unbuffered_channel;

pub use presets::{all_rules, minimal_rules, recommended_rules, Preset};
pub use send_without_select::SendWithoutSelect;
pub use unbuffered_channel::UnbufferedChannel;

/// Re-export core types for convenience.
pub use chanlint_core::{Issue, Rule, Severity};
