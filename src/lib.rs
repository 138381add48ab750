//! Turn a textual tree drawing into real directories and empty files.
//!
//! The input grammar accepts the usual box-drawing connectors (`├──`,
//! `└──`, `│`) as well as plain 4-space indentation, with `#` and `//`
//! comments. The first meaningful line names the project root.
//!
//! [`api::build`] is the interactive entry point (preview + confirmation);
//! [`builder::build`] is the headless one.

pub mod api;
pub mod builder;
pub mod errors;
pub mod parser;
pub mod plan;
pub mod preview;
pub mod prompt;
pub mod reveal;
