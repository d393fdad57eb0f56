//! Presentation Layer
//!
//! Text output for the `menu-mirror` binary and anyone else who wants to
//! look at a mirrored tree.
//!
//! ## Structure
//!
//! - `tree` - indented dump of a proxy menu
//! - `output` - summaries, warnings and errors

pub mod output;
pub mod tree;

pub(crate) use output::Icons;
pub use output::{render_error, render_summary, render_warning};
pub use tree::TreeRenderer;
