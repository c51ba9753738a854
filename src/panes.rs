//! Presentation port for the fixed three-pane arrangement.
//!
//! The orchestration core depends only on this trait; how panes map onto a
//! terminal (or plain stdout) is an implementation concern.

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Description,
    Result,
    Code,
}

pub trait Panes {
    /// Exercise description, shown read-only.
    fn show_description(&mut self, text: &str);

    /// Test/submission output. Prior content is replaced, never appended.
    fn show_result(&mut self, text: &str);

    /// A workspace file, routed to the code pane.
    fn show_code(&mut self, path: &Path, text: &str);
}
