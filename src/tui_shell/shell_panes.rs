//! The shell's three fixed pane slots and their contents.

use std::path::Path;

use crate::panes::{Pane, Panes};

#[derive(Default)]
pub(super) struct PaneContent {
    pub(super) title: String,
    pub(super) text: String,
    pub(super) scroll: u16,
}

/// Owns one slot per pane for the lifetime of the shell. Showing a buffer
/// rebinds the slot's content; the slot itself is reused, never reopened.
pub(super) struct PaneShell {
    pub(super) description: PaneContent,
    pub(super) result: PaneContent,
    pub(super) code: PaneContent,
    laid_out: bool,
}

impl PaneShell {
    pub(super) fn new() -> Self {
        Self {
            description: PaneContent {
                title: "description".to_string(),
                ..Default::default()
            },
            result: PaneContent {
                title: "result".to_string(),
                ..Default::default()
            },
            code: PaneContent {
                title: "code".to_string(),
                ..Default::default()
            },
            laid_out: false,
        }
    }

    /// Establishes the fixed frame: code full-height right, description
    /// top-left, result bottom-left. Contents survive a re-layout.
    pub(super) fn layout(&mut self) {
        self.laid_out = true;
    }

    pub(super) fn laid_out(&self) -> bool {
        self.laid_out
    }

    pub(super) fn content(&self, pane: Pane) -> &PaneContent {
        match pane {
            Pane::Description => &self.description,
            Pane::Result => &self.result,
            Pane::Code => &self.code,
        }
    }

    fn content_mut(&mut self, pane: Pane) -> &mut PaneContent {
        match pane {
            Pane::Description => &mut self.description,
            Pane::Result => &mut self.result,
            Pane::Code => &mut self.code,
        }
    }

    pub(super) fn scroll(&mut self, pane: Pane, delta: i32) {
        let content = self.content_mut(pane);
        let max = content.text.lines().count().saturating_sub(1) as i32;
        content.scroll = (content.scroll as i32 + delta).clamp(0, max) as u16;
    }
}

impl Panes for PaneShell {
    fn show_description(&mut self, text: &str) {
        let slot = &mut self.description;
        slot.text = text.to_string();
        slot.scroll = 0;
    }

    fn show_result(&mut self, text: &str) {
        // Replaced wholesale on every write.
        let slot = &mut self.result;
        slot.text = text.to_string();
        slot.scroll = 0;
    }

    fn show_code(&mut self, path: &Path, text: &str) {
        let slot = &mut self.code;
        slot.title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "code".to_string());
        slot.text = text.to_string();
        slot.scroll = 0;
    }
}
