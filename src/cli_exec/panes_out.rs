use std::path::Path;

use praxis::panes::Panes;

/// Plain-stdout rendering of the three panes for one-shot CLI use.
pub(crate) struct StdoutPanes;

impl Panes for StdoutPanes {
    fn show_description(&mut self, text: &str) {
        println!("--- description ---");
        println!("{text}");
    }

    fn show_result(&mut self, text: &str) {
        println!("--- result ---");
        println!("{text}");
    }

    fn show_code(&mut self, path: &Path, text: &str) {
        println!("--- {} ---", path.display());
        println!("{text}");
    }
}
