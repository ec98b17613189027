//! Terminal rendering of markdown output
//!
//! Snapshot summaries and result messages are markdown. With color enabled
//! they go through termimad, which lays out the summary table; otherwise the
//! markdown is printed unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        // Headers keep their hash marks; everything between them is handed
        // to termimad as one block so tables are aligned as a whole.
        let mut block = String::new();
        for line in markdown.lines() {
            if line.starts_with('#') {
                self.flush(&mut block);
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                block.push_str(line);
                block.push('\n');
            }
        }
        self.flush(&mut block);
        Ok(())
    }

    fn flush(&self, block: &mut String) {
        if !block.is_empty() {
            self.skin.print_text(block);
            block.clear();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
