//! Terminal rendering of markdown output
//!
//! Rich mode styles the markdown with termimad; plain mode (`--no-color`)
//! prints it untouched so output stays greppable.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints a markdown document.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            print!("{}", self.skin.term_text(markdown));
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Prints a markdown body under a second-level heading.
    pub fn render_section(&self, title: &str, body: &str) -> Result<()> {
        self.render(&Self::section(title, body))
    }

    fn section(title: &str, body: &str) -> String {
        format!("## {title}\n\n{body}")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
