//! Terminal rendering for markdown calendar output.
//!
//! Rich output goes through termimad; `--no-color` (or redirected output
//! under test) falls back to printing the markdown verbatim so the calendar
//! stays grep-able.

use termimad::{crossterm::style::Color, MadSkin};

/// Renderer that switches between rich markdown and plain text.
pub struct TerminalRenderer {
    rich: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a renderer; `rich` enables colors and markdown styling.
    pub fn new(rich: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::AnsiValue(245));
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich, skin }
    }

    /// Render markdown to stdout.
    pub fn render(&self, markdown: &str) {
        if self.rich {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
