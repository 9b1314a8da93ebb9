//! Terminal rendering for the `show` listings.
//!
//! Rich markdown output via termimad, with a plain-text fallback for
//! `--no-color` and non-interactive use.

use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown blocks to the terminal.
pub struct Renderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl Renderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Renders a markdown block, or prints it verbatim in plain mode.
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            println!("{}", self.skin.term_text(markdown));
        } else {
            println!("{markdown}");
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_renderer_is_plain() {
        let renderer = Renderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn default_is_rich() {
        let renderer = Renderer::default();
        assert!(renderer.rich_enabled);
    }
}
