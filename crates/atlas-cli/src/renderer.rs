//! Terminal output for rendered reports
//!
//! The report itself is plain text; in rich mode the header row and the rule
//! beneath it are coloured and status messages are rendered through termimad.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print report lines to stdout
    pub fn render(&self, lines: &[String]) -> Result<()> {
        let stdout = io::stdout();
        self.write_lines(&mut stdout.lock(), lines)
    }

    /// Write report lines, colouring the header and rule in rich mode
    pub fn write_lines<W: Write>(&self, out: &mut W, lines: &[String]) -> Result<()> {
        for (index, line) in lines.iter().enumerate() {
            match index {
                0 if self.rich_enabled => writeln!(out, "{}", line.as_str().bold().blue())?,
                1 if self.rich_enabled => writeln!(out, "{}", line.as_str().dark_grey())?,
                _ => writeln!(out, "{line}")?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Print a one-line status such as `OK: Spain`
    pub fn status(&self, label: &str, text: &str) {
        if self.rich_enabled {
            self.skin.print_inline(&format!("**{label}** `{text}`"));
            println!();
        } else {
            println!("{label} {text}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<String> {
        vec!["Key  Value".to_string(), "---  -----".to_string(), "a    b".to_string()]
    }

    #[test]
    fn test_plain_renderer_writes_lines_verbatim() {
        let renderer = TerminalRenderer::new(false);
        let mut out = Vec::new();
        renderer.write_lines(&mut out, &lines()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Key  Value\n---  -----\na    b\n");
    }

    #[test]
    fn test_rich_renderer_styles_header_only() {
        let renderer = TerminalRenderer::new(true);
        let mut out = Vec::new();
        renderer.write_lines(&mut out, &lines()).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("\x1b["));
        assert!(output.ends_with("\na    b\n"));
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
