//! Terminal rendering for wizard output
//!
//! Markdown from the core display types goes through termimad when color is
//! enabled and is printed as is otherwise. Errors go to stderr.

use foodlog_core::OperationStatus;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
            return;
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }

    /// Render a status line, failures to stderr
    pub fn status(&self, status: &OperationStatus) {
        if status.success {
            self.render(&status.to_string());
        } else if self.rich_enabled {
            eprint!("\x1b[31m{status}\x1b[0m");
        } else {
            eprint!("{status}");
        }
    }

    /// Dimmed hint line
    pub fn hint(&self, text: &str) {
        if self.rich_enabled {
            println!("\x1b[2m{text}\x1b[0m");
        } else {
            println!("{text}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
