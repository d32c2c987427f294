//! Bordered boxes sized to the console
//!
//! ```text
//! +--------------------------------------------------------------------+
//! |                        Value + Name Changer                        |
//! +--------------------------------------------------------------------+
//! | Brightness target ................................... ALWAYS MAX|
//! +--------------------------------------------------------------------+
//! ```

use super::Ui;
use crate::config::MIN_BOX_WIDTH;
use crate::console::{palette, ScopedColor, Surface};
use std::io::{self, Write};

/// Total box width for a console `width` columns wide
pub fn box_width(width: usize) -> usize {
    width.max(MIN_BOX_WIDTH)
}

/// Horizontal border with `inner` dashes
pub fn rule(inner: usize) -> String {
    format!("+{}+", "-".repeat(inner))
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Interior text of a box line, at most `inner` characters
///
/// With a non-empty `right`, the two sides are joined by a dotted leader of
/// at least one dot.
pub fn line_content(left: &str, right: &str, inner: usize) -> String {
    let content = if right.is_empty() {
        left.to_string()
    } else {
        let used = left.chars().count() + right.chars().count() + 2;
        let dots = inner.saturating_sub(used).max(1);
        format!("{left} {} {right}", ".".repeat(dots))
    };
    truncate(&content, inner)
}

impl<S: Surface, W: Write> Ui<S, W> {
    fn inner_width(&self) -> usize {
        box_width(self.surface.width()) - 2
    }

    /// Top border, centered title, separator
    pub fn box_header(&mut self, title: &str) -> io::Result<()> {
        let inner = self.inner_width();
        writeln!(self.out, "{}", rule(inner))?;
        {
            let _color = ScopedColor::new(&self.surface, palette::LIGHT_PINK);
            let text = truncate(&format!(" {title} "), inner);
            let len = text.chars().count();
            let left = (inner - len) / 2;
            writeln!(
                self.out,
                "|{}{}{}|",
                " ".repeat(left),
                text,
                " ".repeat(inner - left - len)
            )?;
            self.out.flush()?;
        }
        writeln!(self.out, "{}", rule(inner))
    }

    /// Left-aligned line
    pub fn box_line(&mut self, left: &str) -> io::Result<()> {
        self.box_pair(left, "")
    }

    /// Left text and right text joined by dots
    pub fn box_pair(&mut self, left: &str, right: &str) -> io::Result<()> {
        let inner = self.inner_width();
        let content = line_content(left, right, inner);
        let pad = inner - content.chars().count();
        writeln!(self.out, "|{content}{}|", " ".repeat(pad))
    }

    pub fn box_footer(&mut self) -> io::Result<()> {
        let inner = self.inner_width();
        writeln!(self.out, "{}", rule(inner))
    }
}
