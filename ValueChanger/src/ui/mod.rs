//! Presentation layer: boxed menu, animations and colored messages
//!
//! [`Ui`] pairs a [`Surface`] (colors, cursor, width) with the text writer.
//! On Windows the writer is stdout and the surface is the console handle
//! behind it; tests use a fake surface and a `Vec<u8>`.

mod animation;
mod boxes;
mod menu;

pub use animation::progress_frame;
pub use boxes::{box_width, line_content, rule};
pub use menu::{parse_choice, MenuChoice};

use crate::config::AnimationConfig;
use crate::console::{palette, Attr, ScopedColor, Surface};
use std::io::{self, BufRead, Write};

pub struct Ui<S: Surface, W: Write> {
    surface: S,
    out: W,
    anim: AnimationConfig,
}

impl<S: Surface, W: Write> Ui<S, W> {
    pub fn new(surface: S, out: W, anim: AnimationConfig) -> Self {
        Self { surface, out, anim }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn anim(&self) -> &AnimationConfig {
        &self.anim
    }

    /// Everything written so far (useful with an in-memory writer)
    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.surface.clear();
        Ok(())
    }

    /// Plain text, flushed immediately
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Text in `color`; the previous color comes back afterwards
    pub fn print_colored(&mut self, color: Attr, text: &str) -> io::Result<()> {
        let _color = ScopedColor::new(&self.surface, color);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.print_colored(palette::RED_BOLD, text)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.print_colored(palette::GREEN_BOLD, text)
    }

    /// Wait for ENTER. Returns `false` when the input is exhausted.
    pub fn pause<R: BufRead>(&mut self, input: &mut R) -> io::Result<bool> {
        self.print("\nPress ENTER to continue...")?;
        Ok(read_line_lossy(input)?.is_some())
    }
}

/// Read one line, replacing invalid UTF-8 instead of failing
///
/// Returns `None` at end of input. The line terminator is kept.
pub fn read_line_lossy<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

#[cfg(test)]
pub(crate) fn output_text<S: Surface>(ui: &Ui<S, Vec<u8>>) -> String {
    String::from_utf8_lossy(ui.writer()).into_owned()
}
