use super::{read_line_lossy, Ui};
use crate::console::Surface;
use std::io::{self, BufRead, Write};

/// Menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    MaxBrightness,
    PlayerName,
    Exit,
    /// Anything else, including text that is not a number
    Invalid,
}

impl From<i32> for MenuChoice {
    fn from(code: i32) -> Self {
        match code {
            1 => Self::MaxBrightness,
            2 => Self::PlayerName,
            3 => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Read a leading integer from the line; 0 when there is none
///
/// Accepts an optional sign followed by digits and ignores whatever
/// follows them, so `"2 please"` is 2 while `"abc"` and `""` are 0.
pub fn parse_choice(line: &str) -> i32 {
    let s = line.trim_start();
    let digits_start = usize::from(s.starts_with(['+', '-']));
    let digits_end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_start);
    if digits_end == digits_start {
        return 0;
    }
    s[..digits_end].parse().unwrap_or(0)
}

impl<S: Surface, W: Write> Ui<S, W> {
    /// Draw the options and read one choice
    ///
    /// Returns `None` once the input is exhausted.
    pub fn menu<R: BufRead>(&mut self, input: &mut R) -> io::Result<Option<MenuChoice>> {
        self.box_line(" 1) Set brightness to MAX (auto apply)")?;
        self.box_line(" 2) Set custom player name (auto apply)")?;
        self.box_line(" 3) Exit")?;
        self.box_line(" Select option:")?;
        self.box_footer()?;
        self.print("> ")?;

        let Some(line) = read_line_lossy(input)? else {
            return Ok(None);
        };
        let code = parse_choice(&line);
        tracing::debug!(input = line.trim_end(), code, "Menu selection");
        Ok(Some(MenuChoice::from(code)))
    }
}
