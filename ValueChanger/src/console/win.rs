//! Windows console backend
//!
//! Text goes through Rust's buffered stdout while colors are set on the
//! console handle, so stdout is flushed before every attribute change or
//! clear to keep text and color in step.

use super::{Attr, Surface};
use crate::config::FALLBACK_WIDTH;
use std::io::Write;
use windows::core::HSTRING;
use windows::Win32::Foundation::{BOOL, HANDLE};
use windows::Win32::System::Console::{
    FillConsoleOutputAttribute, FillConsoleOutputCharacterW, GetConsoleCursorInfo,
    GetConsoleScreenBufferInfo, GetStdHandle, SetConsoleCursorInfo, SetConsoleCursorPosition,
    SetConsoleTextAttribute, SetConsoleTitleW, CONSOLE_CHARACTER_ATTRIBUTES,
    CONSOLE_CURSOR_INFO, CONSOLE_SCREEN_BUFFER_INFO, COORD, STD_OUTPUT_HANDLE,
};

/// Standard output console handle
pub struct WinConsole {
    handle: HANDLE,
}

impl WinConsole {
    pub fn new() -> Self {
        let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) }.unwrap_or_default();
        tracing::debug!(valid = !handle.is_invalid(), "Opened console output handle");
        Self { handle }
    }

    fn buffer_info(&self) -> Option<CONSOLE_SCREEN_BUFFER_INFO> {
        let mut info = CONSOLE_SCREEN_BUFFER_INFO::default();
        unsafe { GetConsoleScreenBufferInfo(self.handle, &mut info) }.ok()?;
        Some(info)
    }
}

impl Default for WinConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn flush_stdout() {
    let _ = std::io::stdout().flush();
}

impl Surface for WinConsole {
    fn attributes(&self) -> Option<Attr> {
        self.buffer_info().map(|info| Attr(info.wAttributes.0))
    }

    fn set_attributes(&self, attr: Attr) {
        flush_stdout();
        let _ = unsafe { SetConsoleTextAttribute(self.handle, CONSOLE_CHARACTER_ATTRIBUTES(attr.0)) };
    }

    fn width(&self) -> usize {
        match self.buffer_info() {
            Some(info) => {
                let cols = i32::from(info.srWindow.Right) - i32::from(info.srWindow.Left) + 1;
                usize::try_from(cols).unwrap_or(FALLBACK_WIDTH)
            }
            None => FALLBACK_WIDTH,
        }
    }

    fn clear(&self) {
        flush_stdout();
        let Some(info) = self.buffer_info() else {
            return;
        };
        let cells = u32::from(info.dwSize.X as u16) * u32::from(info.dwSize.Y as u16);
        let home = COORD { X: 0, Y: 0 };
        let mut written = 0u32;
        unsafe {
            let _ = FillConsoleOutputCharacterW(self.handle, u16::from(b' '), cells, home, &mut written);
            let _ = FillConsoleOutputAttribute(self.handle, info.wAttributes.0, cells, home, &mut written);
            let _ = SetConsoleCursorPosition(self.handle, home);
        }
    }

    fn show_cursor(&self, show: bool) {
        flush_stdout();
        let mut cursor = CONSOLE_CURSOR_INFO::default();
        unsafe {
            if GetConsoleCursorInfo(self.handle, &mut cursor).is_err() {
                return;
            }
            cursor.bVisible = BOOL::from(show);
            let _ = SetConsoleCursorInfo(self.handle, &cursor);
        }
    }

    fn set_title(&self, title: &str) {
        let _ = unsafe { SetConsoleTitleW(&HSTRING::from(title)) };
    }
}
