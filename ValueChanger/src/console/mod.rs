//! Console surface: colors, width, clearing and cursor visibility
//!
//! [`Surface`] is the seam between drawing code and the terminal. The
//! Windows backend ([`WinConsole`]) talks to the console handle directly;
//! tests use an in-memory surface.

mod surface;
#[cfg(windows)]
mod win;

pub use surface::{palette, Attr, HiddenCursor, ScopedColor, Surface};
#[cfg(windows)]
pub use win::WinConsole;
