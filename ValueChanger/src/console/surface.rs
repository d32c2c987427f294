use crate::config::FALLBACK_WIDTH;

/// Console text attribute, laid out like a Windows character attribute word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attr(pub u16);

impl Attr {
    pub const BLUE: Attr = Attr(0x0001);
    pub const GREEN: Attr = Attr(0x0002);
    pub const RED: Attr = Attr(0x0004);
    pub const INTENSITY: Attr = Attr(0x0008);

    pub const fn with(self, other: Attr) -> Attr {
        Attr(self.0 | other.0)
    }
}

/// Colors used by the menu and animations
pub mod palette {
    use super::Attr;

    pub const LIGHT_PINK: Attr = Attr::RED.with(Attr::BLUE).with(Attr::INTENSITY);
    pub const HOT_PINK: Attr = Attr::RED.with(Attr::INTENSITY);
    pub const SOFT_PINK: Attr = Attr::RED.with(Attr::BLUE);
    pub const BRIGHT: Attr = Attr::RED.with(Attr::GREEN).with(Attr::BLUE).with(Attr::INTENSITY);
    pub const RED_BOLD: Attr = Attr::RED.with(Attr::INTENSITY);
    pub const GREEN_BOLD: Attr = Attr::GREEN.with(Attr::INTENSITY);
    /// Plain grey; assumed when the current attribute cannot be read
    pub const DIM: Attr = Attr::RED.with(Attr::GREEN).with(Attr::BLUE);

    /// Shades cycled by the progress bar and the title shimmer
    pub const PINK_SHADES: [Attr; 4] = [LIGHT_PINK, HOT_PINK, SOFT_PINK, BRIGHT];

    /// Shade for animation frame `i`
    pub fn shade(i: usize) -> Attr {
        PINK_SHADES[i % PINK_SHADES.len()]
    }
}

/// Terminal operations needed by the presentation layer
///
/// All methods are pass-throughs. Queries that can fail return `None` (or a
/// fallback for [`Surface::width`]); commands ignore failures.
pub trait Surface {
    /// Current text attribute, if the console can be queried
    fn attributes(&self) -> Option<Attr>;

    fn set_attributes(&self, attr: Attr);

    /// Visible window width in columns
    fn width(&self) -> usize {
        FALLBACK_WIDTH
    }

    /// Blank the buffer and move the cursor to the top-left corner
    fn clear(&self);

    fn show_cursor(&self, show: bool);

    fn set_title(&self, title: &str);
}

impl<S: Surface + ?Sized> Surface for &S {
    fn attributes(&self) -> Option<Attr> {
        (**self).attributes()
    }

    fn set_attributes(&self, attr: Attr) {
        (**self).set_attributes(attr)
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn show_cursor(&self, show: bool) {
        (**self).show_cursor(show)
    }

    fn set_title(&self, title: &str) {
        (**self).set_title(title)
    }
}

/// Applies a color for the lifetime of the guard and restores the previous
/// one when dropped, whatever path leaves the scope
#[must_use = "the color is restored as soon as the guard is dropped"]
pub struct ScopedColor<'a, S: Surface + ?Sized> {
    surface: &'a S,
    original: Attr,
}

impl<'a, S: Surface + ?Sized> ScopedColor<'a, S> {
    pub fn new(surface: &'a S, color: Attr) -> Self {
        let original = surface.attributes().unwrap_or(palette::DIM);
        surface.set_attributes(color);
        Self { surface, original }
    }
}

impl<S: Surface + ?Sized> Drop for ScopedColor<'_, S> {
    fn drop(&mut self) {
        self.surface.set_attributes(self.original);
    }
}

/// Hides the cursor until dropped
#[must_use = "the cursor reappears as soon as the guard is dropped"]
pub struct HiddenCursor<'a, S: Surface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: Surface + ?Sized> HiddenCursor<'a, S> {
    pub fn new(surface: &'a S) -> Self {
        surface.show_cursor(false);
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Drop for HiddenCursor<'_, S> {
    fn drop(&mut self) {
        self.surface.show_cursor(true);
    }
}

#[cfg(test)]
mod tests {
    use super::palette::*;
    use super::*;
    use crate::console::testing::FakeSurface;

    #[test]
    fn test_palette_values() {
        assert_eq!(LIGHT_PINK, Attr(0x0D));
        assert_eq!(HOT_PINK, Attr(0x0C));
        assert_eq!(SOFT_PINK, Attr(0x05));
        assert_eq!(BRIGHT, Attr(0x0F));
        assert_eq!(GREEN_BOLD, Attr(0x0A));
        assert_eq!(DIM, Attr(0x07));
    }

    #[test]
    fn test_shade_cycles() {
        assert_eq!(shade(0), LIGHT_PINK);
        assert_eq!(shade(3), BRIGHT);
        assert_eq!(shade(4), LIGHT_PINK);
        assert_eq!(shade(22), SOFT_PINK);
    }

    #[test]
    fn test_scoped_color_restores_on_drop() {
        let surface = FakeSurface::new(80);
        *surface.current.borrow_mut() = Some(Attr(0x1E));
        {
            let _c = ScopedColor::new(&surface, RED_BOLD);
            assert_eq!(surface.attributes(), Some(RED_BOLD));
        }
        assert_eq!(surface.attributes(), Some(Attr(0x1E)));
        assert_eq!(*surface.history.borrow(), vec![RED_BOLD, Attr(0x1E)]);
    }

    #[test]
    fn test_scoped_color_restores_on_early_return() {
        fn run(surface: &FakeSurface, fail: bool) -> Result<(), ()> {
            let _c = ScopedColor::new(surface, GREEN_BOLD);
            if fail {
                return Err(());
            }
            Ok(())
        }

        let surface = FakeSurface::new(80);
        assert!(run(&surface, true).is_err());
        assert_eq!(surface.attributes(), Some(DIM));
    }

    #[test]
    fn test_scoped_color_falls_back_to_dim() {
        let surface = FakeSurface::new(80);
        *surface.current.borrow_mut() = None;
        drop(ScopedColor::new(&surface, HOT_PINK));
        assert_eq!(surface.attributes(), Some(DIM));
    }

    #[test]
    fn test_nested_scopes_unwind_in_order() {
        let surface = FakeSurface::new(80);
        {
            let _outer = ScopedColor::new(&surface, LIGHT_PINK);
            {
                let _inner = ScopedColor::new(&surface, RED_BOLD);
            }
            assert_eq!(surface.attributes(), Some(LIGHT_PINK));
        }
        assert_eq!(surface.attributes(), Some(DIM));
    }

    #[test]
    fn test_hidden_cursor_shows_again() {
        let surface = FakeSurface::new(80);
        {
            let _cursor = HiddenCursor::new(&surface);
            assert_eq!(*surface.cursor_changes.borrow(), vec![false]);
        }
        assert_eq!(*surface.cursor_changes.borrow(), vec![false, true]);
    }
}
