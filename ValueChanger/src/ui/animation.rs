//! Decorative animations
//!
//! Neither animation tracks real work. Callers play the progress bar to the
//! end and only then perform the registry write.

use super::Ui;
use crate::console::{palette, HiddenCursor, ScopedColor, Surface};
use crate::ui::box_width;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// One in-place frame of the progress bar: `\r<label> [###>...] NNN%`
pub fn progress_frame(label: &str, step: u32, steps: u32) -> String {
    let step = step.min(steps);
    let pct = if steps == 0 { 100 } else { step * 100 / steps };
    format!(
        "\r{label} [{}>{}] {pct:>3}%",
        "#".repeat(step as usize),
        ".".repeat((steps - step) as usize)
    )
}

fn pace(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

impl<S: Surface, W: Write> Ui<S, W> {
    /// Animate a bar from 0% to 100%, blocking for `steps * delay`
    pub fn progress_bar(&mut self, label: &str, steps: u32, delay: Duration) -> io::Result<()> {
        let _cursor = HiddenCursor::new(&self.surface);
        write!(self.out, "{label}")?;
        self.out.flush()?;

        for step in 0..=steps {
            {
                let _color = ScopedColor::new(&self.surface, palette::shade(step as usize));
                write!(self.out, "{}", progress_frame(label, step, steps))?;
                self.out.flush()?;
            }
            if step < steps {
                pace(delay);
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Redraw `title` centered, cycling the pink shades
    pub fn shimmer_title(&mut self, title: &str) -> io::Result<()> {
        let _cursor = HiddenCursor::new(&self.surface);
        let width = box_width(self.surface.width());
        let pad = width.saturating_sub(title.chars().count()) / 2;

        for frame in 0..self.anim.shimmer_frames {
            {
                let _color = ScopedColor::new(&self.surface, palette::shade(frame as usize));
                write!(self.out, "\r{}{title}", " ".repeat(pad))?;
                self.out.flush()?;
            }
            pace(self.anim.shimmer_delay);
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;
    use crate::console::testing::FakeSurface;
    use crate::ui::output_text;
    use std::time::Instant;

    #[test]
    fn test_progress_frame_layout() {
        assert_eq!(progress_frame("Go", 0, 4), "\rGo [>....]   0%");
        assert_eq!(progress_frame("Go", 2, 4), "\rGo [##>..]  50%");
        assert_eq!(progress_frame("Go", 4, 4), "\rGo [####>] 100%");
    }

    #[test]
    fn test_progress_frame_percent_rounds_down() {
        assert!(progress_frame("x", 1, 22).ends_with("  4%"));
        assert!(progress_frame("x", 21, 22).ends_with(" 95%"));
    }

    #[test]
    fn test_progress_frame_zero_steps() {
        assert_eq!(progress_frame("x", 0, 0), "\rx [>] 100%");
    }

    #[test]
    fn test_progress_bar_frames_and_colors() {
        let surface = FakeSurface::new(80);
        let mut ui = Ui::new(&surface, Vec::new(), AnimationConfig::instant());
        ui.progress_bar("Applying", 5, Duration::ZERO).unwrap();

        let text = output_text(&ui);
        assert!(text.starts_with("Applying\rApplying [>.....]   0%"));
        assert!(text.ends_with("\rApplying [#####>] 100%\n"));
        assert_eq!(text.matches('\r').count(), 6);

        // each frame sets a shade then restores
        let history = surface.history.borrow();
        assert_eq!(history.len(), 12);
        assert_eq!(history[0], palette::LIGHT_PINK);
        assert_eq!(history[2], palette::HOT_PINK);
        assert_eq!(history[8], palette::LIGHT_PINK);
        assert_eq!(surface.attributes(), Some(palette::DIM));
        assert_eq!(*surface.cursor_changes.borrow(), vec![false, true]);
    }

    #[test]
    fn test_progress_bar_blocks_for_steps_times_delay() {
        let surface = FakeSurface::new(80);
        let mut ui = Ui::new(&surface, Vec::new(), AnimationConfig::instant());
        let start = Instant::now();
        ui.progress_bar("Wait", 4, Duration::from_millis(10)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_shimmer_title_centered_frames() {
        let surface = FakeSurface::new(80);
        let mut ui = Ui::new(&surface, Vec::new(), AnimationConfig::instant());
        ui.shimmer_title("Title").unwrap();

        let text = output_text(&ui);
        let frame = format!("\r{}Title", " ".repeat(37));
        assert_eq!(text, format!("{}\n", frame.repeat(10)));
        assert_eq!(surface.history.borrow().len(), 20);
        assert_eq!(*surface.cursor_changes.borrow(), vec![false, true]);
    }
}
