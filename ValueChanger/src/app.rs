//! Interactive menu loop

use crate::actions::{apply_max_brightness, apply_player_name};
use crate::config::WINDOW_TITLE;
use crate::console::Surface;
use crate::registry::ValueStore;
use crate::ui::{MenuChoice, Ui};
use crate::utils::error::{ChangerError, Result};
use std::io::{BufRead, Write};

/// Show the title, then loop over the menu until the user exits or the
/// input runs out
pub fn run<S, W, V, R>(ui: &mut Ui<S, W>, store: &V, input: &mut R) -> Result<()>
where
    S: Surface,
    W: Write,
    V: ValueStore,
    R: BufRead,
{
    ui.surface().set_title(WINDOW_TITLE);
    ui.clear()?;
    ui.shimmer_title(WINDOW_TITLE)?;

    loop {
        ui.clear()?;
        ui.box_header("Value + Name Changer")?;
        ui.box_pair(" Brightness target", "ALWAYS MAX")?;
        ui.box_pair(" Name target", store.target().player_name)?;
        ui.box_line("")?;

        let Some(choice) = ui.menu(input)? else {
            tracing::debug!("Input closed at menu");
            break;
        };

        ui.clear()?;
        ui.box_header("Action")?;

        match choice {
            MenuChoice::MaxBrightness => {
                let outcome = apply_max_brightness(ui, store)?;
                tracing::debug!(applied = outcome.is_applied(), "Brightness action finished");
            }
            MenuChoice::PlayerName => {
                let outcome = apply_player_name(ui, store, input)?;
                tracing::debug!(applied = outcome.is_applied(), "Player name action finished");
            }
            MenuChoice::Exit => break,
            MenuChoice::Invalid => {
                ui.error(&format!("\n{}\n", ChangerError::InvalidSelection))?;
            }
        }

        if !ui.pause(input)? {
            break;
        }
    }

    ui.surface().show_cursor(true);
    Ok(())
}
