//! The two user-facing actions
//!
//! Each action reports its own progress and errors on screen and then
//! returns an [`Outcome`] describing what happened. Only console I/O
//! failures come back as `Err`.

use crate::config::{RegistryTarget, MAX_BRIGHTNESS, MAX_NAME_LEN};
use crate::console::Surface;
use crate::registry::{ValueKey, ValueStore};
use crate::ui::{read_line_lossy, Ui};
use crate::utils::error::{ChangerError, Result, StoreError};
use crate::utils::text::clean_name;
use std::io::{BufRead, Write};

/// Result of one action, after it has been shown to the user
#[derive(Debug)]
pub enum Outcome {
    /// Every write went through
    Applied,
    /// The action stopped or finished with these errors
    Failed(Vec<ChangerError>),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn errors(&self) -> &[ChangerError] {
        match self {
            Outcome::Applied => &[],
            Outcome::Failed(errors) => errors,
        }
    }
}

/// Trim and sanitize a raw input line into an acceptable player name
pub fn validate_name(raw: &str) -> Result<String> {
    let name = clean_name(raw);
    let len = name.chars().count();
    if len == 0 {
        return Err(ChangerError::EmptyName);
    }
    if name.contains(char::REPLACEMENT_CHARACTER) {
        return Err(ChangerError::UnreadableName);
    }
    if len > MAX_NAME_LEN {
        return Err(ChangerError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(name)
}

fn open_key<S, W, V>(ui: &mut Ui<S, W>, store: &V) -> Result<std::result::Result<V::Key, Outcome>>
where
    S: Surface,
    W: Write,
    V: ValueStore,
{
    match store.open() {
        Ok(key) => Ok(Ok(key)),
        Err(e) => {
            report_open_failure(ui, store.target(), &e)?;
            Ok(Err(Outcome::Failed(vec![ChangerError::OpenKey(e)])))
        }
    }
}

fn report_open_failure<S: Surface, W: Write>(
    ui: &mut Ui<S, W>,
    target: &RegistryTarget,
    err: &StoreError,
) -> Result<()> {
    ui.error(&format!(
        "\nCould not open registry key.\nError {}: {}\nLaunch {} at least once.\n",
        err.code, err.message, target.game
    ))?;
    Ok(())
}

/// Write `u64::MAX` to all three brightness channels
///
/// Every channel is attempted even if an earlier one failed; success is
/// reported only when all three writes succeeded.
pub fn apply_max_brightness<S, W, V>(ui: &mut Ui<S, W>, store: &V) -> Result<Outcome>
where
    S: Surface,
    W: Write,
    V: ValueStore,
{
    let target = *store.target();
    let key = match open_key(ui, store)? {
        Ok(key) => key,
        Err(outcome) => return Ok(outcome),
    };

    let anim = *ui.anim();
    ui.progress_bar("Applying MAX brightness", anim.brightness_steps, anim.brightness_delay)?;

    let mut failures = Vec::new();
    for name in target.rgb_names {
        match key.write_qword(name, MAX_BRIGHTNESS) {
            Ok(()) => tracing::info!(name, "Brightness channel set"),
            Err(source) => {
                let err = ChangerError::Write { name, source };
                ui.error(&format!("\n{err}\n"))?;
                failures.push(err);
            }
        }
    }

    if !failures.is_empty() {
        return Ok(Outcome::Failed(failures));
    }
    ui.success(&format!(
        "\nSuccess. Brightness set to MAX.\nRestart {}.\n",
        target.game
    ))?;
    Ok(Outcome::Applied)
}

/// Prompt for a player name and write it
///
/// Invalid names are rejected before the registry is touched.
///
/// # Arguments
/// * `ui` - Where the prompt, progress bar and result are shown
/// * `store` - Registry store holding the player name value
/// * `input` - Source of the name; one line is read
///
/// # Returns
/// * `Ok(Outcome::Applied)` - The name was written
/// * `Ok(Outcome::Failed(_))` - Validation, key open or write failed (already shown)
/// * `Err(ChangerError::Io)` - The console could not be read or written
pub fn apply_player_name<S, W, V, R>(ui: &mut Ui<S, W>, store: &V, input: &mut R) -> Result<Outcome>
where
    S: Surface,
    W: Write,
    V: ValueStore,
    R: BufRead,
{
    ui.print("\nEnter new player name: ")?;
    let line = read_line_lossy(input)?.unwrap_or_default();

    let name = match validate_name(&line) {
        Ok(name) => name,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected player name");
            ui.error(&format!("\n{err}\n"))?;
            return Ok(Outcome::Failed(vec![err]));
        }
    };

    let target = *store.target();
    let key = match open_key(ui, store)? {
        Ok(key) => key,
        Err(outcome) => return Ok(outcome),
    };

    let anim = *ui.anim();
    ui.progress_bar("Applying player name", anim.name_steps, anim.name_delay)?;

    if let Err(source) = key.write_string(target.player_name, &name) {
        let err = ChangerError::Write {
            name: target.player_name,
            source,
        };
        ui.error(&format!("\n{err}\n"))?;
        return Ok(Outcome::Failed(vec![err]));
    }

    tracing::info!(name = %name, "Player name set");
    ui.success(&format!("\nSuccess. Name updated.\nRestart {}.\n", target.game))?;
    Ok(Outcome::Applied)
}
