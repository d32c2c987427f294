//! Fixed registry targets and animation timings
//!
//! Registry key and value names are compile-time constants. They are handed
//! to the registry store when it is built instead of being looked up ad hoc,
//! which lets tests substitute their own store.

use std::time::Duration;

/// Longest accepted player name, in characters
pub const MAX_NAME_LEN: usize = 32;

/// Value written to every brightness channel
pub const MAX_BRIGHTNESS: u64 = u64::MAX;

/// Width reported when the console cannot be queried
pub const FALLBACK_WIDTH: usize = 80;

/// Boxes and the title never get narrower than this
pub const MIN_BOX_WIDTH: usize = 70;

pub const WINDOW_TITLE: &str = "Gorilla Tag Value + Name Changer";

/// Environment variable that turns animation delays off
pub const NO_ANIMATION_ENV: &str = "VALUE_CHANGER_NO_ANIMATION";

/// Location of a game's saved settings in `HKEY_CURRENT_USER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryTarget {
    /// Game name used in user-facing hints
    pub game: &'static str,
    /// Subkey path below `HKEY_CURRENT_USER`
    pub key_path: &'static str,
    /// Red, green and blue brightness values (QWORD)
    pub rgb_names: [&'static str; 3],
    /// Player name value (string)
    pub player_name: &'static str,
}

pub const GORILLA_TAG: RegistryTarget = RegistryTarget {
    game: "Gorilla Tag",
    key_path: r"SOFTWARE\Another Axiom\Gorilla Tag",
    rgb_names: [
        "redValue_h2868626173",
        "greenValue_h2874538165",
        "blueValue_h3443272976",
    ],
    player_name: "playerName_h3979151953",
};

/// Step counts and per-step delays for the decorative animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub brightness_steps: u32,
    pub brightness_delay: Duration,
    pub name_steps: u32,
    pub name_delay: Duration,
    pub shimmer_frames: u32,
    pub shimmer_delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            brightness_steps: 22,
            brightness_delay: Duration::from_millis(25),
            name_steps: 18,
            name_delay: Duration::from_millis(30),
            shimmer_frames: 10,
            shimmer_delay: Duration::from_millis(80),
        }
    }
}

impl AnimationConfig {
    /// Same frames, no waiting
    pub fn instant() -> Self {
        Self {
            brightness_delay: Duration::ZERO,
            name_delay: Duration::ZERO,
            shimmer_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Defaults, or [`AnimationConfig::instant`] when [`NO_ANIMATION_ENV`] is set
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(NO_ANIMATION_ENV).ok().as_deref())
    }

    fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(v) if !v.is_empty() && v != "0" => Self::instant(),
            _ => Self::default(),
        }
    }
}
