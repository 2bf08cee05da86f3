//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who plays O?
///
/// Defaults to [`Mode::SinglePlayer`] so a fresh session faces the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// A second human plays O on the same device.
    #[serde(rename = "two")]
    #[strum(serialize = "two")]
    TwoPlayer,
    /// The search engine plays O.
    #[default]
    #[serde(rename = "single")]
    #[strum(serialize = "single")]
    SinglePlayer,
}

impl Mode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Two players",
            Mode::SinglePlayer => "Single player",
        }
    }

    /// Name of whoever plays O in this mode.
    pub fn o_player_label(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Player 2",
            Mode::SinglePlayer => "Computer",
        }
    }

    /// Switches to the other mode.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Mode::TwoPlayer => Mode::SinglePlayer,
            Mode::SinglePlayer => Mode::TwoPlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_names() {
        assert_eq!("single".parse::<Mode>().unwrap(), Mode::SinglePlayer);
        assert_eq!("TWO".parse::<Mode>().unwrap(), Mode::TwoPlayer);
        assert!("three".parse::<Mode>().is_err());
        assert_eq!(Mode::TwoPlayer.to_string(), "two");
    }

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Mode::default().toggle(), Mode::TwoPlayer);
        assert_eq!(Mode::TwoPlayer.toggle(), Mode::SinglePlayer);
    }
}
