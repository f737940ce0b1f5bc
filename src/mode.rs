//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans sharing the board.
    #[default]
    #[serde(alias = "pvp")]
    #[strum(serialize = "pvp", serialize = "two_player")]
    TwoPlayer,
    /// A human against the computer.
    #[serde(alias = "ai")]
    #[strum(serialize = "ai", serialize = "vs_ai")]
    VsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::TwoPlayer => "Player vs Player",
            GameMode::VsAi => "Player vs AI",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
