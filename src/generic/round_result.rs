use serde::{Deserialize, Serialize};

/// What a single call to [`crate::Match::play_round`] produced. The status
/// line for the page comes from [`crate::Match::status`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    /// The move was not accepted and nothing changed.
    Invalid,
    Winner(String),
    Tie,
    #[serde(rename = "next_player")]
    NextTurn(String),
}
