use crate::{Board, Cell};
use serde::{Deserialize, Serialize};

/// Everything the page needs to draw the current match.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameView {
    pub board: [Cell; Board::CELL_COUNT],
    pub message: String,
    pub current_player: String,
    pub game_over: bool,
}
