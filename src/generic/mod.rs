mod boards;
mod cell;
mod game_view;
mod match_controller;
mod player;
mod round_result;
mod symbol;

pub use boards::{has_line, Board};
pub use cell::Cell;
pub use game_view::GameView;
pub use match_controller::{InvalidMove, Match, MatchArgs, MatchArgsError, Status};
pub use player::Player;
pub use round_result::RoundResult;
pub use symbol::Symbol;

/// (row, column) on the board
pub type Coordinates = (usize, usize);
