use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{Board, Cell, GameView, Player, RoundResult, Symbol};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidMove {
    FieldOccupied,
    GameEnded,
    OutOfBounds,
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::FieldOccupied => write!(f, "the cell is already occupied"),
            InvalidMove::GameEnded => write!(f, "the game has already ended"),
            InvalidMove::OutOfBounds => write!(f, "the cell is not on the board"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchArgsError {
    SameSymbol,
    EmptyName,
}

impl Display for MatchArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchArgsError::SameSymbol => write!(f, "both players use the same symbol"),
            MatchArgsError::EmptyName => write!(f, "player names must not be empty"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MatchArgs {
    pub player_one_name: String,
    pub player_two_name: String,
}

impl Default for MatchArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchArgs {
    const DEFAULT_PLAYER_ONE_NAME: &'static str = "Player 1";
    const DEFAULT_PLAYER_TWO_NAME: &'static str = "Player 2";

    pub fn new() -> Self {
        Self {
            player_one_name: MatchArgs::DEFAULT_PLAYER_ONE_NAME.to_string(),
            player_two_name: MatchArgs::DEFAULT_PLAYER_TWO_NAME.to_string(),
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        let player_one_name = std::env::var("PLAYER_ONE_NAME")
            .unwrap_or(MatchArgs::DEFAULT_PLAYER_ONE_NAME.to_string());
        let player_two_name = std::env::var("PLAYER_TWO_NAME")
            .unwrap_or(MatchArgs::DEFAULT_PLAYER_TWO_NAME.to_string());

        Self {
            player_one_name,
            player_two_name,
        }
    }
}

/// Where a match currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    InProgress { current_player: String },
    Won { winner: String },
    Tied,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress { current_player } => write!(f, "{}'s turn", current_player),
            Status::Won { winner } => write!(f, "{} wins!", winner),
            Status::Tied => write!(f, "It's a tie!"),
        }
    }
}

/// Two players taking turns on one board.
///
/// Player one always opens. Once a player completes a line or the board is
/// full, the match is over and every further move is rejected until
/// [`Match::reset`] is called.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    players: [Player; 2],
    current: usize,
    game_over: bool,
}

impl Default for Match {
    fn default() -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(MatchArgs::DEFAULT_PLAYER_ONE_NAME, Symbol::X),
                Player::new(MatchArgs::DEFAULT_PLAYER_TWO_NAME, Symbol::O),
            ],
            current: 0,
            game_over: false,
        }
    }
}

impl Match {
    pub fn new(player_one: Player, player_two: Player) -> Result<Self, MatchArgsError> {
        if player_one.symbol() == player_two.symbol() {
            return Err(MatchArgsError::SameSymbol);
        }
        if player_one.name().trim().is_empty() || player_two.name().trim().is_empty() {
            return Err(MatchArgsError::EmptyName);
        }
        Ok(Self {
            board: Board::new(),
            players: [player_one, player_two],
            current: 0,
            game_over: false,
        })
    }

    /// Player one plays X, player two plays O.
    pub fn from_args(args: MatchArgs) -> Result<Self, MatchArgsError> {
        Self::new(
            Player::new(args.player_one_name, Symbol::X),
            Player::new(args.player_two_name, Symbol::O),
        )
    }

    /// Places the current player's symbol at `index`.
    ///
    /// Rejected moves come back as [`RoundResult::Invalid`] and leave the
    /// match untouched. Use [`Match::try_play_round`] to learn why a move
    /// was rejected.
    pub fn play_round(&mut self, index: usize) -> RoundResult {
        match self.try_play_round(index) {
            Ok(result) => result,
            Err(reason) => {
                debug!("ignoring move at index {}: {}", index, reason);
                RoundResult::Invalid
            }
        }
    }

    /// Same as [`Match::play_round`], but rejected moves are reported as an
    /// error. The `Ok` value is never [`RoundResult::Invalid`].
    pub fn try_play_round(&mut self, index: usize) -> Result<RoundResult, InvalidMove> {
        if self.game_over {
            return Err(InvalidMove::GameEnded);
        }
        if Board::get_coordinates(index).is_none() {
            return Err(InvalidMove::OutOfBounds);
        }

        let symbol = self.players[self.current].symbol();
        if !self.board.set_symbol(index, symbol) {
            return Err(InvalidMove::FieldOccupied);
        }

        if self.board.has_line(symbol) {
            self.game_over = true;
            let winner = self.get_current_player().to_string();
            debug!("{} ({}) won by playing index {}", winner, symbol, index);
            return Ok(RoundResult::Winner(winner));
        }

        if self.board.is_full() {
            self.game_over = true;
            debug!("board is full after index {}: tie", index);
            return Ok(RoundResult::Tie);
        }

        self.current = 1 - self.current;
        Ok(RoundResult::NextTurn(self.get_current_player().to_string()))
    }

    /// Name of the player whose turn it is. After a win this stays the winner.
    pub fn get_current_player(&self) -> &str {
        self.players[self.current].name()
    }

    pub fn get_board(&self) -> [Cell; Board::CELL_COUNT] {
        self.board.get_board()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current = 0;
        self.game_over = false;
        debug!("match reset, {} to move", self.get_current_player());
    }

    pub fn status(&self) -> Status {
        let current = &self.players[self.current];
        if !self.game_over {
            Status::InProgress {
                current_player: current.name().to_string(),
            }
        } else if self.board.has_line(current.symbol()) {
            Status::Won {
                winner: current.name().to_string(),
            }
        } else {
            Status::Tied
        }
    }

    pub fn status_message(&self) -> String {
        self.status().to_string()
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: self.get_board(),
            message: self.status_message(),
            current_player: self.get_current_player().to_string(),
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn play_all(game: &mut Match, indices: &[usize]) -> Vec<RoundResult> {
        indices.iter().map(|index| game.play_round(*index)).collect()
    }

    fn x() -> Cell {
        Cell::Occupied { symbol: Symbol::X }
    }

    fn o() -> Cell {
        Cell::Occupied { symbol: Symbol::O }
    }

    #[test]
    fn initial_state() {
        let game = Match::default();
        assert_eq!(game.get_current_player(), "Player 1");
        assert_eq!(game.get_board(), [Cell::Empty; 9]);
        assert!(!game.is_game_over());
        assert_eq!(game.status_message(), "Player 1's turn");
    }

    #[test]
    fn top_row_wins() {
        let mut game = Match::default();
        let results = play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(
            results,
            vec![
                RoundResult::NextTurn("Player 2".to_string()),
                RoundResult::NextTurn("Player 1".to_string()),
                RoundResult::NextTurn("Player 2".to_string()),
                RoundResult::NextTurn("Player 1".to_string()),
                RoundResult::Winner("Player 1".to_string()),
            ]
        );
        assert!(game.is_game_over());
        assert_eq!(game.get_current_player(), "Player 1");
        assert_eq!(
            game.status(),
            Status::Won {
                winner: "Player 1".to_string()
            }
        );
        assert_eq!(game.status_message(), "Player 1 wins!");
    }

    #[test]
    fn full_board_is_a_tie() {
        // X O X
        // X O O
        // O X X
        let mut game = Match::default();
        let results = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(
            results[..8].iter().all(|r| matches!(r, RoundResult::NextTurn(_))),
            "Test failed: match ended early: {:?}",
            results
        );
        assert_eq!(results[8], RoundResult::Tie);
        assert_eq!(game.get_board(), [x(), o(), x(), x(), o(), o(), o(), x(), x()]);
        assert_eq!(game.status(), Status::Tied);
        assert_eq!(game.status_message(), "It's a tie!");
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut game = Match::default();
        assert_eq!(
            game.play_round(5),
            RoundResult::NextTurn("Player 2".to_string())
        );
        assert_eq!(game.play_round(5), RoundResult::Invalid);
        assert_eq!(game.get_board()[5], x());
        // no turn switch on a rejected move
        assert_eq!(game.get_current_player(), "Player 2");
        assert_eq!(game.try_play_round(5), Err(InvalidMove::FieldOccupied));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut game = Match::default();
        assert_eq!(game.play_round(9), RoundResult::Invalid);
        assert_eq!(game.try_play_round(42), Err(InvalidMove::OutOfBounds));
        assert_eq!(game.get_board(), [Cell::Empty; 9]);
        assert_eq!(game.get_current_player(), "Player 1");
    }

    #[test]
    fn finished_match_rejects_moves() {
        let finished_games: Vec<Vec<usize>> =
            vec![vec![0, 3, 1, 4, 2], vec![0, 1, 2, 4, 3, 5, 7, 6, 8]];

        for (test_index, moves) in finished_games.iter().enumerate() {
            let mut game = Match::default();
            let last = play_all(&mut game, moves).pop().unwrap();
            assert!(
                matches!(last, RoundResult::Winner(_) | RoundResult::Tie),
                "Test {} did not finish",
                test_index
            );

            let board = game.get_board();
            for index in 0..12 {
                assert_eq!(
                    game.play_round(index),
                    RoundResult::Invalid,
                    "Test {} failed: index {} accepted after the end",
                    test_index,
                    index
                );
                assert_eq!(game.get_board(), board);
            }
            assert_eq!(game.try_play_round(8), Err(InvalidMove::GameEnded));
        }
    }

    #[test]
    fn turns_alternate() {
        let mut game = Match::default();
        let expected = ["Player 1", "Player 2"];
        for (move_index, index) in [4, 0, 8, 2, 1, 7].iter().enumerate() {
            assert_eq!(game.get_current_player(), expected[move_index % 2]);
            let result = game.play_round(*index);
            assert_eq!(
                result,
                RoundResult::NextTurn(expected[(move_index + 1) % 2].to_string()),
                "move {} failed",
                move_index
            );
        }
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut game = Match::default();
        play_all(&mut game, &[0, 3, 1, 4, 2]);

        game.reset();
        assert_eq!(game.get_current_player(), "Player 1");
        assert_eq!(game.get_board(), [Cell::Empty; 9]);
        assert!(!game.is_game_over());
        assert_eq!(
            game.play_round(0),
            RoundResult::NextTurn("Player 2".to_string())
        );

        // reset in the middle of a match
        game.play_round(4);
        game.reset();
        assert_eq!(game.view(), Match::default().view());
    }

    #[test]
    fn player_two_can_win() {
        let mut game = Match::default();
        let results = play_all(&mut game, &[0, 2, 1, 4, 3, 6]);
        assert_eq!(
            results.last(),
            Some(&RoundResult::Winner("Player 2".to_string()))
        );
        assert_eq!(game.status_message(), "Player 2 wins!");
    }

    #[test]
    fn win_on_last_cell_is_not_a_tie() {
        // X O X
        // O X O
        // O X X  <- X completes the diagonal with the ninth move
        let mut game = Match::default();
        let results = play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(
            results.last(),
            Some(&RoundResult::Winner("Player 1".to_string()))
        );
    }

    #[test]
    fn custom_players() {
        let args = MatchArgs {
            player_one_name: "Alice".to_string(),
            player_two_name: "Bob".to_string(),
        };
        let mut game = Match::from_args(args).unwrap();
        assert_eq!(game.status_message(), "Alice's turn");
        assert_eq!(game.play_round(0), RoundResult::NextTurn("Bob".to_string()));
        assert_eq!(game.get_board()[0], x());
        game.play_round(4);
        assert_eq!(game.get_board()[4], o());
    }

    #[test]
    fn invalid_players() {
        assert_eq!(
            Match::new(Player::new("a", Symbol::X), Player::new("b", Symbol::X)).unwrap_err(),
            MatchArgsError::SameSymbol
        );
        assert_eq!(
            Match::new(Player::new(" ", Symbol::X), Player::new("b", Symbol::O)).unwrap_err(),
            MatchArgsError::EmptyName
        );
    }

    #[test]
    fn view() {
        let mut game = Match::default();
        game.play_round(4);
        let view = game.view();
        assert_eq!(view.board[4], x());
        assert_eq!(view.message, "Player 2's turn");
        assert_eq!(view.current_player, "Player 2");
        assert!(!view.game_over);
    }
}
