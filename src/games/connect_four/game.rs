//! The Connect Four engine.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Board, Cell, Coord, EngineConfig, MoveHistory, MoveRecord, PlayerId};
use crate::error::EngineError;
use crate::rules::{GameResult, RulesEngine};

use super::lines::find_winner;
use super::valuation::{evaluate, value_for_player};

/// Column indices, inline up to the standard width plus one.
pub type Columns = SmallVec<[usize; 8]>;

/// Board, seats, turn and move history for one game.
///
/// All mutation goes through `make_move`, `undo_last_move` and `reset`, so the
/// history always holds exactly one record per occupied cell.
#[derive(Clone, Debug)]
pub struct ConnectFour {
    config: EngineConfig,
    first_player: PlayerId,
    second_player: PlayerId,
    current_player: PlayerId,
    board: Board,
    history: MoveHistory,
}

impl ConnectFour {
    /// Standard 6x7 game with the default rules.
    pub fn new(first_player: PlayerId, second_player: PlayerId) -> Result<Self, EngineError> {
        Self::with_config(first_player, second_player, EngineConfig::default())
    }

    pub fn with_config(
        first_player: PlayerId,
        second_player: PlayerId,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        if first_player == second_player {
            return Err(EngineError::SamePlayers);
        }
        config.validate()?;

        let board = Board::new(config.rows, config.columns);
        let history = MoveHistory::with_capacity(board.len());
        Ok(Self {
            config,
            first_player,
            second_player,
            current_player: first_player,
            board,
            history,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    #[must_use]
    pub fn second_player(&self) -> PlayerId {
        self.second_player
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Moves played so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// True if `player` is one of the two seated identities.
    #[must_use]
    pub fn is_seated(&self, player: PlayerId) -> bool {
        player == self.first_player || player == self.second_player
    }

    /// The other seated player. Anyone who is not the first player maps to
    /// the first player.
    #[must_use]
    pub fn opponent_of(&self, player: PlayerId) -> PlayerId {
        if player == self.first_player {
            self.second_player
        } else {
            self.first_player
        }
    }

    // === Rules ===

    /// Columns that can still take a piece, ascending.
    ///
    /// Legality does not depend on who moves; `_player` is accepted so
    /// callers can ask per player.
    #[must_use]
    pub fn valid_moves(&self, _player: PlayerId) -> Columns {
        (0..self.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    #[must_use]
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < self.columns() && !self.board.is_column_full(column)
    }

    /// Drop a piece for `player` into `column` and pass the turn to the other
    /// player.
    ///
    /// Returns the cell the piece landed in. On error nothing changes.
    pub fn make_move(&mut self, player: PlayerId, column: usize) -> Result<Coord, EngineError> {
        self.apply(player, column, self.config.enforce_turn_order)
    }

    /// Like `make_move` but never checks whose turn it is, so lookahead can
    /// play either side. Undo restores the turn as usual.
    pub fn simulate_move(&mut self, player: PlayerId, column: usize) -> Result<Coord, EngineError> {
        self.apply(player, column, false)
    }

    fn apply(
        &mut self,
        player: PlayerId,
        column: usize,
        check_turn: bool,
    ) -> Result<Coord, EngineError> {
        if !self.is_seated(player) {
            return Err(EngineError::UnknownPlayer { player });
        }
        if !self.is_valid_move(column) {
            return Err(EngineError::IllegalMove { column });
        }
        if check_turn && player != self.current_player {
            return Err(EngineError::NotYourTurn { player });
        }

        let row = self
            .board
            .lowest_empty_row(column)
            .ok_or(EngineError::IllegalMove { column })?;
        let coord = Coord::at(row, column);
        self.board.place(coord, player)?;
        self.history.push(MoveRecord::new(player, coord));
        self.current_player = self.opponent_of(player);

        trace!(%player, column, row, moves = self.history.len(), "move applied");
        Ok(coord)
    }

    /// Take back the most recent move.
    ///
    /// The player to move becomes whoever was due after the record now on
    /// top of the history, or the first player once the history is empty.
    pub fn undo_last_move(&mut self) -> Result<MoveRecord, EngineError> {
        let record = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        self.board.clear(record.coord);
        self.current_player = match self.history.last() {
            Some(top) => self.opponent_of(top.player),
            None => self.first_player,
        };

        trace!(player = %record.player, column = record.column(), "move undone");
        Ok(record)
    }

    /// Blank board, first player to move, empty history.
    pub fn reset(&mut self) {
        self.board.clear_all();
        self.history.clear();
        self.current_player = self.first_player;
    }

    // === Outcome ===

    /// Owner of the first complete line, searched horizontal, vertical,
    /// falling diagonal, rising diagonal.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        find_winner(&self.board)
    }

    /// Board full. Independent of whether someone has won.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.board.is_full()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_draw() || self.winner().is_some()
    }

    #[must_use]
    pub fn has_won(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    /// False while nobody has won.
    #[must_use]
    pub fn has_lost(&self, player: PlayerId) -> bool {
        matches!(self.winner(), Some(winner) if winner != player)
    }

    /// A win outranks a full board.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.winner() {
            Some(player) => Some(GameResult::Winner(player)),
            None if self.is_draw() => Some(GameResult::Draw),
            None => None,
        }
    }

    // === Evaluation ===

    /// Heuristic value for `player`: own partial lines minus the opponent's.
    #[must_use]
    pub fn value(&self, player: PlayerId) -> f64 {
        evaluate(
            &self.board,
            player,
            self.opponent_of(player),
            &self.config.valuation,
        )
    }

    /// One side of `value`: `player`'s windows not touched by `other`.
    #[must_use]
    pub fn value_for_player(&self, player: PlayerId, other: PlayerId) -> f64 {
        value_for_player(&self.board, player, other, &self.config.valuation)
    }

    // === Encoding ===

    /// Row-major cells: `0` empty, `1` owned by `player`, `-1` otherwise.
    #[must_use]
    pub fn to_input_layer(&self, player: PlayerId) -> Vec<f32> {
        self.board
            .cells()
            .map(|cell| match cell {
                Cell::Empty => 0.0,
                Cell::Owned(owner) if owner == player => 1.0,
                Cell::Owned(_) => -1.0,
            })
            .collect()
    }

    #[must_use]
    pub fn input_layer_size(&self) -> usize {
        self.board.len()
    }

    /// 1-based column label for display.
    #[must_use]
    pub fn move_to_string(column: usize) -> String {
        format!("{}", column + 1)
    }
}

impl RulesEngine for ConnectFour {
    type Move = usize;

    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn opponent_of(&self, player: PlayerId) -> PlayerId {
        ConnectFour::opponent_of(self, player)
    }

    fn valid_moves(&self, player: PlayerId) -> Columns {
        ConnectFour::valid_moves(self, player)
    }

    fn make_move(&mut self, player: PlayerId, mv: usize) -> Result<(), EngineError> {
        ConnectFour::make_move(self, player, mv).map(|_| ())
    }

    fn simulate_move(&mut self, player: PlayerId, mv: usize) -> Result<(), EngineError> {
        ConnectFour::simulate_move(self, player, mv).map(|_| ())
    }

    fn undo_last_move(&mut self) -> Result<(), EngineError> {
        ConnectFour::undo_last_move(self).map(|_| ())
    }

    fn reset(&mut self) {
        ConnectFour::reset(self);
    }

    fn result(&self) -> Option<GameResult> {
        ConnectFour::result(self)
    }

    fn value(&self, player: PlayerId) -> f64 {
        ConnectFour::value(self, player)
    }

    fn to_input_layer(&self, player: PlayerId) -> Vec<f32> {
        ConnectFour::to_input_layer(self, player)
    }

    fn winner(&self) -> Option<PlayerId> {
        ConnectFour::winner(self)
    }

    fn is_game_over(&self) -> bool {
        ConnectFour::is_game_over(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PlayerId = PlayerId::new(0);
    const YELLOW: PlayerId = PlayerId::new(1);

    fn game() -> ConnectFour {
        ConnectFour::new(RED, YELLOW).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = game();
        assert_eq!(game.current_player(), RED);
        assert_eq!(game.first_player(), RED);
        assert_eq!(game.second_player(), YELLOW);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.valid_moves(RED).as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(game.winner(), None);
        assert!(!game.is_draw());
        assert!(!game.is_game_over());
        assert_eq!(game.value(RED), 0.0);
    }

    #[test]
    fn test_same_players_rejected() {
        assert_eq!(
            ConnectFour::new(RED, RED).unwrap_err(),
            EngineError::SamePlayers
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig::default().with_dimensions(2, 7);
        assert!(matches!(
            ConnectFour::with_config(RED, YELLOW, config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_make_move_gravity_and_turn() {
        let mut game = game();

        let landed = game.make_move(RED, 3).unwrap();
        assert_eq!(landed, Coord::at(5, 3));
        assert_eq!(game.current_player(), YELLOW);

        let landed = game.make_move(YELLOW, 3).unwrap();
        assert_eq!(landed, Coord::at(4, 3));
        assert_eq!(game.board().at(4, 3), Cell::Owned(YELLOW));
        assert_eq!(game.current_player(), RED);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_permissive_turn_order_by_default() {
        let mut game = game();
        game.make_move(RED, 0).unwrap();
        // Red moves again: allowed, turn passes to Red's opponent.
        game.make_move(RED, 1).unwrap();
        assert_eq!(game.current_player(), YELLOW);
    }

    #[test]
    fn test_enforced_turn_order() {
        let config = EngineConfig::default().with_turn_check(true);
        let mut game = ConnectFour::with_config(RED, YELLOW, config).unwrap();

        assert_eq!(
            game.make_move(YELLOW, 0).unwrap_err(),
            EngineError::NotYourTurn { player: YELLOW }
        );
        game.make_move(RED, 0).unwrap();
        assert!(game.make_move(RED, 0).is_err());
        game.make_move(YELLOW, 0).unwrap();
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut game = game();
        let stranger = PlayerId::new(9);
        assert_eq!(
            game.make_move(stranger, 0).unwrap_err(),
            EngineError::UnknownPlayer { player: stranger }
        );
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_out_of_range_column_is_illegal() {
        let mut game = game();
        assert_eq!(
            game.make_move(RED, 7).unwrap_err(),
            EngineError::IllegalMove { column: 7 }
        );
        assert!(!game.is_valid_move(7));
    }

    #[test]
    fn test_full_column_rejected_and_state_unchanged() {
        let mut game = game();
        for i in 0..6 {
            let player = if i % 2 == 0 { RED } else { YELLOW };
            game.make_move(player, 0).unwrap();
        }
        let before = game.board().clone();

        assert_eq!(
            game.make_move(RED, 0).unwrap_err(),
            EngineError::IllegalMove { column: 0 }
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.move_count(), 6);
        assert_eq!(game.current_player(), RED);
        assert!(!game.valid_moves(RED).contains(&0));
    }

    #[test]
    fn test_undo_restores_cell_and_turn() {
        let mut game = game();
        game.make_move(RED, 2).unwrap();
        game.make_move(YELLOW, 4).unwrap();

        let record = game.undo_last_move().unwrap();
        assert_eq!(record, MoveRecord::new(YELLOW, Coord::at(5, 4)));
        assert!(game.board().at(5, 4).is_empty());
        assert_eq!(game.current_player(), YELLOW);

        game.undo_last_move().unwrap();
        assert!(game.board().is_empty());
        assert_eq!(game.current_player(), RED);

        assert_eq!(game.undo_last_move().unwrap_err(), EngineError::EmptyHistory);
    }

    #[test]
    fn test_undo_after_out_of_turn_move() {
        let mut game = game();
        game.make_move(RED, 0).unwrap();
        game.make_move(RED, 1).unwrap();
        game.make_move(YELLOW, 2).unwrap();

        game.undo_last_move().unwrap();
        // Top record is Red's second move, so Yellow is due.
        assert_eq!(game.current_player(), YELLOW);
    }

    #[test]
    fn test_undo_hands_turn_to_side_due_after_top_record() {
        let mut game = game();
        game.make_move(RED, 3).unwrap();
        game.make_move(YELLOW, 3).unwrap();

        game.undo_last_move().unwrap();
        // Red's move is on top; the player to move is Yellow, not Red.
        assert_eq!(game.history().last().map(|r| r.player), Some(RED));
        assert_eq!(game.current_player(), YELLOW);
        assert_eq!(game.current_player(), game.opponent_of(RED));
    }

    #[test]
    fn test_simulate_move_ignores_turn_check() {
        let config = EngineConfig::default().with_turn_check(true);
        let mut game = ConnectFour::with_config(RED, YELLOW, config).unwrap();

        assert_eq!(game.simulate_move(YELLOW, 2).unwrap(), Coord::at(5, 2));
        game.undo_last_move().unwrap();
        assert_eq!(game.current_player(), RED);
        assert!(game.board().is_empty());

        // Seat and legality checks still apply.
        assert_eq!(
            game.simulate_move(PlayerId::new(7), 2).unwrap_err(),
            EngineError::UnknownPlayer { player: PlayerId::new(7) }
        );
        assert_eq!(
            game.simulate_move(YELLOW, 9).unwrap_err(),
            EngineError::IllegalMove { column: 9 }
        );
    }

    #[test]
    fn test_reset() {
        let mut game = game();
        game.make_move(RED, 0).unwrap();
        game.make_move(YELLOW, 1).unwrap();
        game.make_move(RED, 2).unwrap();

        game.reset();
        assert!(game.board().is_empty());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.current_player(), RED);
        assert_eq!(game.value(YELLOW), 0.0);
    }

    #[test]
    fn test_horizontal_win_literal_case() {
        let mut game = game();
        for col in 0..4 {
            game.make_move(RED, col).unwrap();
        }
        assert_eq!(game.winner(), Some(RED));
        assert!(game.is_game_over());
        assert!(game.has_won(RED));
        assert!(game.has_lost(YELLOW));
        assert!(!game.has_lost(RED));
        assert_eq!(game.result(), Some(GameResult::Winner(RED)));
    }

    #[test]
    fn test_has_lost_false_without_winner() {
        let mut game = game();
        game.make_move(RED, 3).unwrap();
        assert!(!game.has_lost(RED));
        assert!(!game.has_lost(YELLOW));
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_value_antisymmetric() {
        let mut game = game();
        for (player, col) in [(RED, 3), (YELLOW, 3), (RED, 4), (YELLOW, 2), (RED, 5)] {
            game.make_move(player, col).unwrap();
        }
        let red = game.value(RED);
        let yellow = game.value(YELLOW);
        assert!(red > 0.0);
        assert!((red + yellow).abs() < 1e-12);
        assert!(
            (red - (game.value_for_player(RED, YELLOW) - game.value_for_player(YELLOW, RED))).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_input_layer() {
        let mut game = game();
        game.make_move(RED, 0).unwrap();
        game.make_move(YELLOW, 6).unwrap();

        let red_view = game.to_input_layer(RED);
        assert_eq!(red_view.len(), 42);
        assert_eq!(game.input_layer_size(), 42);
        assert_eq!(red_view[5 * 7], 1.0);
        assert_eq!(red_view[5 * 7 + 6], -1.0);
        assert_eq!(red_view.iter().filter(|&&v| v == 0.0).count(), 40);

        let yellow_view = game.to_input_layer(YELLOW);
        assert_eq!(yellow_view[5 * 7], -1.0);
        assert_eq!(yellow_view[5 * 7 + 6], 1.0);
    }

    #[test]
    fn test_move_to_string() {
        assert_eq!(ConnectFour::move_to_string(0), "1");
        assert_eq!(ConnectFour::move_to_string(6), "7");
    }

    #[test]
    fn test_generic_probe_leaves_engine_untouched() {
        fn play_all<E: RulesEngine<Move = usize>>(engine: &mut E) -> usize {
            let player = engine.current_player();
            let moves = engine.valid_moves(player);
            for &mv in &moves {
                engine.make_move(player, mv).unwrap();
                engine.undo_last_move().unwrap();
            }
            moves.len()
        }

        let mut game = game();
        assert_eq!(play_all(&mut game), 7);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<ConnectFour>();
    }
}
