//! Partial-line heuristic.
//!
//! A window scores for a player only while the other player has no piece in
//! it. Two, three or four own pieces score the configured weights; fewer
//! score nothing. The value of a position is the player's total minus the
//! opponent's, which makes it antisymmetric and exactly zero on an empty
//! board.

use crate::core::{Board, Coord, PlayerId, ValuationConfig};

use super::lines::all_windows;

/// Score of one window for `player`.
fn window_score(
    board: &Board,
    line: &[Coord; 4],
    player: PlayerId,
    other: PlayerId,
    config: &ValuationConfig,
) -> f64 {
    let mut owned = 0;
    for &coord in line {
        let cell = board.get(coord);
        if cell.is_owned_by(other) {
            return 0.0;
        }
        if cell.is_owned_by(player) {
            owned += 1;
        }
    }

    let weight = match owned {
        4 => config.win_weight,
        3 => config.three_weight,
        2 => config.two_weight,
        _ => return 0.0,
    };

    if config.require_support && !line.iter().all(|&c| board.is_supported(c)) {
        return 0.0;
    }
    weight
}

/// Sum of window scores for `player` against `other`.
#[must_use]
pub fn value_for_player(
    board: &Board,
    player: PlayerId,
    other: PlayerId,
    config: &ValuationConfig,
) -> f64 {
    all_windows(board)
        .map(|line| window_score(board, &line, player, other, config))
        .sum()
}

/// `player`'s score minus `other`'s.
#[must_use]
pub fn evaluate(board: &Board, player: PlayerId, other: PlayerId, config: &ValuationConfig) -> f64 {
    value_for_player(board, player, other, config) - value_for_player(board, other, player, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);

    fn place(board: &mut Board, cells: &[(usize, usize)], player: PlayerId) {
        for &(row, col) in cells {
            board.place(Coord::at(row, col), player).unwrap();
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::default();
        let config = ValuationConfig::default();
        assert_eq!(evaluate(&board, A, B, &config), 0.0);
        assert_eq!(value_for_player(&board, A, B, &config), 0.0);
    }

    #[test]
    fn test_single_piece_scores_nothing() {
        let mut board = Board::default();
        place(&mut board, &[(5, 3)], A);
        assert_eq!(
            value_for_player(&board, A, B, &ValuationConfig::default()),
            0.0
        );
    }

    #[test]
    fn test_bottom_pair_scores_one_window() {
        let mut board = Board::default();
        place(&mut board, &[(5, 0), (5, 1)], A);

        // Only the horizontal window at columns 0..4 holds both pieces.
        let config = ValuationConfig::default();
        assert!(approx(value_for_player(&board, A, B, &config), 0.1));
        assert!(approx(evaluate(&board, A, B, &config), 0.1));
        assert!(approx(evaluate(&board, B, A, &config), -0.1));
    }

    #[test]
    fn test_opposing_piece_kills_window() {
        let mut board = Board::default();
        place(&mut board, &[(5, 0), (5, 1), (5, 2)], A);
        let config = ValuationConfig::default();
        // Bottom-row windows at columns 0 (three) and 1 (two) score.
        let open = value_for_player(&board, A, B, &config);
        assert!(approx(open, 1.1));

        place(&mut board, &[(5, 3)], B);
        // Both scoring windows now contain B.
        let blocked = value_for_player(&board, A, B, &config);
        assert!(approx(blocked, 0.0));
    }

    #[test]
    fn test_four_scores_win_weight() {
        let mut board = Board::default();
        place(&mut board, &[(5, 0), (5, 1), (5, 2), (5, 3)], A);
        let config = ValuationConfig::default();
        // cols 0..4 four, cols 1..5 three, cols 2..6 two, cols 3..7 one
        assert!(approx(value_for_player(&board, A, B, &config), 11.1));
    }

    #[test]
    fn test_custom_weights() {
        let mut board = Board::default();
        place(&mut board, &[(5, 0), (5, 1)], A);
        let config = ValuationConfig::default().with_weights(100.0, 10.0, 1.0);
        assert!(approx(value_for_player(&board, A, B, &config), 1.0));
    }

    #[test]
    fn test_support_check_ignores_floating_windows() {
        let mut board = Board::default();
        // Bottom-row windows rest on the floor.
        place(&mut board, &[(5, 0), (5, 1)], A);
        let supported = ValuationConfig::default().with_support_check(true);
        assert!(approx(value_for_player(&board, A, B, &supported), 0.1));

        // A vertical pair scores through the window at rows 2..=5, but row 2
        // of that window hangs over an empty row 3.
        let mut board = Board::default();
        place(&mut board, &[(5, 6), (4, 6)], B);
        let plain = ValuationConfig::default();
        assert!(approx(value_for_player(&board, B, A, &plain), 0.1));
        assert!(approx(value_for_player(&board, B, A, &supported), 0.0));
    }
}
