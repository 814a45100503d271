//! Evaluation tests: sentinel values, material ratios, king weighting,
//! and the positional-potential bonus.

use super::make_board;
use crate::board::{score, Board, Color, Piece, ScoringMode, Square, WIN_SCORE};

#[test]
fn lone_king_vs_nothing_is_won_and_lost() {
    let board = Board::empty().with_piece(
        Square(4, 3),
        Some((Color::White, Piece::King)),
    );
    assert_eq!(score(&board, Color::White, ScoringMode::Material), WIN_SCORE);
    assert_eq!(score(&board, Color::Black, ScoringMode::Material), 0.0);
}

#[test]
fn balanced_start_position_scores_one() {
    let board = Board::new();
    assert_eq!(score(&board, Color::White, ScoringMode::Material), 1.0);
    assert_eq!(score(&board, Color::Black, ScoringMode::Material), 1.0);
}

#[test]
fn material_ratio_counts_men() {
    let board = make_board(
        "........
         ........
         ........
         ..w.....
         ........
         ....w...
         ........
         .b......",
    );
    assert_eq!(score(&board, Color::White, ScoringMode::Material), 2.0);
    assert_eq!(score(&board, Color::Black, ScoringMode::Material), 0.5);
}

#[test]
fn king_is_worth_four_men_in_material_mode() {
    let board = make_board(
        "........
         ........
         ........
         ..W.....
         ........
         ........
         ........
         .b......",
    );
    assert_eq!(score(&board, Color::White, ScoringMode::Material), 4.0);
}

#[test]
fn king_is_worth_five_men_in_potential_mode() {
    // A lone king carries no advancement bonus, and a man on its own back
    // row has advancement 0, so the ratio is exactly the coefficient.
    let board = make_board(
        "...b....
         ........
         ........
         ..W.....
         ........
         ........
         ........
         ........",
    );
    assert_eq!(
        score(&board, Color::White, ScoringMode::MaterialAndPotential),
        5.0
    );
}

#[test]
fn potential_mode_rewards_advancement() {
    // Both sides have one man; White's is further along its path.
    let advanced = make_board(
        "........
         ........
         ..w.....
         ........
         ........
         ...b....
         ........
         ........",
    );
    let material = score(&advanced, Color::White, ScoringMode::Material);
    let potential = score(&advanced, Color::White, ScoringMode::MaterialAndPotential);
    assert_eq!(material, 1.0);
    // White man on row 2: advancement 5. Black man on row 5: advancement 5.
    // Equal advancement keeps the ratio at 1.0.
    assert_eq!(potential, 1.0);

    let ahead = advanced
        .with_piece(Square(2, 2), None)
        .with_piece(
            Square(1, 2),
            Some((Color::White, Piece::Man)),
        );
    let score_ahead = score(&ahead, Color::White, ScoringMode::MaterialAndPotential);
    assert!(
        score_ahead > 1.0,
        "more advanced man should score higher, got {score_ahead}"
    );
    let expected = (1.0 + 0.05 * 6.0) / (1.0 + 0.05 * 5.0);
    assert!((score_ahead - expected).abs() < 1e-12);
}

#[test]
fn win_score_exceeds_any_material_ratio() {
    // Worst case finite ratio: twelve kings against a lone back-row man.
    let max_ratio = 12.0 * 5.0 / 1.0;
    assert!(WIN_SCORE > max_ratio * 1e3);
}
