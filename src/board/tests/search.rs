//! Search tests: forced chains, depth bookkeeping, pruning equivalence,
//! and terminal positions.

use super::make_board;
use crate::board::{
    Board, Color, ConfigError, Engine, EngineConfig, Move, ScoringMode, SeedPolicy, Square,
};

fn engine(max_depth: u32, pruning: bool) -> Engine {
    Engine::new(EngineConfig {
        max_depth,
        scoring: ScoringMode::Material,
        pruning,
        seed: SeedPolicy::Fixed(0),
    })
    .expect("valid config")
}

#[test]
fn rejects_zero_depth_at_construction() {
    let config = EngineConfig {
        max_depth: 0,
        ..EngineConfig::default()
    };
    assert_eq!(Engine::new(config).err(), Some(ConfigError::ZeroDepth));
}

#[test]
fn rejects_oversized_depth_at_construction() {
    let config = EngineConfig {
        max_depth: 100,
        ..EngineConfig::default()
    };
    assert!(matches!(
        Engine::new(config),
        Err(ConfigError::DepthTooLarge { depth: 100, .. })
    ));
}

#[test]
fn empty_board_yields_empty_sequence() {
    let mut engine = engine(3, true);
    let board = Board::empty();
    assert!(engine.find_best_sequence(&board, Color::White).is_empty());
    assert!(engine.find_best_sequence(&board, Color::Black).is_empty());
}

#[test]
fn stuck_side_yields_empty_sequence_and_empty_move_list() {
    // Black's only man is wedged: forward steps blocked or off-board, the
    // one jump landing occupied.
    let board = make_board(
        "........
         ........
         ........
         ........
         ........
         b.......
         .w......
         ..w.....",
    );
    let mut engine = engine(2, true);
    let (moves, forced) = engine.moves_for_side(&board, Color::Black);
    assert!(moves.is_empty());
    assert!(!forced);
    assert!(engine.find_best_sequence(&board, Color::Black).is_empty());
    // White, by contrast, still has a game.
    assert!(!engine.find_best_sequence(&board, Color::White).is_empty());
}

#[test]
fn forced_chain_of_two_is_returned_whole_at_depth_one() {
    // The only root move is a capture whose landing square has exactly one
    // further capture: depth 1 must still return the whole 2-move chain.
    let board = make_board(
        "........
         ........
         .b......
         ........
         ...b....
         ....w...
         ........
         ........",
    );
    let expected = vec![
        Move::capture(Square(5, 4), Square(3, 2), Square(4, 3)),
        Move::capture(Square(3, 2), Square(1, 0), Square(2, 1)),
    ];
    for pruning in [false, true] {
        let mut engine = engine(1, pruning);
        let sequence = engine.find_best_sequence(&board, Color::White);
        assert_eq!(sequence, expected, "pruning={pruning}");
        assert_eq!(sequence[0].captured, Some(Square(4, 3)));
        assert_eq!(sequence[1].captured, Some(Square(2, 1)));
    }
}

#[test]
fn capture_chain_consumes_one_ply_of_depth() {
    // Even at depth 1 the engine sees the whole chain and the resulting
    // wipe-out of Black.
    let board = make_board(
        "........
         ........
         .b......
         ........
         ...b....
         ....w...
         ........
         ........",
    );
    let mut engine = engine(1, true);
    let sequence = engine.find_best_sequence(&board, Color::White);
    let mut replay = board;
    for mv in &sequence {
        replay = replay.apply_move(*mv).expect("sequence moves are legal");
    }
    assert!(replay.is_wiped_out(Color::Black));
}

#[test]
fn avoids_hanging_a_man() {
    // White's man on e3 can step to d4 (where the black man recaptures and
    // White is wiped out) or to f4 (safe). Depth 2 must pick the safe step.
    let board = make_board(
        "........
         ........
         ........
         ..b.....
         ........
         ....w...
         ........
         ........",
    );
    let mut engine = engine(2, true);
    let sequence = engine.find_best_sequence(&board, Color::White);
    assert_eq!(sequence, vec![Move::quiet(Square(5, 4), Square(4, 5))]);
}

#[test]
fn takes_a_free_capture() {
    let board = make_board(
        "........
         ........
         ........
         ........
         ...b....
         ....w...
         ........
         ........",
    );
    let mut engine = engine(3, true);
    let sequence = engine.find_best_sequence(&board, Color::White);
    assert_eq!(
        sequence,
        vec![Move::capture(Square(5, 4), Square(3, 2), Square(4, 3))]
    );
}

#[test]
fn pruning_and_exhaustive_search_agree() {
    // Same fixed seed so both engines shuffle the root list identically;
    // the pruned and exhaustive searches must then choose the same
    // sequence from several midgame positions.
    let positions = [
        Board::new(),
        make_board(
            ".b.b.b..
             b.b.....
             ...b....
             ....w...
             .....b..
             w.w.....
             .w...w..
             ......W.",
        ),
        make_board(
            "........
             ..b.b...
             ........
             ..w.....
             .....B..
             ........
             .w...w..
             ........",
        ),
    ];
    for (i, board) in positions.iter().enumerate() {
        for color in Color::BOTH {
            for depth in 1..=3 {
                let mut pruned = engine(depth, true);
                let mut exhaustive = engine(depth, false);
                assert_eq!(
                    pruned.find_best_sequence(board, color),
                    exhaustive.find_best_sequence(board, color),
                    "position {i}, {color}, depth {depth}"
                );
            }
        }
    }
}

#[test]
fn sequences_are_forced_capture_compliant() {
    let board = make_board(
        "........
         ........
         ........
         ........
         ...b.b..
         ....w...
         .w......
         ........",
    );
    let mut engine = engine(4, true);
    let (_, forced) = engine.moves_for_side(&board, Color::White);
    assert!(forced);
    let sequence = engine.find_best_sequence(&board, Color::White);
    assert!(!sequence.is_empty());
    assert!(sequence[0].is_capture(), "forced side must open with a capture");
}

#[test]
fn repeated_searches_do_not_leak_state() {
    // The arena is rebuilt per call: searching a chain position twice with
    // the same engine gives the same answer, even after an unrelated
    // search in between.
    let chain_board = make_board(
        "........
         ........
         .b......
         ........
         ...b....
         ....w...
         ........
         ........",
    );
    let mut engine = engine(2, true);
    let first = engine.find_best_sequence(&chain_board, Color::White);
    let _ = engine.find_best_sequence(&Board::new(), Color::Black);
    let second = engine.find_best_sequence(&chain_board, Color::White);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
