//! Minimax search with alpha-beta pruning.
//!
//! One ply is one full turn; a forced capture chain by a single piece is
//! explored inside the ply without consuming depth budget. The best root
//! chain is rebuilt from a flat arena of (move, next-index) nodes, filled
//! append-only during the search and cleared between searches.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::ConfigError;
use super::eval::{score, ScoringMode, WIN_SCORE};
use super::state::Board;
use super::types::{Color, Move, Square};

/// Hard cap on the configurable search depth.
pub const MAX_DEPTH: u32 = 32;

/// How the move-shuffling RNG is seeded.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeedPolicy {
    /// Fixed seed: identical runs produce identical play.
    Fixed(u64),
    /// Wall-clock seed: play varies from run to run.
    TimeBased,
}

/// Engine configuration, validated once at [`Engine::new`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EngineConfig {
    /// Search depth in plies (full turns), at least 1.
    pub max_depth: u32,
    /// Position scoring heuristic.
    pub scoring: ScoringMode,
    /// Alpha-beta pruning toggle. Disabling it never changes the best
    /// score, only the amount of work done to find it.
    pub pruning: bool,
    /// Seed policy for move-order shuffling.
    pub seed: SeedPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_depth: 4,
            scoring: ScoringMode::Material,
            pruning: true,
            seed: SeedPolicy::TimeBased,
        }
    }
}

/// One search-tree arena entry: the best move found at this node and the
/// index of its chain continuation, if that move left a capture chain open.
#[derive(Clone, Copy)]
struct SearchNode {
    mv: Option<Move>,
    next: Option<usize>,
}

/// Move generation and best-sequence search for one configured player.
///
/// Holds only scalar configuration, the shuffling RNG, and the per-search
/// node arena; board snapshots are borrowed per call.
pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
    nodes: Vec<SearchNode>,
}

impl Engine {
    /// Create an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Rejects a zero or oversized `max_depth` up front so a bad setting
    /// cannot surface mid-search.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        if config.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if config.max_depth > MAX_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                depth: config.max_depth,
                max: MAX_DEPTH,
            });
        }

        let seed = match config.seed {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::TimeBased => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
        };
        Ok(Engine {
            config,
            rng: StdRng::seed_from_u64(seed),
            nodes: Vec::new(),
        })
    }

    /// The configuration this engine was built with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Legal moves for a whole side, shuffled.
    ///
    /// An empty list means the side has no legal continuation (game over
    /// for that side). `true` means the moves are forced captures.
    #[must_use]
    pub fn moves_for_side(&mut self, board: &Board, color: Color) -> (Vec<Move>, bool) {
        let (mut moves, forced) = board.raw_moves_for_side(color);
        moves.shuffle(&mut self.rng);
        (moves, forced)
    }

    /// Legal moves for a single square, in board-scan order.
    ///
    /// Used for human piece selection and for continuing an in-progress
    /// capture chain from the landing square.
    #[must_use]
    pub fn moves_for_square(&self, board: &Board, sq: Square) -> (Vec<Move>, bool) {
        board.raw_moves_for_square(sq)
    }

    /// Best full-turn move sequence for `color`, possibly several chained
    /// captures by one piece. Empty iff `color` has no legal move.
    pub fn find_best_sequence(&mut self, board: &Board, color: Color) -> Vec<Move> {
        self.nodes.clear();
        let best = self.root_search(board, color, None, 0, -1.0);

        let mut sequence = Vec::new();
        let mut cur = Some(0);
        while let Some(idx) = cur {
            let Some(node) = self.nodes.get(idx) else {
                break;
            };
            let Some(mv) = node.mv else {
                break;
            };
            sequence.push(mv);
            cur = node.next;
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "search for {color}: depth {}, score {best:.3}, {} move(s)",
            self.config.max_depth,
            sequence.len()
        );
        #[cfg(not(feature = "logging"))]
        let _ = best;

        sequence
    }

    /// Root phase: explore the side-to-move's first turn, following forced
    /// capture chains piece-by-piece and recording each branch in the
    /// arena so the winning chain can be walked back afterwards.
    ///
    /// `chain` is the square of the piece mid-capture-chain, `None` when
    /// the turn is just starting. `alpha` carries the caller's running
    /// best for the hand-off into the ply phase when a chain ends.
    fn root_search(
        &mut self,
        board: &Board,
        color: Color,
        chain: Option<Square>,
        state: usize,
        alpha: f64,
    ) -> f64 {
        self.nodes.push(SearchNode {
            mv: None,
            next: None,
        });

        let (moves, forced) = match chain {
            Some(sq) => board.raw_moves_for_square(sq),
            None => self.moves_for_side(board, color),
        };

        // Chain over: the turn is complete, opponent replies at depth 0.
        if chain.is_some() && !forced {
            return self.ply_search(board, color.opponent(), 0, alpha, WIN_SCORE + 1.0, None);
        }

        let mut best = -1.0;
        for mv in moves {
            let next_state = self.nodes.len();
            let next_board = board.apply_unchecked(mv);
            let value = if forced {
                self.root_search(&next_board, color, Some(mv.to), next_state, best)
            } else {
                self.ply_search(&next_board, color.opponent(), 0, best, WIN_SCORE + 1.0, None)
            };
            if value > best {
                best = value;
                self.nodes[state].mv = Some(mv);
                self.nodes[state].next = if forced { Some(next_state) } else { None };
            }
        }
        best
    }

    /// Ply phase: minimax over full turns below the root.
    ///
    /// Min/max alternates by depth parity, not by physical side: the side
    /// that initiated the search moves at odd depths and is always the
    /// maximizing side. Capture chains recurse at the same depth with the
    /// same color until exhausted.
    fn ply_search(
        &mut self,
        board: &Board,
        color: Color,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        chain: Option<Square>,
    ) -> f64 {
        if depth == self.config.max_depth {
            // Recover the search initiator from the depth parity.
            let perspective = if depth % 2 == 1 { color } else { color.opponent() };
            return score(board, perspective, self.config.scoring);
        }

        let (moves, forced) = match chain {
            Some(sq) => board.raw_moves_for_square(sq),
            None => self.moves_for_side(board, color),
        };

        if chain.is_some() && !forced {
            return self.ply_search(board, color.opponent(), depth + 1, alpha, beta, None);
        }

        if moves.is_empty() {
            // The side to move is stuck and loses; at odd depth that side
            // is the search initiator.
            return if depth % 2 == 1 { 0.0 } else { WIN_SCORE };
        }

        let mut min_score = WIN_SCORE + 1.0;
        let mut max_score: f64 = -1.0;
        for mv in moves {
            let next_board = board.apply_unchecked(mv);
            let value = if chain.is_none() && !forced {
                self.ply_search(&next_board, color.opponent(), depth + 1, alpha, beta, None)
            } else {
                self.ply_search(&next_board, color, depth, alpha, beta, Some(mv.to))
            };
            min_score = min_score.min(value);
            max_score = max_score.max(value);

            if depth % 2 == 1 {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }
            if self.config.pruning && alpha >= beta {
                // Bound-adjusted value: never exact, but guaranteed to be
                // discarded by the comparison that caused the cutoff.
                return if depth % 2 == 1 {
                    max_score + 1.0
                } else {
                    min_score - 1.0
                };
            }
        }

        if depth % 2 == 1 {
            max_score
        } else {
            min_score
        }
    }
}
