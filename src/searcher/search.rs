use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Cell, Side};
use crate::evaluate::Evaluator;
use crate::move_generator::MoveGenerator;

/// A search result: the chosen cell, if any, and its score for the root side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreMove {
    pub cell: Option<Cell>,
    pub score: i32,
}

impl ScoreMove {
    pub fn new(cell: Option<Cell>, score: i32) -> Self {
        Self { cell, score }
    }

    /// The cell index, or -1 when no move was found.
    pub fn index(&self) -> i32 {
        self.cell.map_or(-1, |cell| cell.index() as i32)
    }
}

impl fmt::Display for ScoreMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell {
            Some(cell) => write!(f, "{} ({})", cell, self.score),
            None => write!(f, "pass ({})", self.score),
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug)]
struct SearchConfig {
    depth: u8,
    evaluator: Evaluator,
    move_generator: MoveGenerator,
}

/// Statistics collected during search.
#[derive(Clone, Copy, Debug, Default)]
struct SearchStats {
    nodes: usize,
    leaves: usize,
    cutoffs: usize,
    passes: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    /// `depth` is clamped to at least one ply.
    pub fn new(depth: u8, evaluator: Evaluator, move_generator: MoveGenerator) -> Self {
        Self {
            config: SearchConfig {
                depth: depth.max(1),
                evaluator,
                move_generator,
            },
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.config.evaluator
    }

    pub fn move_generator(&self) -> &MoveGenerator {
        &self.config.move_generator
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.nodes
    }

    pub fn leaf_count(&self) -> usize {
        self.stats.leaves
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs
    }

    pub fn pass_count(&self) -> usize {
        self.stats.passes
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

/// Searches `board` for `side`'s best placement.
///
/// `moves_played` is the number of pieces already on the board; it drives the
/// evaluator's phase switch. The board is never modified: every node works on its
/// own copy. Returns a `ScoreMove` with no cell when `side` cannot move or the
/// game is already over.
pub fn search_best_move(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
    moves_played: u8,
) -> ScoreMove {
    context.reset_stats();
    debug!(
        "search depth: {}, side: {}, moves played: {}",
        context.search_depth(),
        side,
        moves_played
    );

    let start = Instant::now();
    let result = search_node(context, board, side, side, 0, moves_played, i32::MAX);
    let duration = start.elapsed();
    context.stats.record_result(result.score, duration);

    debug!(
        "best move: {}, nodes: {}, leaves: {}, cutoffs: {}, passes: {}, took {:?}",
        result,
        context.stats.nodes,
        context.stats.leaves,
        context.stats.cutoffs,
        context.stats.passes,
        duration
    );
    result
}

fn search_node(
    context: &mut SearchContext,
    board: &Board,
    root_side: Side,
    side: Side,
    depth: u8,
    moves_played: u8,
    bound: i32,
) -> ScoreMove {
    context.stats.nodes += 1;

    if depth >= context.config.depth || board.is_game_over() {
        context.stats.leaves += 1;
        let score = context
            .config
            .evaluator
            .score(board, root_side, moves_played);
        return ScoreMove::new(None, score);
    }

    let maximizing = side == root_side;
    let mut best = ScoreMove::new(None, if maximizing { i32::MIN } else { i32::MAX });
    let move_generator = context.config.move_generator;

    for cell in move_generator.legal_moves(board, side, maximizing) {
        let mut child = *board;
        child.apply(cell, side);

        let score = search_node(
            context,
            &child,
            root_side,
            side.opposite(),
            depth + 1,
            moves_played + 1,
            best.score,
        )
        .score;

        if maximizing {
            if score > bound {
                context.stats.cutoffs += 1;
                return ScoreMove::new(Some(cell), score);
            }
            if best.cell.is_none() || score > best.score {
                best = ScoreMove::new(Some(cell), score);
            }
        } else {
            if score < bound {
                context.stats.cutoffs += 1;
                return ScoreMove::new(Some(cell), score);
            }
            if best.cell.is_none() || score < best.score {
                best = ScoreMove::new(Some(cell), score);
            }
        }
    }

    if best.cell.is_none() {
        // The game is not over, so the opponent can move: pass the turn.
        context.stats.passes += 1;
        let reply = search_node(
            context,
            board,
            root_side,
            side.opposite(),
            depth + 1,
            moves_played,
            best.score,
        );
        return ScoreMove::new(None, reply.score);
    }

    best
}
