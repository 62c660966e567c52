//! Depth-limited minimax search with single-bound pruning.
//!
//! The side to move at the root maximizes; its opponent minimizes. Every leaf is
//! scored from the root side's perspective, so no negation happens between plies.
//!
//! Each node receives one bound: the best score its parent has found so far. A
//! maximizing node stops as soon as a child scores above that bound, because the
//! minimizing parent already has something better. A minimizing node stops as soon
//! as a child scores below it. Pruning never changes the score reported at the root.

mod search;


pub use search::{search_best_move, ScoreMove, SearchContext};
