//! The authoritative game state and the glue that runs the engine off-thread.

use std::mem;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use thiserror::Error;

use crate::board::{Board, CaptureMode, Cell, Side};
use crate::move_generator::{MoveGenerator, MoveList, MoveOrder};
use crate::searcher::ScoreMove;

use super::engine::{ConfigError, Engine, EngineConfig, SearchStats};

/// Who the engine plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    SinglePlayer { engine_side: Side },
    TwoPlayer,
    /// The engine plays both sides.
    SelfPlay,
}

impl Default for SessionMode {
    fn default() -> Self {
        SessionMode::SinglePlayer {
            engine_side: Side::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub engine: EngineConfig,
    pub mode: SessionMode,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("the engine is already thinking")]
    AlreadyThinking,
    #[error("the game is over")]
    GameOver,
    #[error("it is {side:?}'s turn, which the engine does not play")]
    NotEngineTurn { side: Side },
    #[error("no side is played by the engine")]
    NoEngineSide,
    #[error("the engine stopped before returning a move")]
    EngineDisconnected,
    #[error("invalid engine configuration: {error:?}")]
    InvalidConfig { error: ConfigError },
}

impl From<ConfigError> for SessionError {
    fn from(error: ConfigError) -> Self {
        SessionError::InvalidConfig { error }
    }
}

/// Whether a background search is in flight.
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(ScoreMove, SearchStats)>,
        start_time: Instant,
    },
}

pub struct GameSession {
    config: SessionConfig,
    board: Board,
    current_side: Side,
    scores: [u8; 2],
    moves_played: u8,
    game_over: bool,
    ai_state: AiState,
    last_result: Option<ScoreMove>,
    last_stats: Option<SearchStats>,
    last_thinking_time: Option<Duration>,
}

impl GameSession {
    /// Starts a game from the canonical opening. White moves first.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        Self::with_position(config, Board::starting_position(), Side::White)
    }

    /// Starts a game from an arbitrary position. If `side_to_move` has no legal
    /// placement the turn passes straight to its opponent.
    pub fn with_position(
        config: SessionConfig,
        board: Board,
        side_to_move: Side,
    ) -> Result<Self, SessionError> {
        config.engine.validate()?;

        let mut session = Self {
            config,
            board,
            current_side: side_to_move,
            scores: [board.count(Side::Black), board.count(Side::White)],
            moves_played: board.occupied_count(),
            game_over: false,
            ai_state: AiState::Idle,
            last_result: None,
            last_stats: None,
            last_thinking_time: None,
        };
        session.settle_turn(side_to_move);
        Ok(session)
    }

    /// Resets to the opening. A search still in flight is abandoned and its result
    /// is dropped when it arrives.
    pub fn new_game(&mut self) {
        if self.is_ai_thinking() {
            debug!("discarding in-flight engine search");
        }
        self.board = Board::starting_position();
        self.current_side = Side::White;
        self.scores = [2, 2];
        self.moves_played = self.board.occupied_count();
        self.game_over = false;
        self.ai_state = AiState::Idle;
        self.last_result = None;
        self.last_stats = None;
        self.last_thinking_time = None;
        info!("new game");
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Piece counts as `(black, white)`.
    pub fn scores(&self) -> (u8, u8) {
        (self.score(Side::Black), self.score(Side::White))
    }

    pub fn score(&self, side: Side) -> u8 {
        self.scores[side as usize]
    }

    pub fn moves_played(&self) -> u8 {
        self.moves_played
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// How long the in-flight search has been running.
    pub fn thinking_time(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    pub fn last_result(&self) -> Option<ScoreMove> {
        self.last_result
    }

    /// Node and cutoff counts of the most recent finished search.
    pub fn last_search_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }

    pub fn last_thinking_time(&self) -> Option<Duration> {
        self.last_thinking_time
    }

    /// Legal placements for the side to move, in ascending cell order.
    pub fn legal_moves(&self) -> MoveList {
        if self.game_over {
            return MoveList::new();
        }
        MoveGenerator::new(MoveOrder::Plain).generate_moves(&self.board, self.current_side)
    }

    pub fn is_engine_turn(&self) -> bool {
        if self.game_over {
            return false;
        }
        match self.config.mode {
            SessionMode::SinglePlayer { engine_side } => engine_side == self.current_side,
            SessionMode::TwoPlayer => false,
            SessionMode::SelfPlay => true,
        }
    }

    /// The side with more pieces once the game is over; `None` while it is still
    /// running or when it ends level.
    pub fn winner(&self) -> Option<Side> {
        if !self.game_over {
            return None;
        }
        let (black, white) = self.scores();
        if black > white {
            Some(Side::Black)
        } else if white > black {
            Some(Side::White)
        } else {
            None
        }
    }

    /// Places a piece for the side to move. Returns false, leaving everything
    /// untouched, when the engine is thinking, the game is over, or the placement
    /// captures nothing.
    pub fn apply_move(&mut self, cell: Cell) -> bool {
        if self.is_ai_thinking() || self.game_over {
            return false;
        }

        let mover = self.current_side;
        let captured = self.board.probe_or_apply(cell, mover, CaptureMode::Apply);
        if captured == 0 {
            return false;
        }

        self.scores[mover as usize] += captured + 1;
        self.scores[mover.opposite() as usize] -= captured;
        self.moves_played += 1;
        debug!("{} plays {}, capturing {}", mover, cell, captured);

        self.settle_turn(mover.opposite());
        true
    }

    /// Starts the engine on a snapshot of the current position.
    pub fn request_ai_move(&mut self) -> Result<(), SessionError> {
        self.ensure_can_search()?;
        match self.config.mode {
            SessionMode::TwoPlayer => return Err(SessionError::NoEngineSide),
            SessionMode::SinglePlayer { engine_side } if engine_side != self.current_side => {
                return Err(SessionError::NotEngineTurn {
                    side: self.current_side,
                });
            }
            _ => {}
        }

        self.start_search();
        Ok(())
    }

    /// Starts the engine for the side to move even when a human plays it. The
    /// result is polled and played exactly like an engine move.
    pub fn request_hint(&mut self) -> Result<(), SessionError> {
        self.ensure_can_search()?;
        self.start_search();
        Ok(())
    }

    fn ensure_can_search(&self) -> Result<(), SessionError> {
        if self.is_ai_thinking() {
            return Err(SessionError::AlreadyThinking);
        }
        if self.game_over {
            return Err(SessionError::GameOver);
        }
        Ok(())
    }

    fn start_search(&mut self) {
        let board = self.board;
        let side = self.current_side;
        let moves_played = self.moves_played;
        let engine_config = self.config.engine;
        let (sender, receiver) = channel();

        thread::spawn(move || {
            let mut engine = Engine::with_config(engine_config);
            let result = engine.best_move(&board, side, moves_played);
            // The session may have moved on; nobody is listening then.
            let _ = sender.send((result, engine.get_search_stats()));
        });

        debug!("engine thinking for {}", side);
        self.ai_state = AiState::Thinking {
            receiver,
            start_time: Instant::now(),
        };
    }

    /// Checks for a finished search without blocking. Once one arrives the
    /// thinking state is cleared and the move is played; the played cell is
    /// returned.
    pub fn poll_ai_move(&mut self) -> Option<Cell> {
        let ((result, stats), elapsed) = match &self.ai_state {
            AiState::Idle => return None,
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(answer) => (answer, start_time.elapsed()),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    warn!("engine thread exited without a result");
                    self.ai_state = AiState::Idle;
                    return None;
                }
            },
        };

        self.ai_state = AiState::Idle;
        self.last_stats = Some(stats);
        self.last_thinking_time = Some(elapsed);
        self.apply_ai_result(result)
    }

    /// Blocks until the in-flight search finishes, then plays its move. Returns
    /// `Ok(None)` when no search was running.
    pub fn wait_for_ai_move(&mut self) -> Result<Option<Cell>, SessionError> {
        let (receiver, start_time) = match mem::replace(&mut self.ai_state, AiState::Idle) {
            AiState::Idle => return Ok(None),
            AiState::Thinking {
                receiver,
                start_time,
            } => (receiver, start_time),
        };

        let (result, stats) = receiver
            .recv()
            .map_err(|_| SessionError::EngineDisconnected)?;
        self.last_stats = Some(stats);
        self.last_thinking_time = Some(start_time.elapsed());
        Ok(self.apply_ai_result(result))
    }

    fn apply_ai_result(&mut self, result: ScoreMove) -> Option<Cell> {
        self.last_result = Some(result);
        let side = self.current_side;

        let cell = match result.cell {
            Some(cell) if self.board.is_legal_move(cell, side) => cell,
            _ => {
                warn!(
                    "engine returned {} for {}; playing the first legal cell instead",
                    result, side
                );
                Cell::all().find(|&cell| self.board.is_legal_move(cell, side))?
            }
        };

        if self.apply_move(cell) {
            Some(cell)
        } else {
            None
        }
    }

    /// Hands the turn to `next` if it can move, otherwise back to its opponent.
    /// When neither side can move the game is over.
    fn settle_turn(&mut self, next: Side) {
        if self.board.has_legal_move(next) {
            self.current_side = next;
        } else if self.board.has_legal_move(next.opposite()) {
            debug!("{} has no legal move and passes", next);
            self.current_side = next.opposite();
        } else {
            self.game_over = true;
            let (black, white) = self.scores();
            info!("game over: black {}, white {}", black, white);
        }
    }
}
