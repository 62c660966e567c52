use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::board::Side;
use crate::input_handler::{InputError, MoveInput};

use super::input_source::InputSource;
use super::renderer::GameRenderer;
use super::session::{GameSession, SessionError};

/// How often the loop checks on a running engine search.
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

#[derive(Error, Debug)]
pub enum GameLoopError {
    #[error("input error: {error}")]
    Input { error: InputError },
    #[error("session error: {error}")]
    Session { error: SessionError },
    #[error("output error: {error:?}")]
    Output { error: String },
}

impl From<io::Error> for GameLoopError {
    fn from(error: io::Error) -> Self {
        GameLoopError::Output {
            error: error.to_string(),
        }
    }
}

impl From<SessionError> for GameLoopError {
    fn from(error: SessionError) -> Self {
        GameLoopError::Session { error }
    }
}

/// Drives a session to completion: renders each position, lets the engine
/// move on its turns, and asks the input source otherwise.
pub struct GameLoop<I: InputSource, R: GameRenderer, W: Write> {
    session: GameSession,
    input: I,
    renderer: R,
    out: W,
    tick: Duration,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R, io::Stdout> {
    pub fn new(session: GameSession, input: I, renderer: R) -> Self {
        Self::with_output(session, input, renderer, io::stdout())
    }
}

impl<I: InputSource, R: GameRenderer, W: Write> GameLoop<I, R, W> {
    pub fn with_output(session: GameSession, input: I, renderer: R, out: W) -> Self {
        Self {
            session,
            input,
            renderer,
            out,
            tick: DEFAULT_TICK,
        }
    }

    pub fn set_tick(&mut self, tick: Duration) {
        self.tick = tick;
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays until the game ends or the player exits. Returns the winner, if any.
    pub fn run(&mut self) -> Result<Option<Side>, GameLoopError> {
        loop {
            let frame = self.renderer.render(&self.session);
            write!(self.out, "{}", frame)?;
            self.out.flush()?;

            if self.session.is_game_over() {
                let winner = self.session.winner();
                info!("game finished, winner: {:?}", winner);
                return Ok(winner);
            }

            if self.session.is_engine_turn() {
                self.play_engine_turn()?;
                continue;
            }

            match self.input.get_move(&self.session) {
                Ok(Some(MoveInput::Place { cell })) => {
                    if !self.session.apply_move(cell) {
                        writeln!(self.out, "Illegal move: {}", cell)?;
                    }
                }
                Ok(Some(MoveInput::UseEngine)) => self.play_suggested_move()?,
                Ok(Some(MoveInput::NewGame)) => self.session.new_game(),
                Ok(Some(MoveInput::Exit)) | Err(InputError::UserExit) => {
                    debug!("player exited");
                    return Ok(None);
                }
                Ok(None) => writeln!(self.out, "Invalid input")?,
                Err(error) => return Err(GameLoopError::Input { error }),
            }
        }
    }

    fn play_engine_turn(&mut self) -> Result<(), GameLoopError> {
        self.session.request_ai_move()?;
        self.await_engine_move()?;

        if let Some(delay) = self.renderer.frame_delay() {
            thread::sleep(delay);
        }
        Ok(())
    }

    /// Lets the engine choose for a human player.
    fn play_suggested_move(&mut self) -> Result<(), GameLoopError> {
        self.session.request_hint()?;
        self.await_engine_move()
    }

    /// Polls the running search, printing a thinking indicator until its move is played.
    fn await_engine_move(&mut self) -> Result<(), GameLoopError> {
        let side = self.session.current_side();
        write!(self.out, "{} is thinking", side)?;
        self.out.flush()?;

        let played = loop {
            if let Some(cell) = self.session.poll_ai_move() {
                break Some(cell);
            }
            if !self.session.is_ai_thinking() {
                break None;
            }
            write!(self.out, ".")?;
            self.out.flush()?;
            thread::sleep(self.tick);
        };

        match played {
            Some(cell) => writeln!(self.out, "\n{} plays {}", side, cell)?,
            None => writeln!(self.out, "\n{} found no move", side)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::EngineConfig;
    use crate::game::renderer::{SimpleRenderer, StatsRenderer};
    use crate::game::session::{SessionConfig, SessionMode};
    use common::cell::*;

    /// Replays a fixed list of inputs, then exits.
    struct ScriptedInput {
        inputs: std::vec::IntoIter<MoveInput>,
    }

    impl ScriptedInput {
        fn new(inputs: Vec<MoveInput>) -> Self {
            Self {
                inputs: inputs.into_iter(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn get_move(&mut self, _session: &GameSession) -> Result<Option<MoveInput>, InputError> {
            Ok(Some(self.inputs.next().unwrap_or(MoveInput::Exit)))
        }
    }

    fn session(mode: SessionMode) -> GameSession {
        let engine = EngineConfig {
            search_depth: 1,
            ..EngineConfig::default()
        };
        GameSession::new(SessionConfig { engine, mode }).unwrap()
    }

    #[test]
    fn test_self_play_runs_to_completion() {
        let renderer = StatsRenderer {
            delay_between_moves: None,
        };
        let mut game_loop = GameLoop::with_output(
            session(SessionMode::SelfPlay),
            ScriptedInput::new(vec![]),
            renderer,
            Vec::new(),
        );
        game_loop.set_tick(Duration::from_millis(1));

        let winner = game_loop.run().unwrap();

        let session = game_loop.session();
        assert!(session.is_game_over());
        assert_eq!(winner, session.winner());
        let (black, white) = session.scores();
        assert_eq!(session.moves_played(), black + white);

        let output = String::from_utf8(game_loop.out.clone()).unwrap();
        assert!(output.contains("is thinking"));
        assert!(output.contains("Game over"));
    }

    #[test]
    fn test_human_moves_and_engine_replies() {
        let mut game_loop = GameLoop::with_output(
            session(SessionMode::SinglePlayer {
                engine_side: Side::Black,
            }),
            ScriptedInput::new(vec![MoveInput::Place { cell: E3 }]),
            SimpleRenderer,
            Vec::new(),
        );
        game_loop.set_tick(Duration::from_millis(1));

        assert_eq!(None, game_loop.run().unwrap());

        let session = game_loop.session();
        assert_eq!(6, session.moves_played());
        assert_eq!(Side::White, session.current_side());
        let output = String::from_utf8(game_loop.out.clone()).unwrap();
        assert!(output.contains("black plays"));
    }

    #[test]
    fn test_illegal_and_commands() {
        let mut game_loop = GameLoop::with_output(
            session(SessionMode::TwoPlayer),
            ScriptedInput::new(vec![
                MoveInput::Place { cell: A1 },
                MoveInput::Place { cell: E3 },
                MoveInput::UseEngine,
                MoveInput::NewGame,
                MoveInput::Place { cell: F4 },
            ]),
            SimpleRenderer,
            Vec::new(),
        );
        game_loop.set_tick(Duration::from_millis(1));

        assert_eq!(None, game_loop.run().unwrap());

        let output = String::from_utf8(game_loop.out.clone()).unwrap();
        assert!(output.contains("Illegal move: a1"));
        assert!(output.contains("black is thinking"));
        assert!(output.contains("black plays"));

        // The new game discarded e3 and the engine reply; only f4 remains.
        let session = game_loop.session();
        assert_eq!(5, session.moves_played());
        assert_eq!((1, 4), session.scores());
    }
}
