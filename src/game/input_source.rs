use crate::input_handler::{parse_move_input, InputError, MoveInput};

use super::session::GameSession;

/// Where the human side's moves come from.
pub trait InputSource {
    /// `Ok(None)` means the input was unusable and the player should be asked again.
    fn get_move(&mut self, session: &GameSession) -> Result<Option<MoveInput>, InputError>;
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&mut self, _session: &GameSession) -> Result<Option<MoveInput>, InputError> {
        match parse_move_input() {
            Ok(move_input) => Ok(Some(move_input)),
            Err(InputError::UserExit) => Err(InputError::UserExit),
            Err(error @ InputError::IOError { .. }) => Err(error),
            Err(_) => Ok(None), // Other errors treated as invalid input
        }
    }
}
