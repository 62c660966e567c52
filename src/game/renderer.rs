use std::fmt::Write;
use std::time::Duration;

use crate::board::Side;

use super::session::GameSession;

pub trait GameRenderer {
    /// Builds one frame: the board and whatever status lines the renderer shows.
    fn render(&self, session: &GameSession) -> String;
    fn frame_delay(&self) -> Option<Duration>;
}

fn render_board_and_status(session: &GameSession) -> String {
    let mut frame = String::with_capacity(512);
    let (black, white) = session.scores();

    frame.push_str(&session.board().to_ascii());
    frame.push('\n');
    let _ = writeln!(frame, "Black (B): {}  White (W): {}", black, white);

    if session.is_game_over() {
        match session.winner() {
            Some(side) => {
                let _ = writeln!(frame, "Game over: {} wins", side);
            }
            None => frame.push_str("Game over: draw\n"),
        }
    } else {
        let _ = writeln!(frame, "Turn: {}", session.current_side());
    }
    frame
}

fn render_search_stats(frame: &mut String, session: &GameSession) {
    let score = session
        .last_result()
        .map_or("-".to_string(), |result| result.score.to_string());
    let took = session
        .last_thinking_time()
        .map_or("-".to_string(), |duration| format!("{:?}", duration));
    let _ = writeln!(frame, "* Score: {}\n* Move took: {}", score, took);
    if let Some(stats) = session.last_search_stats() {
        let _ = writeln!(
            frame,
            "* Positions searched: {}\n* Cutoffs: {}",
            stats.positions_searched, stats.cutoffs
        );
    }
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, session: &GameSession) -> String {
        let mut frame = render_board_and_status(session);
        if !session.is_game_over() {
            frame.push_str("Enter your move:\n");
        }
        frame
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, session: &GameSession) -> String {
        let mut frame = render_board_and_status(session);
        render_search_stats(&mut frame, session);
        frame
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_side: Side,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, session: &GameSession) -> String {
        let mut frame = render_board_and_status(session);
        render_search_stats(&mut frame, session);
        if !session.is_game_over() && session.current_side() == self.human_side {
            frame.push_str("Enter your move:\n");
        }
        frame
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::session::{SessionConfig, SessionMode};

    fn session() -> GameSession {
        GameSession::new(SessionConfig {
            mode: SessionMode::TwoPlayer,
            ..SessionConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_simple_frame() {
        let frame = SimpleRenderer.render(&session());
        assert!(frame.starts_with("  a b c d e f g h\n"));
        assert!(frame.contains("Black (B): 2  White (W): 2"));
        assert!(frame.contains("Turn: white"));
        assert!(frame.ends_with("Enter your move:\n"));
    }

    #[test]
    fn test_stats_frame_before_any_search() {
        let renderer = StatsRenderer {
            delay_between_moves: Some(Duration::from_millis(5)),
        };
        let frame = renderer.render(&session());
        assert!(frame.contains("* Score: -"));
        assert!(!frame.contains("* Positions searched"));
        assert_eq!(Some(Duration::from_millis(5)), renderer.frame_delay());
    }

    #[test]
    fn test_stats_frame_after_search() {
        let mut session = session();
        session.request_hint().unwrap();
        session.wait_for_ai_move().unwrap();
        let stats = session.last_search_stats().unwrap();

        let renderer = StatsRenderer {
            delay_between_moves: None,
        };
        let frame = renderer.render(&session);
        assert!(frame.contains(&format!("* Positions searched: {}", stats.positions_searched)));
        assert!(frame.contains(&format!("* Cutoffs: {}", stats.cutoffs)));
    }

    #[test]
    fn test_conditional_prompt() {
        let session = session();
        let human_white = ConditionalStatsRenderer {
            human_side: Side::White,
        };
        let human_black = ConditionalStatsRenderer {
            human_side: Side::Black,
        };
        assert!(human_white.render(&session).contains("Enter your move:"));
        assert!(!human_black.render(&session).contains("Enter your move:"));
    }
}
