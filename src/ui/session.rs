//! Game session management for the connect-K GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::ConfigError;
use crate::rules::{winning_line, Outcome};
use crate::{AIEngine, BitBoard, GameConfig, GameState, MoveResult, Player, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One game between the human and the automated player
pub struct GameSession {
    pub state: GameState,
    pub current_turn: Player,
    pub outcome: Outcome,
    /// The automated player gave up; the game counts as won by the human
    pub resigned: bool,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Player)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::new(config)?;
        let current_turn = state.first_player();
        log::info!(
            "new {}x{} game, {} in a row, human plays {} and {} moves first",
            config.size,
            config.size,
            config.run_length,
            config.human_symbol,
            current_turn.name()
        );

        Ok(Self {
            state,
            current_turn,
            outcome: Outcome::InProgress,
            resigned: false,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
        })
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.state.config()
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        // The config already passed validation once
        if let Ok(session) = Self::new(&self.config()) {
            *self = session;
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Player::Human
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Player::Comp
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Cells of the completed line, if the game was won
    pub fn winning_line(&self) -> Option<BitBoard> {
        winning_line(&self.state).map(|(_, line)| line)
    }

    /// Line the automated player would say about its last move
    pub fn commentary(&self) -> Option<&'static str> {
        self.last_ai_result.as_ref().map(MoveResult::commentary)
    }

    /// Attempt to place the human's mark at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos, Player::Human)
            .map_err(|err| format!("Cannot play there: {}", err))?;
        log::debug!("human plays {}", pos);
        Ok(())
    }

    /// Execute a move for either side
    fn execute_move(&mut self, pos: Pos, player: Player) -> Result<(), crate::GameError> {
        self.state.apply(pos, player)?;

        self.move_history.push((pos, player));
        self.last_move = Some(pos);
        self.move_timer.stop();
        self.message = None;

        self.outcome = self.state.outcome();
        match self.outcome {
            Outcome::Win(winner) => log::info!("{} wins after {} moves", winner.name(), self.move_history.len()),
            Outcome::Draw => log::info!("draw after {} moves", self.move_history.len()),
            Outcome::InProgress => {
                self.current_turn = player.opponent();
                self.move_timer.start();
            }
        }
        Ok(())
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_over() {
            return;
        }

        let state = self.state.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new();
            let result = engine.get_move_with_stats(&state, Player::Comp);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::error!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.apply_ai_result(move_result);
        }
    }

    /// Play the move chosen by the engine
    pub fn apply_ai_result(&mut self, result: MoveResult) {
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => {
                if let Err(err) = self.execute_move(pos, Player::Comp) {
                    log::error!("AI chose an unplayable move: {}", err);
                    self.message = Some(format!("AI error: {}", err));
                }
            }
            None => {
                log::info!("Computer resigns after {} moves", self.move_history.len());
                self.resigned = true;
                self.outcome = Outcome::Win(Player::Human);
                self.move_timer.stop();
                self.message = Some("AI resigned".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back moves until it is the human's turn again
    ///
    /// Moves are reverted newest first. An automated reply is always taken
    /// back together with the human move before it.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        let Some((pos, player)) = self.move_history.pop() else {
            return;
        };
        self.state.revert(pos, player);
        self.current_turn = player;

        if player == Player::Comp {
            if let Some((pos, player)) = self.move_history.pop() {
                self.state.revert(pos, player);
                self.current_turn = player;
            }
        }

        self.resigned = false;
        self.outcome = self.state.outcome();
        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.message = None;
        self.move_timer.start();
        log::debug!("undo, {} moves left", self.move_history.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchType;
    use crate::Symbol;

    fn session(human_first: bool) -> GameSession {
        GameSession::new(&GameConfig::new(3, Symbol::X, 3, human_first)).unwrap()
    }

    fn ai_move(pos: Pos) -> MoveResult {
        MoveResult {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms: 0,
            nodes: 1,
            win_score: 64,
        }
    }

    #[test]
    fn test_new_session() {
        let s = session(true);
        assert!(s.is_human_turn());
        assert!(!s.is_over());
        assert!(s.move_history.is_empty());

        assert!(session(false).is_ai_turn());
    }

    #[test]
    fn test_invalid_config() {
        assert!(GameSession::new(&GameConfig::new(10, Symbol::X, 3, true)).is_err());
    }

    #[test]
    fn test_try_place() {
        let mut s = session(true);
        assert!(s.try_place(Pos::new(1, 1)).is_ok());
        assert_eq!(s.state.cell(Pos::new(1, 1)), Some(Player::Human));
        assert_eq!(s.last_move, Some(Pos::new(1, 1)));
        assert!(s.is_ai_turn());

        // Not the human's turn any more
        assert!(s.try_place(Pos::new(0, 0)).is_err());
    }

    #[test]
    fn test_try_place_occupied() {
        let mut s = session(true);
        s.try_place(Pos::new(1, 1)).unwrap();
        s.apply_ai_result(ai_move(Pos::new(0, 0)));

        let err = s.try_place(Pos::new(0, 0)).unwrap_err();
        assert!(err.contains("invalid move at (0, 0)"));
        assert!(s.is_human_turn());
        assert_eq!(s.move_history.len(), 2);
    }

    #[test]
    fn test_try_place_off_board() {
        let mut s = session(true);
        assert!(s.try_place(Pos::new(3, 0)).is_err());
        assert!(s.move_history.is_empty());
    }

    #[test]
    fn test_apply_ai_result() {
        let mut s = session(false);
        s.apply_ai_result(ai_move(Pos::new(1, 1)));
        assert_eq!(s.state.cell(Pos::new(1, 1)), Some(Player::Comp));
        assert!(s.is_human_turn());
        assert!(s.commentary().is_some());
    }

    #[test]
    fn test_ai_resignation_ends_game() {
        let mut s = session(false);
        let mut result = ai_move(Pos::new(0, 0));
        result.best_move = None;
        result.search_type = SearchType::Resign;
        s.apply_ai_result(result);

        assert!(s.move_history.is_empty());
        assert!(s.resigned);
        assert!(s.is_over());
        assert_eq!(s.outcome, Outcome::Win(Player::Human));
        assert_eq!(s.message.as_deref(), Some("AI resigned"));

        // No new worker is spawned for a finished game
        s.start_ai_thinking();
        assert!(!s.is_ai_thinking());
        assert!(s.try_place(Pos::new(1, 1)).is_err());
    }

    #[test]
    fn test_undo_after_resignation() {
        let mut s = session(true);
        s.try_place(Pos::new(1, 1)).unwrap();
        let mut result = ai_move(Pos::new(0, 0));
        result.best_move = None;
        s.apply_ai_result(result);
        assert!(s.is_over());

        s.undo();
        assert!(!s.resigned);
        assert!(!s.is_over());
        assert!(s.is_human_turn());
        assert_eq!(s.state.stone_count(), 0);
    }

    #[test]
    fn test_human_win() {
        let mut s = session(true);
        for (human, comp) in [((0, 0), (1, 0)), ((0, 1), (1, 1))] {
            s.try_place(Pos::new(human.0, human.1)).unwrap();
            s.apply_ai_result(ai_move(Pos::new(comp.0, comp.1)));
        }
        s.try_place(Pos::new(0, 2)).unwrap();

        assert_eq!(s.outcome, Outcome::Win(Player::Human));
        assert!(s.is_over());
        assert_eq!(s.winning_line().map(|line| line.count()), Some(3));
        assert!(s.try_place(Pos::new(2, 2)).is_err());
    }

    #[test]
    fn test_undo_takes_back_reply() {
        let mut s = session(true);
        s.try_place(Pos::new(1, 1)).unwrap();
        s.apply_ai_result(ai_move(Pos::new(0, 0)));

        s.undo();
        assert!(s.move_history.is_empty());
        assert_eq!(s.state.stone_count(), 0);
        assert!(s.is_human_turn());
        assert_eq!(s.last_move, None);
    }

    #[test]
    fn test_undo_after_human_win() {
        let mut s = session(true);
        for (human, comp) in [((0, 0), (1, 0)), ((0, 1), (1, 1))] {
            s.try_place(Pos::new(human.0, human.1)).unwrap();
            s.apply_ai_result(ai_move(Pos::new(comp.0, comp.1)));
        }
        s.try_place(Pos::new(0, 2)).unwrap();

        s.undo();
        assert_eq!(s.outcome, Outcome::InProgress);
        assert!(s.is_human_turn());
        assert_eq!(s.move_history.len(), 4);
        assert_eq!(s.last_move, Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let mut s = session(true);
        s.undo();
        assert!(s.is_human_turn());
        assert_eq!(s.state.stone_count(), 0);
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut s = GameSession::new(&GameConfig::new(5, Symbol::O, 4, false)).unwrap();
        s.apply_ai_result(ai_move(Pos::new(2, 2)));
        s.reset();

        assert_eq!(s.config(), GameConfig::new(5, Symbol::O, 4, false));
        assert_eq!(s.state.stone_count(), 0);
        assert!(s.is_ai_turn());
        assert!(s.last_ai_result.is_none());
    }

    #[test]
    fn test_move_timer() {
        let mut timer = MoveTimer::default();
        assert!(timer.start_time.is_some());
        timer.stop();
        assert!(timer.start_time.is_none());
        assert!(timer.last_move_duration.is_some());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }
}
