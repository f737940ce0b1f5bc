//! Game session: turn order, mode, scores and the AI's turn.
//!
//! A [`GameSession`] is the only thing that mutates a board or a scoreboard.
//! Human input goes through [`GameSession::submit_move`]; the computer's
//! reply goes through [`GameSession::play_ai_move`] with an [`AiTicket`]
//! obtained from [`GameSession::pending_ai_move`].
//!
//! Tickets carry the session generation. Every board reset bumps the
//! generation, so a reply scheduled before a reset is silently dropped.

use crate::config::EngineConfig;
use crate::games::tictactoe::{
    Board, Difficulty, Move, MoveError, MoveGenerator, Outcome, Position, Side, apply_move,
    evaluate,
};
use crate::mode::GameMode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Running tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl ScoreBoard {
    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn games.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.ties)
    }

    /// Counts a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { side: Side::X, .. } => self.x_wins = self.x_wins.saturating_add(1),
            Outcome::Win { side: Side::O, .. } => self.o_wins = self.o_wins.saturating_add(1),
            Outcome::Draw => self.ties = self.ties.saturating_add(1),
            Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Ties: {}", self.x_wins, self.o_wins, self.ties)
    }
}

/// Notifications for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    CellUpdated {
        /// Board index (0-8).
        index: usize,
        /// Side that moved.
        side: Side,
    },
    /// The game ended.
    GameOver(Outcome),
    /// The scoreboard changed (a game ended or scores were cleared).
    ScoreChanged(ScoreBoard),
    /// The board was cleared.
    BoardReset,
}

/// Permission for the AI to move on one specific position.
///
/// A ticket names the board generation and the number of moves played on
/// it, so it matches exactly one state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiTicket {
    generation: u64,
    ply: usize,
    side: Side,
}

impl AiTicket {
    /// Board generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves already played when the ticket was issued.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Side the AI plays.
    pub fn side(&self) -> Side {
        self.side
    }
}

/// One player's view of a tic-tac-toe match, across many games.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    to_move: Side,
    outcome: Outcome,
    history: Vec<Move>,
    mode: GameMode,
    difficulty: Difficulty,
    ai_side: Side,
    easy_random_probability: f64,
    scores: ScoreBoard,
    generation: u64,
    rng: ChaCha8Rng,
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl GameSession {
    /// Creates a session with default settings and a fresh random seed.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self::from_config(&EngineConfig::default().with_mode(mode).with_difficulty(difficulty))
    }

    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        info!(mode = %config.mode(), difficulty = %config.difficulty(), ai_side = %config.ai_side(), "Creating game session");
        Self {
            board: Board::new(),
            to_move: Side::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            mode: *config.mode(),
            difficulty: *config.difficulty(),
            ai_side: *config.ai_side(),
            easy_random_probability: *config.easy_random_probability(),
            scores: ScoreBoard::default(),
            generation: 0,
            rng,
            subscribers: Vec::new(),
        }
    }

    /// Reseeds the AI's random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Sets which side the AI plays. Clears the board.
    #[instrument(skip(self))]
    pub fn set_ai_side(&mut self, side: Side) {
        self.ai_side = side;
        self.reset_board();
    }

    /// Registers a listener for [`GameEvent`]s.
    ///
    /// Dropped receivers are pruned on the next event.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Starts a fresh board with the given configuration. Scores are kept.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.mode = mode;
        self.difficulty = difficulty;
        self.reset_board();
    }

    /// Places the side-to-move's mark at `index` on behalf of a human.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without changing anything when the game is
    /// over, it is the AI's turn, or the square is out of range or taken.
    #[instrument(skip(self), fields(generation = self.generation, to_move = %self.to_move))]
    pub fn submit_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.is_ai_turn() {
            warn!(index, "Human tried to move on the AI's turn");
            return Err(MoveError::NotYourTurn(self.to_move));
        }
        self.apply(index)
            .inspect_err(|e| warn!(index, error = %e, "Invalid move"))
    }

    /// Ticket for the AI's next move, if the AI is to move on an active board.
    pub fn pending_ai_move(&self) -> Option<AiTicket> {
        self.is_ai_turn().then_some(AiTicket {
            generation: self.generation,
            ply: self.history.len(),
            side: self.ai_side,
        })
    }

    /// Computes and applies the AI's move for `ticket`.
    ///
    /// Returns `None` without touching the board when the ticket is stale:
    /// the board was reset, the mode changed, or another move was played
    /// after it was issued.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn play_ai_move(&mut self, ticket: AiTicket) -> Option<Move> {
        if self.pending_ai_move() != Some(ticket) {
            debug!(ticket_generation = ticket.generation, ticket_ply = ticket.ply, "Dropping stale AI move");
            return None;
        }

        let generator = MoveGenerator::new(self.difficulty)
            .with_easy_random_probability(self.easy_random_probability);
        let position = generator.choose_move(&self.board, ticket.side, ticket.side.opponent(), &mut self.rng)?;

        match self.apply(position.to_index()) {
            Ok(_) => self.history.last().copied(),
            Err(e) => {
                warn!(error = %e, ?position, "AI produced an invalid move");
                None
            }
        }
    }

    /// Plays the AI's move right away if one is pending.
    pub fn play_pending_ai_move(&mut self) -> Option<Move> {
        let ticket = self.pending_ai_move()?;
        self.play_ai_move(ticket)
    }

    /// Clears the board and gives X the move. Scores are kept.
    ///
    /// Any AI move scheduled against the old board is invalidated.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.generation += 1;
        self.board = Board::new();
        self.to_move = Side::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        info!(generation = self.generation, "Board reset");
        self.emit(GameEvent::BoardReset);
    }

    /// Clears the board and zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.scores = ScoreBoard::default();
        self.emit(GameEvent::ScoreChanged(self.scores));
        self.reset_board();
    }

    /// Switches mode. This also starts a new game, clearing the scores.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(from = %self.mode, to = %mode, "Changing game mode");
        self.mode = mode;
        self.new_game();
    }

    /// Changes AI strength. Takes effect from the AI's next move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Changing difficulty");
        self.difficulty = difficulty;
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Current board snapshot.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Scoreboard.
    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// False once the current game has ended.
    pub fn is_active(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Side the AI plays in vs-AI mode.
    pub fn ai_side(&self) -> Side {
        self.ai_side
    }

    /// Moves played on the current board.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Board generation; changes on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// One-line status for display.
    pub fn status_message(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Player {}'s turn", self.to_move),
            Outcome::Win { side, .. } if self.mode == GameMode::VsAi && side == self.ai_side => {
                "AI wins!".to_string()
            }
            Outcome::Win { side, .. } => format!("Player {} wins!", side),
            Outcome::Draw => "It's a tie!".to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && self.is_active() && self.to_move == self.ai_side
    }

    /// Shared apply/evaluate/score path for human and AI moves.
    fn apply(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        let side = self.to_move;
        let board = apply_move(&self.board, index, side)?;
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        self.board = board;
        self.history.push(Move::new(side, position));
        self.emit(GameEvent::CellUpdated { index, side });

        self.outcome = evaluate(&self.board);
        if self.outcome.is_terminal() {
            self.scores.record(&self.outcome);
            info!(outcome = %self.outcome, scores = %self.scores, "Game over");
            self.emit(GameEvent::GameOver(self.outcome));
            self.emit(GameEvent::ScoreChanged(self.scores));
        } else {
            self.to_move = side.opponent();
            debug!(to_move = %self.to_move, "Turn passed");
        }
        Ok(self.outcome)
    }

    fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vs_ai(difficulty: Difficulty) -> GameSession {
        GameSession::new(GameMode::VsAi, difficulty).with_seed(1)
    }

    #[test]
    fn test_scoreboard_saturates() {
        let mut scores = ScoreBoard {
            x_wins: u32::MAX,
            o_wins: 0,
            ties: u32::MAX - 1,
        };
        scores.record(&Outcome::Draw);
        scores.record(&Outcome::Draw);
        assert_eq!(scores.ties(), u32::MAX);
        assert_eq!(scores.games(), u32::MAX);
    }

    #[test]
    fn test_submit_flips_turn() {
        let mut session = GameSession::default();
        assert_eq!(session.submit_move(4), Ok(Outcome::InProgress));
        assert_eq!(session.to_move(), Side::O);
        assert_eq!(session.history(), &[Move::new(Side::X, Position::Center)]);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut session = GameSession::default();
        session.submit_move(4).unwrap();
        let before = session.board();
        assert_eq!(session.submit_move(4), Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(session.submit_move(12), Err(MoveError::OutOfRange(12)));
        assert_eq!(session.board(), before);
        assert_eq!(session.to_move(), Side::O);
    }

    #[test]
    fn test_human_cannot_move_for_ai() {
        let mut session = vs_ai(Difficulty::Medium);
        session.submit_move(0).unwrap();
        assert_eq!(session.submit_move(1), Err(MoveError::NotYourTurn(Side::O)));
        assert!(session.pending_ai_move().is_some());
    }

    #[test]
    fn test_ai_reply_uses_ticket() {
        let mut session = vs_ai(Difficulty::Medium);
        session.submit_move(0).unwrap();
        let reply = session.play_pending_ai_move().unwrap();
        assert_eq!(reply, Move::new(Side::O, Position::Center));
        assert_eq!(session.to_move(), Side::X);
        assert!(session.pending_ai_move().is_none());
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut session = vs_ai(Difficulty::Hard);
        session.submit_move(4).unwrap();
        let ticket = session.pending_ai_move().unwrap();
        session.reset_board();
        assert_eq!(session.play_ai_move(ticket), None);
        assert_eq!(session.board(), Board::new());
    }

    #[test]
    fn test_ticket_is_single_use() {
        let mut session = vs_ai(Difficulty::Medium);
        session.submit_move(0).unwrap();
        let ticket = session.pending_ai_move().unwrap();
        assert!(session.play_ai_move(ticket).is_some());
        session.submit_move(8).unwrap();
        assert_eq!(session.play_ai_move(ticket), None);
        assert_eq!(session.to_move(), Side::O);
    }

    #[test]
    fn test_two_player_has_no_ai_turn() {
        let mut session = GameSession::default();
        session.submit_move(0).unwrap();
        assert!(session.pending_ai_move().is_none());
        assert!(session.submit_move(1).is_ok());
    }

    #[test]
    fn test_ai_opens_when_playing_x() {
        let mut session = vs_ai(Difficulty::Hard);
        session.set_ai_side(Side::X);
        assert_eq!(session.submit_move(4), Err(MoveError::NotYourTurn(Side::X)));
        let opening = session.play_pending_ai_move().unwrap();
        assert_eq!(opening.side, Side::X);
        assert_eq!(session.to_move(), Side::O);
    }

    #[test]
    fn test_status_messages() {
        let mut session = vs_ai(Difficulty::Hard);
        assert_eq!(session.status_message(), "Player X's turn");
        // AI takes the center, blocks at 2, then X ignores the 2-4-6 threat.
        for index in [0, 1, 5] {
            session.submit_move(index).unwrap();
            session.play_pending_ai_move().unwrap();
        }
        assert_eq!(session.status_message(), "AI wins!");

        let mut pvp = GameSession::default();
        for index in [0, 3, 1, 4, 2] {
            pvp.submit_move(index).unwrap();
        }
        assert_eq!(pvp.status_message(), "Player X wins!");
    }

    #[test]
    fn test_events_are_emitted() {
        let mut session = GameSession::default();
        let mut events = session.subscribe();
        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).unwrap();
        }
        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(seen.len(), 7);
        assert_eq!(seen[0], GameEvent::CellUpdated { index: 0, side: Side::X });
        assert!(matches!(seen[5], GameEvent::GameOver(Outcome::Win { side: Side::X, .. })));
        assert_eq!(seen[6], GameEvent::ScoreChanged(session.scores()));
    }
}
