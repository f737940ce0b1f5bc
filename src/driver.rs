//! Delayed AI replies on the tokio runtime.
//!
//! The pause only exists so a human sees the turns one after another.
//! The reply itself goes through [`GameSession::play_ai_move`], which drops
//! it if the board was reset while the task slept.

use crate::session::{AiTicket, GameSession};
use crate::games::tictactoe::Move;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Session shared between an input loop and scheduled AI tasks.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Spawns AI replies after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct AiScheduler {
    delay: Duration,
}

impl AiScheduler {
    /// Creates a scheduler with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the AI's move for `ticket`.
    ///
    /// The task resolves to the move played, or `None` if the ticket went
    /// stale in the meantime.
    #[instrument(skip(self, session))]
    pub fn schedule(&self, session: SharedSession, ticket: AiTicket) -> JoinHandle<Option<Move>> {
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let played = session.lock().await.play_ai_move(ticket);
            debug!(?played, generation = ticket.generation(), "Scheduled AI move finished");
            played
        })
    }

    /// Schedules the AI's move if the session is waiting on one.
    pub async fn schedule_pending(&self, session: &SharedSession) -> Option<JoinHandle<Option<Move>>> {
        let ticket = session.lock().await.pending_ai_move()?;
        Some(self.schedule(Arc::clone(session), ticket))
    }
}

impl Default for AiScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}
