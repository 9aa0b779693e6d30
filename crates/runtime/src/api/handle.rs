//! Cloneable façade for issuing commands to one session worker.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for each
//! combat command. Commands from any number of clones are queued on the same
//! channel and processed in arrival order.
use tokio::sync::{mpsc, oneshot};

use encounter_core::{AttackCommand, CombatSession, CombatSummary, PlayerCharacter};

use super::errors::{Result, RuntimeError};
use crate::workers::Command;

/// Point-in-time copy of a session and its player record.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SessionSnapshot {
    pub session: CombatSession,
    pub player: PlayerCharacter,
}

/// Result of settling a fight.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CombatOutcome {
    pub summary: CombatSummary,
    /// Player record with HP, experience and spent stacks written back.
    pub player: PlayerCharacter,
}

/// Client-facing handle to a live combat session.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    id: String,
    command_tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    pub(crate) fn new(id: String, command_tx: mpsc::Sender<Command>) -> Self {
        Self { id, command_tx }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the worker behind this handle has stopped.
    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }

    /// Player attack; returns the log lines it produced.
    pub async fn attack(&self, command: AttackCommand) -> Result<Vec<String>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Attack {
            command,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Death saving throw for an unconscious player.
    pub async fn death_save(&self) -> Result<Vec<String>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::DeathSave { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current session state (read-only copy).
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Settles the fight. The worker stops once this succeeds.
    pub async fn end_combat(&self) -> Result<CombatOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::End { reply: reply_tx }).await?;
        let (summary, player) = reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)??;
        Ok(CombatOutcome { summary, player })
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
