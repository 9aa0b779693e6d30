//! Session worker that owns one authoritative [`CombatSession`].
//!
//! Receives commands from [`SessionHandle`](crate::api::SessionHandle), runs
//! them through [`CombatEngine`] and replies over oneshot channels. The worker
//! exits once the fight is settled or every handle is dropped.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use encounter_core::{
    AttackCommand, CombatEngine, CombatSession, CombatSummary, PlayerCharacter, RngOracle,
};

use crate::api::{Result, SessionSnapshot};
use crate::oracle::OracleManager;

/// Commands that can be sent to a session worker.
pub enum Command {
    Attack {
        command: AttackCommand,
        reply: oneshot::Sender<Result<Vec<String>>>,
    },
    DeathSave {
        reply: oneshot::Sender<Result<Vec<String>>>,
    },
    /// Read-only copy of the session and player record.
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Settle the fight. On success the worker stops after replying.
    End {
        reply: oneshot::Sender<Result<(CombatSummary, PlayerCharacter)>>,
    },
}

/// Background task that serializes every command for one session.
pub struct SessionWorker {
    id: String,
    session: CombatSession,
    player: PlayerCharacter,
    rng: Box<dyn RngOracle>,
    oracles: OracleManager,
    command_rx: mpsc::Receiver<Command>,
}

impl SessionWorker {
    pub fn new(
        id: String,
        session: CombatSession,
        player: PlayerCharacter,
        rng: Box<dyn RngOracle>,
        oracles: OracleManager,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            id,
            session,
            player,
            rng,
            oracles,
            command_rx,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if self.handle_command(cmd) {
                break;
            }
        }
        info!(session = %self.id, phase = %self.session.phase(), "session worker stopped");
    }

    /// Returns true when the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Attack { command, reply } => {
                let env = self.oracles.as_combat_env();
                let result = CombatEngine::new(&mut self.session)
                    .player_attack(env, self.rng.as_mut(), &mut self.player, &command)
                    .map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!(session = %self.id, "Attack reply channel closed (caller dropped)");
                }
                false
            }
            Command::DeathSave { reply } => {
                let env = self.oracles.as_combat_env();
                let result = CombatEngine::new(&mut self.session)
                    .death_save(env, self.rng.as_mut(), &mut self.player)
                    .map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!(session = %self.id, "DeathSave reply channel closed (caller dropped)");
                }
                false
            }
            Command::Snapshot { reply } => {
                let snapshot = SessionSnapshot {
                    session: self.session.clone(),
                    player: self.player.clone(),
                };
                if reply.send(snapshot).is_err() {
                    debug!(session = %self.id, "Snapshot reply channel closed (caller dropped)");
                }
                false
            }
            Command::End { reply } => {
                let result = CombatEngine::new(&mut self.session).end_combat(&mut self.player);
                let settled = result.is_ok();
                let result = result
                    .map(|summary| (summary, self.player.clone()))
                    .map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!(session = %self.id, "End reply channel closed (caller dropped)");
                }
                settled
            }
        }
    }
}
