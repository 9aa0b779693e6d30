//! High-level runtime orchestrator.
//!
//! [`CombatRuntime`] keeps a registry of live sessions, spawns one
//! [`SessionWorker`] per fight and routes commands to it by session ID.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use encounter_content::ContentSet;
use encounter_core::{AttackCommand, CombatEngine, EntropyRng, PlayerCharacter, RngOracle};

use crate::api::{CombatOutcome, Result, RuntimeError, SessionHandle, SessionSnapshot};
use crate::oracle::OracleManager;
use crate::workers::SessionWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Queued commands per session before senders wait.
    pub command_buffer_size: usize,
    /// Live sessions allowed at once.
    pub max_sessions: usize,
    /// Content directory; `None` means the data bundled with `encounter-content`.
    pub content_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            max_sessions: 64,
            content_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `ENCOUNTER_COMMAND_BUFFER` - per-session command queue (default: 32)
    /// - `ENCOUNTER_MAX_SESSIONS` - concurrent session limit (default: 64)
    /// - `ENCOUNTER_CONTENT_DIR` - content directory (default: bundled data)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_var::<usize>(&lookup, "ENCOUNTER_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        if let Some(limit) = read_var::<usize>(&lookup, "ENCOUNTER_MAX_SESSIONS") {
            config.max_sessions = limit.max(1);
        }

        config.content_dir = lookup("ENCOUNTER_CONTENT_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

/// Everything needed to open a fight.
#[derive(Debug, Clone)]
pub struct CombatRequest {
    pub session_id: String,
    pub monster_id: String,
    pub environment_id: String,
    pub player: PlayerCharacter,
}

impl CombatRequest {
    pub fn new(
        session_id: impl Into<String>,
        monster_id: impl Into<String>,
        environment_id: impl Into<String>,
        player: PlayerCharacter,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            monster_id: monster_id.into(),
            environment_id: environment_id.into(),
            player,
        }
    }
}

struct SessionEntry {
    handle: SessionHandle,
    task: JoinHandle<()>,
}

/// Registry of live combat sessions.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Clone)]
pub struct CombatRuntime {
    config: RuntimeConfig,
    oracles: OracleManager,
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl CombatRuntime {
    pub fn builder() -> CombatRuntimeBuilder {
        CombatRuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Opens a fight with an entropy-seeded generator.
    pub async fn start_combat(&self, request: CombatRequest) -> Result<SessionHandle> {
        self.start_combat_with_rng(request, Box::new(EntropyRng::new()))
            .await
    }

    /// Opens a fight whose worker draws from `rng`.
    ///
    /// The opening (monster HP, range, initiative and a monster-first turn)
    /// is resolved before the worker is spawned.
    pub async fn start_combat_with_rng(
        &self,
        request: CombatRequest,
        mut rng: Box<dyn RngOracle>,
    ) -> Result<SessionHandle> {
        let CombatRequest {
            session_id,
            monster_id,
            environment_id,
            mut player,
        } = request;

        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(&session_id) {
            return Err(RuntimeError::DuplicateSession(session_id));
        }
        if sessions.len() >= self.config.max_sessions {
            return Err(RuntimeError::SessionLimit {
                limit: self.config.max_sessions,
            });
        }

        let session = CombatEngine::start(
            self.oracles.as_combat_env(),
            rng.as_mut(),
            &monster_id,
            &environment_id,
            &mut player,
        )?;

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);
        let worker = SessionWorker::new(
            session_id.clone(),
            session,
            player,
            rng,
            self.oracles.clone(),
            command_rx,
        );
        let task = tokio::spawn(worker.run());
        let handle = SessionHandle::new(session_id.clone(), command_tx);

        sessions.insert(
            session_id.clone(),
            SessionEntry {
                handle: handle.clone(),
                task,
            },
        );
        info!(
            session = %session_id,
            monster = %monster_id,
            live = sessions.len(),
            "session registered"
        );
        Ok(handle)
    }

    /// Handle of a live session.
    pub async fn session(&self, session_id: &str) -> Result<SessionHandle> {
        self.sessions
            .lock()
            .await
            .get(session_id)
            .map(|entry| entry.handle.clone())
            .ok_or_else(|| RuntimeError::UnknownSession(session_id.to_string()))
    }

    pub async fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.sessions.lock().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn attack(&self, session_id: &str, command: AttackCommand) -> Result<Vec<String>> {
        self.session(session_id).await?.attack(command).await
    }

    pub async fn death_save(&self, session_id: &str) -> Result<Vec<String>> {
        self.session(session_id).await?.death_save().await
    }

    pub async fn snapshot(&self, session_id: &str) -> Result<SessionSnapshot> {
        self.session(session_id).await?.snapshot().await
    }

    /// Settles a finished fight and drops it from the registry.
    ///
    /// A fight that is still running stays registered and the engine's
    /// `CombatNotFinished` error is returned.
    pub async fn end_combat(&self, session_id: &str) -> Result<CombatOutcome> {
        let handle = self.session(session_id).await?;
        let outcome = handle.end_combat().await?;

        let entry = self.sessions.lock().await.remove(session_id);
        if let Some(entry) = entry {
            drop(entry.handle);
            if let Err(error) = entry.task.await {
                warn!(session = %session_id, %error, "session worker did not exit cleanly");
            }
        }
        info!(
            session = %session_id,
            outcome = %outcome.summary.outcome,
            xp = outcome.summary.xp_earned,
            "session closed"
        );
        Ok(outcome)
    }

    /// Drops every session and waits for the workers to exit.
    pub async fn shutdown(self) {
        let entries: Vec<_> = self.sessions.lock().await.drain().collect();
        for (id, entry) in entries {
            drop(entry.handle);
            if let Err(error) = entry.task.await {
                warn!(session = %id, %error, "session worker did not exit cleanly");
            }
        }
    }
}

impl std::fmt::Debug for CombatRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatRuntime")
            .field("config", &self.config)
            .field("oracles", &self.oracles)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CombatRuntime`].
#[derive(Default)]
pub struct CombatRuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
}

impl CombatRuntimeBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Build oracles from a validated content set.
    pub fn content(self, content: ContentSet) -> Self {
        self.oracles(OracleManager::from_content(content))
    }

    pub fn build(self) -> Result<CombatRuntime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        Ok(CombatRuntime {
            config: self.config,
            oracles,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_reads_encounter_variables() {
        let config = RuntimeConfig::from_vars(|key| match key {
            "ENCOUNTER_COMMAND_BUFFER" => Some("0".into()),
            "ENCOUNTER_MAX_SESSIONS" => Some("8".into()),
            "ENCOUNTER_CONTENT_DIR" => Some("/srv/content".into()),
            _ => None,
        });
        assert_eq!(config.command_buffer_size, 1);
        assert_eq!(config.max_sessions, 8);
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = RuntimeConfig::from_vars(|key| {
            (key == "ENCOUNTER_MAX_SESSIONS").then(|| "lots".to_string())
        });
        assert_eq!(config.max_sessions, RuntimeConfig::default().max_sessions);
        assert_eq!(config.content_dir, None);
    }

    #[test]
    fn build_requires_oracles() {
        assert!(matches!(
            CombatRuntime::builder().build(),
            Err(RuntimeError::MissingOracles)
        ));
    }
}
