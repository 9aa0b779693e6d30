//! Headless auto-player.
//!
//! Plays one fight through the runtime: attacks while the fight is active,
//! rolls death saves while the hero is down, then settles. Attack candidates
//! are tried in order and the first one the engine accepts is used; a
//! rejected command leaves the session untouched, so probing is free.

use encounter_core::{AttackCommand, CombatPhase, EquipSlot, GameError, MoveDirection, RngOracle};
use encounter_runtime::{
    CombatOutcome, CombatRequest, CombatRuntime, RuntimeError, SessionHandle, SessionSnapshot,
};
use tracing::{debug, info, warn};

/// How a simulated fight ended.
#[derive(Debug)]
pub enum FightReport {
    /// Reached a terminal phase and was settled.
    Settled {
        outcome: CombatOutcome,
        log: Vec<String>,
    },
    /// Still running when the simulator stopped driving it.
    Abandoned {
        reason: String,
        snapshot: Box<SessionSnapshot>,
    },
}

pub struct Autoplayer {
    runtime: CombatRuntime,
    max_commands: u32,
}

impl Autoplayer {
    pub fn new(runtime: CombatRuntime, max_commands: u32) -> Self {
        Self {
            runtime,
            max_commands,
        }
    }

    /// Opens a fight with an entropy-seeded generator and plays it out.
    pub async fn play(&self, request: CombatRequest) -> anyhow::Result<FightReport> {
        let handle = self.runtime.start_combat(request).await?;
        self.drive(handle).await
    }

    /// Same as [`play`](Self::play) with an explicit random source.
    pub async fn play_with_rng(
        &self,
        request: CombatRequest,
        rng: Box<dyn RngOracle>,
    ) -> anyhow::Result<FightReport> {
        let handle = self.runtime.start_combat_with_rng(request, rng).await?;
        self.drive(handle).await
    }

    async fn drive(&self, handle: SessionHandle) -> anyhow::Result<FightReport> {
        for _ in 0..self.max_commands {
            let snapshot = handle.snapshot().await?;
            match snapshot.session.phase() {
                CombatPhase::Active => {
                    if !self.take_turn(&handle, snapshot.session.range()).await? {
                        return Ok(FightReport::Abandoned {
                            reason: "no legal attack at this range".to_string(),
                            snapshot: Box::new(handle.snapshot().await?),
                        });
                    }
                }
                CombatPhase::DeathSaves => {
                    handle.death_save().await?;
                }
                CombatPhase::Victory | CombatPhase::Defeat | CombatPhase::Loot => {
                    let outcome = self.runtime.end_combat(handle.id()).await?;
                    info!(
                        session = %handle.id(),
                        outcome = %outcome.summary.outcome,
                        "fight settled"
                    );
                    return Ok(FightReport::Settled {
                        outcome,
                        log: snapshot.session.log,
                    });
                }
            }
        }

        warn!(session = %handle.id(), limit = self.max_commands, "command limit reached");
        Ok(FightReport::Abandoned {
            reason: format!("no result after {} commands", self.max_commands),
            snapshot: Box::new(handle.snapshot().await?),
        })
    }

    /// One player turn: a main attack, then an off-hand follow-up if the
    /// fight is still on. Returns false when no main attack was accepted.
    async fn take_turn(&self, handle: &SessionHandle, range: u32) -> anyhow::Result<bool> {
        let main = AttackCommand::main(EquipSlot::MainHand);
        let candidates = [
            main.clone(),
            main.clone().moving(MoveDirection::Toward),
            main.clone().thrown(),
            main.moving(MoveDirection::Toward).thrown(),
        ];
        if !try_commands(handle, &candidates).await? {
            return Ok(false);
        }

        if handle.snapshot().await?.session.phase() == CombatPhase::Active {
            let off_hand = [AttackCommand::off_hand(), AttackCommand::off_hand().thrown()];
            try_commands(handle, &off_hand).await?;
        }
        debug!(session = %handle.id(), range, "turn done");
        Ok(true)
    }
}

/// Sends each command until one is accepted. Retryable rejections move on to
/// the next candidate; anything else is returned.
async fn try_commands(handle: &SessionHandle, commands: &[AttackCommand]) -> anyhow::Result<bool> {
    for command in commands {
        match handle.attack(command.clone()).await {
            Ok(_) => return Ok(true),
            Err(RuntimeError::Combat(error)) if error.severity().is_retryable() => {
                debug!(?command, %error, "command rejected");
            }
            Err(error) => return Err(error.into()),
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::default_hero;
    use encounter_content::ContentFactory;
    use encounter_core::ScriptedRng;

    fn autoplayer() -> Autoplayer {
        let content = ContentFactory::bundled().load_all().unwrap();
        let runtime = CombatRuntime::builder().content(content).build().unwrap();
        Autoplayer::new(runtime, 50)
    }

    #[tokio::test]
    async fn plays_a_goblin_to_the_loot_phase() {
        // goblin HP 1+1, range 0, initiative 15 vs 5, natural 20, handaxe 6+6
        let rng = ScriptedRng::new([1, 1, 0, 15, 5, 20, 6, 6]);
        let request = CombatRequest::new("t1", "goblin", "dungeon", default_hero());

        let report = autoplayer()
            .play_with_rng(request, Box::new(rng))
            .await
            .unwrap();
        let outcome = match report {
            FightReport::Settled { outcome, log } => {
                assert!(log.iter().any(|line| line == "Goblin is slain!"));
                outcome
            }
            other => panic!("fight was not settled: {other:?}"),
        };
        assert_eq!(outcome.summary.outcome, CombatPhase::Loot);
        assert_eq!(outcome.player.experience, outcome.summary.xp_earned);
        // melee kill, nothing thrown
        assert!(outcome.summary.ammo_used.is_empty());
    }

    #[tokio::test]
    async fn endless_misses_hit_the_command_limit() {
        let request = CombatRequest::new("t2", "goblin", "dungeon", default_hero());
        let report = autoplayer()
            .play_with_rng(request, Box::new(ScriptedRng::default()))
            .await
            .unwrap();
        let snapshot = match report {
            FightReport::Abandoned { snapshot, .. } => snapshot,
            other => panic!("expected an abandoned fight: {other:?}"),
        };
        assert_eq!(snapshot.session.phase(), CombatPhase::Active);
    }
}
