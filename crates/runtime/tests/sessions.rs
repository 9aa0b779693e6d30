use encounter_content::ContentFactory;
use encounter_core::{
    AbilityScores, AttackCommand, CharacterClass, CombatError, CombatPhase, EquipSlot, Equipment,
    PlayerCharacter, Race, ScriptedRng,
};
use encounter_runtime::{CombatRequest, CombatRuntime, RuntimeConfig, RuntimeError};

fn runtime(config: RuntimeConfig) -> CombatRuntime {
    let content = ContentFactory::bundled().load_all().unwrap();
    CombatRuntime::builder()
        .config(config)
        .content(content)
        .build()
        .unwrap()
}

fn fighter() -> PlayerCharacter {
    PlayerCharacter::new("Ash", CharacterClass::Fighter, Race::Human, 12)
        .with_abilities(AbilityScores::new(16, 14, 12, 10, 10, 10))
        .with_equipment(
            Equipment::builder()
                .item(EquipSlot::MainHand, "longsword")
                .build(),
        )
}

fn goblin_fight(id: &str) -> CombatRequest {
    CombatRequest::new(id, "goblin", "dungeon", fighter())
}

/// An exhausted script rolls every die at its minimum: both sides miss
/// forever on natural 1s.
fn stalemate() -> Box<ScriptedRng> {
    Box::new(ScriptedRng::default())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_attacks_never_interleave() {
    let runtime = runtime(RuntimeConfig::default());
    runtime
        .start_combat_with_rng(goblin_fight("arena"), stalemate())
        .await
        .unwrap();
    let opening = runtime.snapshot("arena").await.unwrap().session.log.len();

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let runtime = runtime.clone();
        tasks.push(tokio::spawn(async move {
            runtime
                .attack("arena", AttackCommand::main(EquipSlot::MainHand))
                .await
        }));
    }
    let mut chunks = Vec::new();
    for task in tasks {
        chunks.push(task.await.unwrap().unwrap());
    }

    let snapshot = runtime.snapshot("arena").await.unwrap();
    let log = &snapshot.session.log[opening..];
    assert_eq!(snapshot.session.round, 16);
    assert_eq!(log.len(), chunks.iter().map(Vec::len).sum::<usize>());
    for chunk in &chunks {
        assert!(chunk[0].starts_with("Ash attacks Goblin"), "{chunk:?}");
        assert!(
            log.windows(chunk.len()).any(|window| window == chunk.as_slice()),
            "lines of one command were split: {chunk:?}"
        );
    }
}

#[tokio::test]
async fn end_combat_is_rejected_while_active() {
    let runtime = runtime(RuntimeConfig::default());
    runtime
        .start_combat_with_rng(goblin_fight("early"), stalemate())
        .await
        .unwrap();

    let error = runtime.end_combat("early").await.unwrap_err();
    assert!(matches!(
        error,
        RuntimeError::Combat(CombatError::CombatNotFinished(CombatPhase::Active))
    ));
    assert_eq!(runtime.session_ids().await, vec!["early".to_string()]);

    let lines = runtime
        .attack("early", AttackCommand::main(EquipSlot::MainHand))
        .await
        .unwrap();
    assert!(!lines.is_empty());
}

#[tokio::test]
async fn victory_settles_and_closes_the_session() {
    let runtime = runtime(RuntimeConfig::default());
    // goblin HP 1+1, range 0, initiative 15 vs 5, natural 20, crit damage 8+8
    let rng = ScriptedRng::new([1, 1, 0, 15, 5, 20, 8, 8]);
    let handle = runtime
        .start_combat_with_rng(goblin_fight("quick"), Box::new(rng))
        .await
        .unwrap();

    let lines = handle
        .attack(AttackCommand::main(EquipSlot::MainHand))
        .await
        .unwrap();
    assert!(lines.iter().any(|line| line == "Goblin is slain!"));

    let outcome = runtime.end_combat("quick").await.unwrap();
    assert_eq!(outcome.summary.outcome, CombatPhase::Loot);
    assert!(outcome.summary.xp_earned >= 50);
    assert_eq!(outcome.player.experience, outcome.summary.xp_earned);
    assert!(
        outcome
            .summary
            .loot
            .iter()
            .any(|drop| drop.item_id == "silver_coin")
    );

    assert_eq!(runtime.active_sessions().await, 0);
    assert!(handle.is_closed());
    assert!(matches!(
        runtime.snapshot("quick").await,
        Err(RuntimeError::UnknownSession(id)) if id == "quick"
    ));
}

#[tokio::test]
async fn duplicate_ids_and_session_limit_are_rejected() {
    let runtime = runtime(RuntimeConfig {
        max_sessions: 1,
        ..RuntimeConfig::default()
    });
    runtime
        .start_combat_with_rng(goblin_fight("one"), stalemate())
        .await
        .unwrap();

    assert!(matches!(
        runtime
            .start_combat_with_rng(goblin_fight("one"), stalemate())
            .await,
        Err(RuntimeError::DuplicateSession(id)) if id == "one"
    ));
    assert!(matches!(
        runtime
            .start_combat_with_rng(goblin_fight("two"), stalemate())
            .await,
        Err(RuntimeError::SessionLimit { limit: 1 })
    ));
}

#[tokio::test]
async fn unknown_monster_is_a_combat_error() {
    let runtime = runtime(RuntimeConfig::default());
    let error = runtime
        .start_combat(CombatRequest::new("x", "dragon", "dungeon", fighter()))
        .await
        .unwrap_err();
    assert!(matches!(error, RuntimeError::Combat(CombatError::Oracle(_))));
    assert_eq!(runtime.active_sessions().await, 0);
}

#[tokio::test]
async fn snapshot_serializes_to_json() {
    let runtime = runtime(RuntimeConfig::default());
    runtime
        .start_combat_with_rng(goblin_fight("json"), stalemate())
        .await
        .unwrap();
    let snapshot = runtime.snapshot("json").await.unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["session"]["phase"], "active");
    assert_eq!(json["player"]["name"], "Ash");
    runtime.shutdown().await;
}
