mod common;

use common::{content, fighter};
use encounter_core::{
    CombatEngine, CombatError, CombatPhase, CombatSession, Equipment, PlayerCharacter, ScriptedRng,
};

/// Starts a fight at range 0 in which the monster's opening attack drops a
/// 1 HP fighter.
fn downed_by(
    content: &common::Content,
    monster: &str,
) -> (CombatSession, PlayerCharacter, ScriptedRng) {
    let mut player = fighter(Equipment::empty()).with_hp(1);
    let mut rng = ScriptedRng::new([0, 2, 18, 15, 3]);
    let session =
        CombatEngine::start(content.env(), &mut rng, monster, "dungeon", &mut player).unwrap();
    assert_eq!(session.phase(), CombatPhase::DeathSaves);
    (session, player, rng)
}

#[test]
fn three_successes_stabilize_into_victory() {
    let content = content();
    let (mut session, mut player, mut rng) = downed_by(&content, "slinger");
    // each save is followed by the sling's advantage attack: two natural 1s
    rng.extend([10, 1, 1, 19, 1, 1, 15]);

    let mut engine = CombatEngine::new(&mut session);
    for _ in 0..3 {
        engine.death_save(content.env(), &mut rng, &mut player).unwrap();
    }

    let session = engine.session();
    assert_eq!(session.phase(), CombatPhase::Victory);
    assert!(session.party.is_stable);
    assert_eq!(session.party.death_save_successes, 3);
    assert_eq!(session.party.death_save_failures, 0);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn three_failures_end_in_defeat() {
    let content = content();
    let (mut session, mut player, mut rng) = downed_by(&content, "slinger");
    rng.extend([2, 1, 1, 9, 1, 1, 5]);

    let mut engine = CombatEngine::new(&mut session);
    for _ in 0..3 {
        engine.death_save(content.env(), &mut rng, &mut player).unwrap();
    }
    assert_eq!(engine.session().phase(), CombatPhase::Defeat);
    assert_eq!(engine.session().party.death_save_failures, 3);

    let summary = engine.end_combat(&mut player).unwrap();
    assert_eq!(summary.outcome, CombatPhase::Defeat);
    assert_eq!(summary.xp_earned, 0);
    assert_eq!(player.experience, 0);
}

#[test]
fn natural_one_counts_twice() {
    let content = content();
    let (mut session, mut player, mut rng) = downed_by(&content, "slinger");
    rng.extend([1, 1, 1]);

    let lines = CombatEngine::new(&mut session)
        .death_save(content.env(), &mut rng, &mut player)
        .unwrap();
    assert_eq!(session.party.death_save_failures, 2);
    assert_eq!(session.phase(), CombatPhase::DeathSaves);
    assert!(lines[0].contains("natural 1"));
}

#[test]
fn natural_one_then_a_failure_is_fatal() {
    let content = content();
    let (mut session, mut player, mut rng) = downed_by(&content, "slinger");
    // natural 1, sling misses twice, then a plain failure
    rng.extend([1, 1, 1, 5]);

    let mut engine = CombatEngine::new(&mut session);
    engine.death_save(content.env(), &mut rng, &mut player).unwrap();
    assert_eq!(engine.session().phase(), CombatPhase::DeathSaves);
    engine.death_save(content.env(), &mut rng, &mut player).unwrap();

    assert_eq!(engine.session().phase(), CombatPhase::Defeat);
    assert_eq!(engine.session().party.death_save_failures, 3);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn natural_twenty_revives_at_one_hp() {
    let content = content();
    let (mut session, mut player, mut rng) = downed_by(&content, "goblin");
    rng.extend([20]);

    CombatEngine::new(&mut session)
        .death_save(content.env(), &mut rng, &mut player)
        .unwrap();
    assert_eq!(session.phase(), CombatPhase::Active);
    assert_eq!(session.party.hp, 1);
    assert_eq!(player.hp, 1);
    assert!(!session.party.is_unconscious);
    assert_eq!(session.party.death_save_failures, 0);
}

#[test]
fn melee_hit_on_downed_player_is_two_failures() {
    let content = content();
    let (mut session, mut player, mut rng) = downed_by(&content, "goblin");
    // save succeeds, goblin hits with advantage at range 0
    rng.extend([12, 15, 8]);

    CombatEngine::new(&mut session)
        .death_save(content.env(), &mut rng, &mut player)
        .unwrap();
    assert_eq!(session.party.death_save_successes, 1);
    assert_eq!(session.party.death_save_failures, 2);
    assert_eq!(player.hp, 0);
}

#[test]
fn melee_at_range_zero_cannot_miss_a_downed_player() {
    let content = content();
    let (mut session, mut player, mut rng) = downed_by(&content, "goblin");
    // save succeeds, both advantage dice would miss AC
    rng.extend([12, 3, 2]);

    let lines = CombatEngine::new(&mut session)
        .death_save(content.env(), &mut rng, &mut player)
        .unwrap();
    assert_eq!(session.party.death_save_successes, 1);
    assert_eq!(session.party.death_save_failures, 2);
    assert_eq!(session.phase(), CombatPhase::DeathSaves);
    assert!(lines.iter().any(|line| line.contains("lands as a critical")));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn death_save_requires_death_saves_phase() {
    let content = content();
    let mut player = fighter(Equipment::empty());
    let mut rng = ScriptedRng::new([0, 15, 5]);
    let mut session =
        CombatEngine::start(content.env(), &mut rng, "goblin", "dungeon", &mut player).unwrap();

    let error = CombatEngine::new(&mut session)
        .death_save(content.env(), &mut rng, &mut player)
        .unwrap_err();
    assert_eq!(
        error,
        CombatError::WrongPhase {
            expected: CombatPhase::DeathSaves,
            actual: CombatPhase::Active,
        }
    );
}
