//! Encounter simulator binary.
//!
//! Plays a series of fights against one monster kind and prints each log and
//! settlement. The hero rests to full HP between fights and carries
//! experience and spent throwing weapons forward.
//!
//! ```bash
//! SIM_MONSTER=orc SIM_ENVIRONMENT=plains SIM_FIGHTS=3 cargo run -p encounter-sim
//! RUST_LOG=encounter_core=debug cargo run -p encounter-sim
//! ```

use anyhow::{Context, Result};
use encounter_content::ContentFactory;
use encounter_core::CombatPhase;
use encounter_runtime::{CombatRequest, CombatRuntime, RuntimeConfig};
use encounter_sim::{Autoplayer, FightReport, SimConfig, party};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime_config = RuntimeConfig::from_env();
    let sim = SimConfig::from_env();

    let factory = match &runtime_config.content_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    let content = factory
        .load_all()
        .with_context(|| format!("loading content from {}", factory.data_dir().display()))?;

    let runtime = CombatRuntime::builder()
        .config(runtime_config)
        .content(content)
        .build()?;
    tracing::info!(
        monster = %sim.monster,
        environment = %sim.environment,
        fights = sim.fights,
        "simulator ready"
    );

    let autoplayer = Autoplayer::new(runtime.clone(), sim.max_commands);
    let mut hero = party::default_hero();

    for fight in 1..=sim.fights {
        let request = CombatRequest::new(
            format!("fight-{fight}"),
            sim.monster.clone(),
            sim.environment.clone(),
            hero.clone(),
        );
        let report = autoplayer.play(request).await?;

        match report {
            FightReport::Settled { outcome, log } => {
                if sim.json {
                    println!("{}", serde_json::to_string(&outcome.summary)?);
                } else {
                    println!("== Fight {fight} ==");
                    for line in &log {
                        println!("  {line}");
                    }
                    println!(
                        "{} ({} XP, {} drops, level up: {})",
                        outcome.summary.outcome,
                        outcome.summary.xp_earned,
                        outcome.summary.loot.len(),
                        outcome.summary.level_up
                    );
                }
                hero = outcome.player;
                if outcome.summary.outcome == CombatPhase::Defeat {
                    println!("{} has fallen after {fight} fight(s).", hero.name);
                    break;
                }
                party::rest(&mut hero);
            }
            FightReport::Abandoned { reason, snapshot } => {
                println!("== Fight {fight} abandoned: {reason} ==");
                for line in snapshot.session.log() {
                    println!("  {line}");
                }
                break;
            }
        }
    }

    println!("{} finishes with {} XP.", hero.name, hero.experience);
    runtime.shutdown().await;
    Ok(())
}
