//! Simulator configuration loaded from the environment.
use std::env;

/// What to fight and how often.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub monster: String,
    pub environment: String,
    pub fights: u32,
    /// Commands per fight before the simulator gives up on it.
    pub max_commands: u32,
    /// Print each settlement as JSON instead of prose.
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            monster: "goblin".to_string(),
            environment: "dungeon".to_string(),
            fights: 1,
            max_commands: 200,
            json: false,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `SIM_MONSTER` (default: goblin)
    /// - `SIM_ENVIRONMENT` (default: dungeon)
    /// - `SIM_FIGHTS` (default: 1)
    /// - `SIM_MAX_COMMANDS` (default: 200)
    /// - `SIM_JSON` (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(monster) = lookup("SIM_MONSTER").filter(|value| !value.is_empty()) {
            config.monster = monster;
        }
        if let Some(environment) = lookup("SIM_ENVIRONMENT").filter(|value| !value.is_empty()) {
            config.environment = environment;
        }
        if let Some(fights) = read_var::<u32>(&lookup, "SIM_FIGHTS") {
            config.fights = fights.max(1);
        }
        if let Some(limit) = read_var::<u32>(&lookup, "SIM_MAX_COMMANDS") {
            config.max_commands = limit.max(1);
        }
        if let Some(json) = read_var::<bool>(&lookup, "SIM_JSON") {
            config.json = json;
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
