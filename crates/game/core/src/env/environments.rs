//! Environment lookup used to pick the opening range of a fight.

use crate::env::RngOracle;

pub trait EnvironmentOracle: Send + Sync {
    fn category(&self, id: &str) -> Option<EnvironmentCategory>;
}

/// Terrain class of an environment.
///
/// Tighter terrain means the fight opens closer to melee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnvironmentCategory {
    /// Indoor or enclosed spaces: dungeons, caves, taverns.
    Enclosed,
    /// Forests and other dense terrain.
    Dense,
    /// Plains, deserts, open water.
    Open,
}

impl EnvironmentCategory {
    /// Inclusive starting range band.
    pub const fn starting_range(&self) -> (u32, u32) {
        match self {
            Self::Enclosed => (0, 1),
            Self::Dense => (1, 2),
            Self::Open => (2, 4),
        }
    }

    pub fn roll_starting_range(&self, rng: &mut dyn RngOracle) -> u32 {
        let (min, max) = self.starting_range();
        rng.roll_range(min as i32, max as i32).max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn starting_ranges_by_category() {
        assert_eq!(EnvironmentCategory::Enclosed.starting_range(), (0, 1));
        assert_eq!(EnvironmentCategory::Dense.starting_range(), (1, 2));
        assert_eq!(EnvironmentCategory::Open.starting_range(), (2, 4));
    }

    #[test]
    fn rolled_range_stays_in_band() {
        let mut rng = ScriptedRng::new([9]);
        assert_eq!(EnvironmentCategory::Open.roll_starting_range(&mut rng), 4);
    }
}
