use crate::config::CombatConfig;

/// Oracle providing rule tables.
///
/// The advancement table is precomputed content; the engine only reads it to
/// derive the player's level, the per-level XP multiplier and level-up
/// thresholds. Tunable combat parameters come from the same oracle.
pub trait TablesOracle: Send + Sync {
    fn advancement(&self) -> &AdvancementTable;
    fn combat(&self) -> &CombatConfig;
}

/// One row of the advancement table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancementLevel {
    pub level: u32,
    /// Total experience required to reach this level.
    pub experience: u32,
    /// Scales XP awarded per point of damage dealt at this level.
    #[cfg_attr(feature = "serde", serde(default = "AdvancementLevel::default_multiplier"))]
    pub xp_multiplier: f64,
}

impl AdvancementLevel {
    pub const fn new(level: u32, experience: u32, xp_multiplier: f64) -> Self {
        Self {
            level,
            experience,
            xp_multiplier,
        }
    }

    #[cfg(feature = "serde")]
    fn default_multiplier() -> f64 {
        1.0
    }
}

/// Ordered experience thresholds, lowest level first.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancementTable {
    pub levels: Vec<AdvancementLevel>,
}

impl AdvancementTable {
    /// Builds a table, sorting rows by experience threshold.
    pub fn new(mut levels: Vec<AdvancementLevel>) -> Self {
        levels.sort_by_key(|row| row.experience);
        Self { levels }
    }

    /// Highest level whose threshold `experience` meets. Never below 1.
    pub fn level_for(&self, experience: u32) -> u32 {
        self.levels
            .iter()
            .take_while(|row| row.experience <= experience)
            .map(|row| row.level)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Threshold of the first level above `experience`, if any.
    pub fn next_threshold(&self, experience: u32) -> Option<u32> {
        self.levels
            .iter()
            .map(|row| row.experience)
            .find(|threshold| *threshold > experience)
    }

    /// XP multiplier at `level`; 1.0 when the table has no row for it.
    pub fn xp_multiplier(&self, level: u32) -> f64 {
        self.levels
            .iter()
            .find(|row| row.level == level)
            .map_or(1.0, |row| row.xp_multiplier)
    }

    /// True when moving from `before` to `after` experience crosses a threshold.
    pub fn crosses_threshold(&self, before: u32, after: u32) -> bool {
        self.next_threshold(before)
            .is_some_and(|threshold| after >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AdvancementTable {
        AdvancementTable::new(vec![
            AdvancementLevel::new(2, 300, 1.0),
            AdvancementLevel::new(1, 0, 1.0),
            AdvancementLevel::new(3, 900, 1.5),
        ])
    }

    #[test]
    fn level_follows_thresholds() {
        let table = table();
        assert_eq!(table.level_for(0), 1);
        assert_eq!(table.level_for(299), 1);
        assert_eq!(table.level_for(300), 2);
        assert_eq!(table.level_for(5000), 3);
        assert_eq!(AdvancementTable::default().level_for(5000), 1);
    }

    #[test]
    fn threshold_crossing() {
        let table = table();
        assert_eq!(table.next_threshold(0), Some(300));
        assert!(table.crosses_threshold(250, 300));
        assert!(!table.crosses_threshold(250, 299));
        assert!(!table.crosses_threshold(900, 10_000));
    }

    #[test]
    fn multiplier_defaults_to_one() {
        let table = table();
        assert_eq!(table.xp_multiplier(3), 1.5);
        assert_eq!(table.xp_multiplier(12), 1.0);
    }
}
