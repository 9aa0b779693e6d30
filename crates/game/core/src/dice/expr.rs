//! Dice expression parsing and evaluation (`2d6+3`, `d8`, `1d4-1`, `7`).

use core::fmt;
use core::str::FromStr;

use crate::env::RngOracle;

/// Upper bounds accepted for a single expression. Content exceeding these is
/// treated as malformed rather than rolled.
const MAX_DICE: u32 = 100;
const MAX_SIDES: u32 = 1000;

/// Parsed `NdM+K` expression.
///
/// A flat value such as `"7"` parses to zero dice with modifier 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiceExpr {
    pub count: u32,
    pub sides: u32,
    pub modifier: i32,
}

/// Reasons a dice expression failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceParseError {
    #[error("empty dice expression")]
    Empty,

    #[error("invalid dice expression '{0}'")]
    Invalid(String),

    #[error("dice expression '{0}' exceeds supported bounds")]
    OutOfBounds(String),
}

impl DiceExpr {
    pub const fn new(count: u32, sides: u32, modifier: i32) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    /// A flat value with no dice.
    pub const fn flat(value: i32) -> Self {
        Self::new(0, 0, value)
    }

    /// Parses an expression, tolerating surrounding and inner whitespace.
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(DiceParseError::Empty);
        }
        let invalid = || DiceParseError::Invalid(input.to_string());
        let lower = compact.to_ascii_lowercase();

        let Some(d_pos) = lower.find('d') else {
            let value: i32 = lower.parse().map_err(|_| invalid())?;
            return Ok(Self::flat(value));
        };

        let (count_part, rest) = lower.split_at(d_pos);
        let rest = &rest[1..];
        let count = if count_part.is_empty() {
            1
        } else {
            count_part.parse::<u32>().map_err(|_| invalid())?
        };

        let (sides_part, modifier) = match rest.find(['+', '-']) {
            Some(sign_pos) => {
                let (sides, modifier) = rest.split_at(sign_pos);
                let modifier: i32 = modifier.parse().map_err(|_| invalid())?;
                (sides, modifier)
            }
            None => (rest, 0),
        };
        let sides = sides_part.parse::<u32>().map_err(|_| invalid())?;

        if sides == 0 {
            return Err(invalid());
        }
        if count > MAX_DICE || sides > MAX_SIDES {
            return Err(DiceParseError::OutOfBounds(input.to_string()));
        }

        Ok(Self::new(count, sides, modifier))
    }

    /// Number of dice after the critical-hit rule (dice count doubles on a crit).
    pub const fn dice_count(&self, critical: bool) -> u32 {
        if critical { self.count * 2 } else { self.count }
    }

    /// Rolls the expression. Critical hits double the dice, never the modifier.
    pub fn roll(&self, rng: &mut dyn RngOracle, critical: bool) -> i32 {
        let dice: i32 = (0..self.dice_count(critical))
            .map(|_| rng.roll_die(self.sides))
            .sum();
        dice + self.modifier
    }

    /// Average result rounded down (`2d6+1` → 8).
    pub const fn average(&self) -> i32 {
        (self.count as i32 * (self.sides as i32 + 1)) / 2 + self.modifier
    }

    pub const fn minimum(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    pub const fn maximum(&self) -> i32 {
        (self.count * self.sides) as i32 + self.modifier
    }
}

impl FromStr for DiceExpr {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "{}", self.modifier);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
