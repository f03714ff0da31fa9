use crate::consts::{
    ALL_OF_A_KIND_BONUS, DEFAULT_DICE, DEFAULT_SIDES, MAX_DICE, MAX_SIDES, MIN_DICE, MIN_SIDES,
};
use crate::error::{DiceScoreError, DsResult};
use crate::scorer::Category;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// The shape of a hand: how many dice are rolled and how many faces each has.
///
/// Fixed for the lifetime of a [`Scorer`](crate::scorer::Scorer). Missing JSON
/// fields fall back to the reference ruleset (5 dice, 8 faces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub dice: usize,
    pub sides: u8,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            dice: DEFAULT_DICE,
            sides: DEFAULT_SIDES,
        }
    }
}

impl Ruleset {
    pub fn new(dice: usize, sides: u8) -> DsResult<Self> {
        let ruleset = Self { dice, sides };
        ruleset.validate()?;
        Ok(ruleset)
    }

    pub fn validate(&self) -> DsResult<()> {
        if !(MIN_DICE..=MAX_DICE).contains(&self.dice) {
            return Err(DiceScoreError::Config(format!(
                "dice must be between {} and {} but was {}",
                MIN_DICE, MAX_DICE, self.dice
            )));
        }
        if !(MIN_SIDES..=MAX_SIDES).contains(&self.sides) {
            return Err(DiceScoreError::Config(format!(
                "sides must be between {} and {} but was {}",
                MIN_SIDES, MAX_SIDES, self.sides
            )));
        }
        // A hand of all top faces may not outscore every kind ceiling.
        let top_total = self.dice as u32 * u32::from(self.sides);
        let cap = Category::FourOfAKind
            .theoretical_max(self)
            .max(ALL_OF_A_KIND_BONUS);
        if top_total > cap {
            return Err(DiceScoreError::Config(format!(
                "dice x sides must be at most {} but was {}",
                cap, top_total
            )));
        }
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> DsResult<Self> {
        let ruleset: Self = serde_json::from_reader(reader)?;
        ruleset.validate()?;
        Ok(ruleset)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DsResult<Self> {
        let path = path.as_ref();
        info!("🎲 Loading Ruleset from: {}", path.display());
        let file = File::open(path)?;
        let ruleset = Self::from_reader(BufReader::new(file))?;
        info!(
            "Ruleset Loaded: {} dice, {} sides",
            ruleset.dice, ruleset.sides
        );
        Ok(ruleset)
    }

    /// Highest face value a die can show.
    pub fn max_face(&self) -> i32 {
        i32::from(self.sides)
    }
}
