use crate::config::Ruleset;
use crate::consts::MAX_SIDES;

/// Per-hand summaries shared by every category evaluator.
///
/// Built once per scoring call from an already validated hand, never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandProfile {
    /// `counts[i]` is how many dice show face `i + 1`.
    counts: [u8; MAX_SIDES as usize],
    sides: u8,
    dice: usize,
    /// Bit `i` is set iff face `i + 1` appears at least once.
    pub bitmap: u32,
    pub sum: u32,
}

impl HandProfile {
    /// Expects every value to be within `1..=ruleset.sides`.
    pub fn new(ruleset: &Ruleset, values: &[i32]) -> Self {
        let counts = value_count_map(values);
        Self {
            counts,
            sides: ruleset.sides,
            dice: values.len(),
            bitmap: value_bitmap(&counts[..ruleset.sides as usize]),
            sum: sum(values),
        }
    }

    /// Value-count map restricted to the ruleset's faces.
    pub fn counts(&self) -> &[u8] {
        &self.counts[..self.sides as usize]
    }

    pub fn dice(&self) -> usize {
        self.dice
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// Number of distinct faces showing.
    pub fn distinct(&self) -> usize {
        self.bitmap.count_ones() as usize
    }
}

pub fn value_count_map(values: &[i32]) -> [u8; MAX_SIDES as usize] {
    let mut counts = [0u8; MAX_SIDES as usize];
    for &v in values {
        counts[(v - 1) as usize] += 1;
    }
    counts
}

pub fn value_bitmap(counts: &[u8]) -> u32 {
    counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0)
        .fold(0u32, |bitmap, (i, _)| bitmap | (1u32 << i))
}

pub fn sum(values: &[i32]) -> u32 {
    values.iter().map(|&v| v as u32).sum()
}
