//! One pure evaluator per category, plus each category's ceiling.
//!
//! Evaluators return 0 when the hand does not qualify.

use super::analysis::HandProfile;
use super::types::Category;
use crate::config::Ruleset;
use crate::consts::{
    ALL_OF_A_KIND_BONUS, FULL_HOUSE_BONUS, LARGE_STRAIGHT_BONUS, NONE_OF_A_KIND_BONUS,
    SMALL_STRAIGHT_BONUS,
};

pub(crate) type Evaluator = fn(&HandProfile) -> u32;

impl Category {
    /// Highest score any hand could reach in this category. Only used to order
    /// and prune evaluation.
    pub fn theoretical_max(self, ruleset: &Ruleset) -> u32 {
        let n = ruleset.dice as u32;
        let s = u32::from(ruleset.sides);
        match self {
            // x of the top face, the rest one below it
            Category::ThreeOfAKind => s * 3 + (s - 1) * (n - 3),
            Category::FourOfAKind => s * 4 + (s - 1) * (n - 4),
            Category::AllOfAKind => ALL_OF_A_KIND_BONUS,
            // Scores 40, but ranked one lower so LargeStraight wins the tie.
            Category::NoneOfAKind => NONE_OF_A_KIND_BONUS - 1,
            Category::FullHouse => FULL_HOUSE_BONUS,
            Category::SmallStraight => SMALL_STRAIGHT_BONUS,
            Category::LargeStraight => LARGE_STRAIGHT_BONUS,
            Category::Chance => 0,
        }
    }

    pub(crate) fn evaluator(self) -> Evaluator {
        match self {
            Category::ThreeOfAKind => three_of_a_kind,
            Category::FourOfAKind => four_of_a_kind,
            Category::AllOfAKind => all_of_a_kind,
            Category::NoneOfAKind => none_of_a_kind,
            Category::FullHouse => full_house,
            Category::SmallStraight => small_straight,
            Category::LargeStraight => large_straight,
            Category::Chance => chance,
        }
    }

    pub(crate) fn evaluate(self, profile: &HandProfile) -> u32 {
        (self.evaluator())(profile)
    }
}

pub fn three_of_a_kind(p: &HandProfile) -> u32 {
    if has_x_of_a_kind(p, 3) {
        p.sum
    } else {
        0
    }
}

pub fn four_of_a_kind(p: &HandProfile) -> u32 {
    if has_x_of_a_kind(p, 4) {
        p.sum
    } else {
        0
    }
}

pub fn all_of_a_kind(p: &HandProfile) -> u32 {
    if has_x_of_a_kind(p, p.dice()) {
        ALL_OF_A_KIND_BONUS
    } else {
        0
    }
}

pub fn none_of_a_kind(p: &HandProfile) -> u32 {
    if p.distinct() == p.dice() {
        NONE_OF_A_KIND_BONUS
    } else {
        0
    }
}

pub fn full_house(p: &HandProfile) -> u32 {
    let has_pair = p.counts().contains(&2);
    let has_triple = p.counts().contains(&3);
    if has_pair && has_triple {
        FULL_HOUSE_BONUS
    } else {
        0
    }
}

pub fn small_straight(p: &HandProfile) -> u32 {
    if has_run(p.bitmap, p.sides(), p.dice() - 1) {
        SMALL_STRAIGHT_BONUS
    } else {
        0
    }
}

pub fn large_straight(p: &HandProfile) -> u32 {
    if has_run(p.bitmap, p.sides(), p.dice()) {
        LARGE_STRAIGHT_BONUS
    } else {
        0
    }
}

pub fn chance(p: &HandProfile) -> u32 {
    p.sum
}

fn has_x_of_a_kind(p: &HandProfile, x: usize) -> bool {
    p.counts().iter().any(|&c| c as usize >= x)
}

/// Slides a mask of `len` set bits over faces 1..=sides.
fn has_run(bitmap: u32, sides: u8, len: usize) -> bool {
    let sides = sides as usize;
    if len == 0 || len > sides {
        return false;
    }
    // 0b1111 for len 4, 0b1_1111 for len 5
    let mask = u32::MAX >> (32 - len);
    (0..=sides - len).any(|shift| (bitmap >> shift) & mask == mask)
}
