use crate::error::DsResult;
use crate::scorer::{DiceSource, ScoreOutcome, Scorer};
use std::sync::OnceLock;

static REFERENCE_SCORER: OnceLock<Scorer> = OnceLock::new();

/// Shared scorer for the reference ruleset (5 dice, 8 faces), built on first use.
pub fn reference_scorer() -> &'static Scorer {
    REFERENCE_SCORER.get_or_init(Scorer::default)
}

/// Service: best score under the reference ruleset.
pub fn score<H: DiceSource + ?Sized>(hand: &H) -> DsResult<u32> {
    reference_scorer().score(hand)
}

/// Service: best score and winning category under the reference ruleset.
pub fn score_with_category<H: DiceSource + ?Sized>(hand: &H) -> DsResult<ScoreOutcome> {
    reference_scorer().score_with_category(hand)
}
