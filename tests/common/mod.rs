#![allow(dead_code)]

use dicescore::{Category, Ruleset, ScoreOutcome, Scorer};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Routes library logs through the test harness' captured output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Every ordered hand under `ruleset` (sides^dice of them).
pub fn all_hands(ruleset: &Ruleset) -> Vec<Vec<i32>> {
    let sides = i32::from(ruleset.sides);
    let mut hands = vec![Vec::new()];
    for _ in 0..ruleset.dice {
        hands = hands
            .into_iter()
            .flat_map(|hand| {
                (1..=sides).map(move |v| {
                    let mut next = hand.clone();
                    next.push(v);
                    next
                })
            })
            .collect();
    }
    hands
}

/// Best outcome from walking the whole plan with no skipping.
pub fn unpruned_best(scorer: &Scorer, hand: &[i32]) -> ScoreOutcome {
    let card = scorer.score_card(hand).unwrap();
    scorer
        .plan()
        .categories()
        .map(|c| ScoreOutcome::new(card.get(c).unwrap(), c))
        .fold(ScoreOutcome::new(0, Category::Chance), ScoreOutcome::max)
}
