use dicescore::{Category, Ruleset, ScoreOutcome, Scorer};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_hand()(hand in proptest::collection::vec(1i32..=8, 5)) -> Vec<i32> {
        hand
    }
}

prop_compose! {
    fn arb_ruleset()(dice in 5usize..=10)(
        sides in 2u8..=(50 / dice) as u8,
        dice in Just(dice)
    ) -> Ruleset {
        Ruleset { dice, sides }
    }
}

prop_compose! {
    fn arb_ruleset_and_hand()(ruleset in arb_ruleset())(
        hand in proptest::collection::vec(1i32..=i32::from(ruleset.sides), ruleset.dice),
        ruleset in Just(ruleset)
    ) -> (Ruleset, Vec<i32>) {
        (ruleset, hand)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_score_matches_score_with_category(hand in arb_hand()) {
        let scorer = Scorer::default();
        let outcome = scorer.score_with_category(&hand).unwrap();
        prop_assert_eq!(scorer.score(&hand).unwrap(), outcome.score);
        prop_assert!(outcome.score <= 50);
        prop_assert!(outcome.score >= 5);
    }

    #[test]
    fn test_order_does_not_matter(hand in arb_hand()) {
        let mut hand = hand;
        let scorer = Scorer::default();
        let before = scorer.score_with_category(&hand).unwrap();
        hand.reverse();
        prop_assert_eq!(scorer.score_with_category(&hand).unwrap(), before);
        hand.sort_unstable();
        prop_assert_eq!(scorer.score_with_category(&hand).unwrap(), before);
    }

    #[test]
    fn test_repeated_calls_agree(hand in arb_hand()) {
        let scorer = Scorer::default();
        let first = scorer.score_with_category(&hand).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(scorer.score_with_category(&hand).unwrap(), first);
        }
    }

    #[test]
    fn test_best_dominates_score_card(input in arb_ruleset_and_hand()) {
        let (ruleset, hand) = input;
        let scorer = Scorer::new(ruleset).unwrap();
        let card = scorer.score_card(&hand).unwrap();

        let chance = card.get(Category::Chance).unwrap();
        prop_assert!(card.best.score >= chance);
        prop_assert!(card.entries.iter().all(|e| e.score <= card.best.score));

        for entry in &card.entries {
            let bonus = match entry.category {
                Category::AllOfAKind => Some(50),
                Category::NoneOfAKind | Category::LargeStraight => Some(40),
                Category::SmallStraight => Some(30),
                Category::FullHouse => Some(25),
                _ => None,
            };
            if let Some(bonus) = bonus {
                prop_assert!(entry.score == 0 || entry.score == bonus);
            }
        }
    }

    #[test]
    fn test_pruning_never_changes_the_result(input in arb_ruleset_and_hand()) {
        let (ruleset, hand) = input;
        let scorer = Scorer::new(ruleset).unwrap();
        let report = scorer.score_debug(&hand).unwrap();
        let card = scorer.score_card(&hand).unwrap();

        // Unpruned walk over the same order.
        let unpruned = scorer
            .plan()
            .categories()
            .map(|c| ScoreOutcome::new(card.get(c).unwrap(), c))
            .fold(ScoreOutcome::new(0, Category::Chance), ScoreOutcome::max);

        prop_assert_eq!(report.best, unpruned);
        prop_assert_eq!(report.best, scorer.score_with_category(&hand).unwrap());
        prop_assert_eq!(report.evaluated.len() + report.skipped.len(), 8);
        prop_assert_eq!(report.evaluated.last().map(|o| o.category), Some(Category::Chance));
    }
}
