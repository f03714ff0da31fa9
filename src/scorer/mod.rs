pub(crate) mod analysis;
pub(crate) mod categories;
pub(crate) mod engine;
pub mod plan;
pub mod types;
pub mod validation;

use self::analysis::HandProfile;
use self::plan::EvaluationPlan;
pub use self::types::{Category, ScoreCard, ScoreOutcome, SelectionReport};
pub use self::validation::DiceSource;
use crate::config::Ruleset;
use crate::error::DsResult;
use strum::IntoEnumIterator;

/// Picks the best scoring category for a hand under a fixed ruleset.
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Scorer {
    ruleset: Ruleset,
    plan: EvaluationPlan,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_valid(Ruleset::default())
    }
}

impl Scorer {
    pub fn new(ruleset: Ruleset) -> DsResult<Self> {
        ruleset.validate()?;
        Ok(Self::from_valid(ruleset))
    }

    fn from_valid(ruleset: Ruleset) -> Self {
        let plan = EvaluationPlan::new(&ruleset);
        Self { ruleset, plan }
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn plan(&self) -> &EvaluationPlan {
        &self.plan
    }

    fn profile<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<HandProfile> {
        let values = validation::validate(&self.ruleset, hand)?;
        Ok(HandProfile::new(&self.ruleset, values))
    }

    pub fn score<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<u32> {
        Ok(self.score_with_category(hand)?.score)
    }

    /// Best score and the category producing it. Ties go to the category
    /// earlier in the plan.
    pub fn score_with_category<H: DiceSource + ?Sized>(
        &self,
        hand: &H,
    ) -> DsResult<ScoreOutcome> {
        let profile = self.profile(hand)?;
        Ok(engine::select_best(&self.plan, &profile))
    }

    /// Like [`Scorer::score_with_category`], but also reports which categories
    /// were evaluated and which were pruned.
    pub fn score_debug<H: DiceSource + ?Sized>(
        &self,
        hand: &H,
    ) -> DsResult<SelectionReport> {
        let profile = self.profile(hand)?;
        Ok(engine::select_debug(&self.plan, &profile))
    }

    /// Every category's score for the hand, without pruning.
    pub fn score_card<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreCard> {
        let profile = self.profile(hand)?;
        let entries = Category::iter()
            .map(|c| ScoreOutcome::new(c.evaluate(&profile), c))
            .collect();
        Ok(ScoreCard {
            entries,
            best: engine::select_best(&self.plan, &profile),
        })
    }

    /// Scores a single category.
    pub fn evaluate<H: DiceSource + ?Sized>(
        &self,
        category: Category,
        hand: &H,
    ) -> DsResult<ScoreOutcome> {
        let profile = self.profile(hand)?;
        Ok(ScoreOutcome::new(category.evaluate(&profile), category))
    }

    pub fn three_of_a_kind<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::ThreeOfAKind, hand)
    }

    pub fn four_of_a_kind<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::FourOfAKind, hand)
    }

    pub fn all_of_a_kind<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::AllOfAKind, hand)
    }

    pub fn none_of_a_kind<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::NoneOfAKind, hand)
    }

    pub fn full_house<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::FullHouse, hand)
    }

    pub fn small_straight<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::SmallStraight, hand)
    }

    pub fn large_straight<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::LargeStraight, hand)
    }

    pub fn chance<H: DiceSource + ?Sized>(&self, hand: &H) -> DsResult<ScoreOutcome> {
        self.evaluate(Category::Chance, hand)
    }
}
