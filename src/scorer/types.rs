use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Scoring categories.
///
/// Single-face categories (ones, twos, ...) are left out on purpose: Chance and
/// ThreeOfAKind always beat them. Declaration order breaks ties between equal
/// ceilings when the evaluation plan is sorted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ThreeOfAKind,
    FourOfAKind,
    AllOfAKind,
    NoneOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Chance,
}

impl Category {
    /// Chance always qualifies and is never skipped.
    pub fn is_catch_all(self) -> bool {
        self == Category::Chance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub score: u32,
    pub category: Category,
}

impl ScoreOutcome {
    pub fn new(score: u32, category: Category) -> Self {
        Self { score, category }
    }

    /// Higher score wins; on a tie `self` (the one seen first) is kept.
    pub fn max(self, other: ScoreOutcome) -> ScoreOutcome {
        if self.score >= other.score {
            self
        } else {
            other
        }
    }
}

/// Every category's score for one hand, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub entries: Vec<ScoreOutcome>,
    pub best: ScoreOutcome,
}

impl ScoreCard {
    pub fn get(&self, category: Category) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.score)
    }
}

/// What the best-score selector did for one hand, in plan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionReport {
    pub best: ScoreOutcome,
    pub evaluated: Vec<ScoreOutcome>,
    pub skipped: Vec<Category>,
}
