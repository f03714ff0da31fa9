use super::categories::Evaluator;
use super::types::Category;
use crate::config::Ruleset;
use std::cmp::Reverse;
use strum::IntoEnumIterator;
use tracing::debug;

#[derive(Clone, Copy)]
pub struct PlanEntry {
    pub category: Category,
    pub ceiling: u32,
    pub(crate) evaluator: Evaluator,
}

impl std::fmt::Debug for PlanEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanEntry")
            .field("category", &self.category)
            .field("ceiling", &self.ceiling)
            .finish()
    }
}

/// Categories sorted by descending ceiling, catch-all last.
///
/// Built once per ruleset and never mutated. Equal ceilings keep declaration
/// order.
#[derive(Debug, Clone)]
pub struct EvaluationPlan {
    entries: Vec<PlanEntry>,
}

impl EvaluationPlan {
    pub fn new(ruleset: &Ruleset) -> Self {
        let mut entries: Vec<PlanEntry> = Category::iter()
            .map(|category| PlanEntry {
                category,
                ceiling: category.theoretical_max(ruleset),
                evaluator: category.evaluator(),
            })
            .collect();
        entries.sort_by_key(|e| (e.category.is_catch_all(), Reverse(e.ceiling)));

        debug!(
            "Evaluation plan: {}",
            entries
                .iter()
                .map(|e| format!("{}={}", e.category, e.ceiling))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self { entries }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|e| e.category)
    }
}
