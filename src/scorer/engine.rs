use super::analysis::HandProfile;
use super::plan::EvaluationPlan;
use super::types::{Category, ScoreOutcome, SelectionReport};
use tracing::trace;

/// Walks the plan keeping the best outcome so far.
///
/// A category is skipped when the running best already reaches its ceiling.
/// The check is repeated for every entry. The catch-all is always evaluated.
pub fn select_best(plan: &EvaluationPlan, profile: &HandProfile) -> ScoreOutcome {
    let mut current = ScoreOutcome::new(0, Category::Chance);

    for entry in plan.entries() {
        if !entry.category.is_catch_all() && current.score >= entry.ceiling {
            trace!(
                "skip {} (best {} >= ceiling {})",
                entry.category,
                current.score,
                entry.ceiling
            );
            continue;
        }
        let candidate = ScoreOutcome::new((entry.evaluator)(profile), entry.category);
        current = current.max(candidate);
    }

    current
}

/// Same walk as [`select_best`], recording every evaluation and skip.
pub fn select_debug(plan: &EvaluationPlan, profile: &HandProfile) -> SelectionReport {
    let mut current = ScoreOutcome::new(0, Category::Chance);
    let mut evaluated = Vec::new();
    let mut skipped = Vec::new();

    for entry in plan.entries() {
        if !entry.category.is_catch_all() && current.score >= entry.ceiling {
            skipped.push(entry.category);
            continue;
        }
        let candidate = ScoreOutcome::new((entry.evaluator)(profile), entry.category);
        evaluated.push(candidate);
        current = current.max(candidate);
    }

    SelectionReport {
        best: current,
        evaluated,
        skipped,
    }
}
