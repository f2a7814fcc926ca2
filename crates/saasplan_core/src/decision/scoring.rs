//! Multi-criteria scoring, guardrail and confidence rules

use crate::model::{LeverCategory, LeverDefinition};

use super::result::{Confidence, LeverImpact, ScoredLever};

pub const WEIGHT_ECONOMIC: f64 = 0.40;
pub const WEIGHT_TIME: f64 = 0.25;
pub const WEIGHT_OPS: f64 = 0.20;
pub const WEIGHT_SCALING: f64 = 0.15;

/// Lower bound for the top of the contribution-delta range
pub const CONTRIBUTION_RANGE_FLOOR: f64 = 0.1;

/// A product/ops lever replaces a marketing winner when it reaches this share of its score
pub const GUARDRAIL_RATIO: f64 = 0.85;

pub const HIGH_CONFIDENCE_GAP: f64 = 0.15;
pub const MEDIUM_CONFIDENCE_GAP: f64 = 0.05;

/// Min-max scale `value` into [0, 1]; a degenerate range maps to 0
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

#[derive(Debug, Clone, Copy)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Range {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |r, v| Range {
                min: r.min.min(v),
                max: r.max.max(v),
            },
        )
    }

    fn scale(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }
}

/// Score every candidate and rank them best first.
///
/// Each delta series is min-max normalized across the full candidate set.
/// Breakeven and ops-load scores are inverted since lower raw deltas are
/// better. Equal scores keep their input order.
pub fn score_candidates(candidates: Vec<(LeverDefinition, LeverImpact)>) -> Vec<ScoredLever> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut contribution = Range::of(candidates.iter().map(|(_, i)| i.delta_contribution));
    contribution.max = contribution.max.max(CONTRIBUTION_RANGE_FLOOR);
    let breakeven = Range::of(candidates.iter().map(|(_, i)| i.delta_breakeven as f64));
    let ops = Range::of(candidates.iter().map(|(_, i)| i.delta_ops_load));

    let mut scored: Vec<ScoredLever> = candidates
        .into_iter()
        .map(|(definition, impact)| {
            let economic = contribution.scale(impact.delta_contribution);
            let time = 1.0 - breakeven.scale(impact.delta_breakeven as f64);
            let ops_score = 1.0 - ops.scale(impact.delta_ops_load);
            let score = weighted_score(economic, time, ops_score, definition.category);

            ScoredLever {
                definition,
                impact,
                score,
                rank: 0,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (idx, lever) in scored.iter_mut().enumerate() {
        lever.rank = idx + 1;
    }
    scored
}

/// Combine the normalized metric scores with the category prior
pub fn weighted_score(economic: f64, time: f64, ops: f64, category: LeverCategory) -> f64 {
    economic * WEIGHT_ECONOMIC
        + time * WEIGHT_TIME
        + ops * WEIGHT_OPS
        + category.scaling_prior() * WEIGHT_SCALING
}

/// Pick the primary lever from a ranking sorted best first.
///
/// Returns its index and whether the marketing guardrail promoted it.
/// Marketing only wins when no product/ops lever comes within
/// `GUARDRAIL_RATIO` of its score.
pub fn select_primary(ranking: &[ScoredLever]) -> Option<(usize, bool)> {
    let top = ranking.first()?;
    if top.definition.category != LeverCategory::Marketing {
        return Some((0, false));
    }

    let best_ops = ranking
        .iter()
        .position(|s| s.definition.category == LeverCategory::ProductOps);

    match best_ops {
        Some(idx) if ranking[idx].score >= top.score * GUARDRAIL_RATIO => Some((idx, true)),
        _ => Some((0, false)),
    }
}

/// Confidence from the relative gap between the first two ranks
pub fn confidence_for(ranking: &[ScoredLever]) -> Confidence {
    match ranking {
        [first, second, ..] => confidence_from_scores(first.score, second.score),
        _ => Confidence::Low,
    }
}

pub fn confidence_from_scores(top: f64, runner_up: f64) -> Confidence {
    if top <= 0.0 {
        return Confidence::Low;
    }

    let gap = (top - runner_up) / top;
    if gap > HIGH_CONFIDENCE_GAP {
        Confidence::High
    } else if gap > MEDIUM_CONFIDENCE_GAP {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdjustmentKind, InputField};

    fn lever(field: InputField, category: LeverCategory) -> LeverDefinition {
        LeverDefinition::new(
            field,
            field.key(),
            category,
            AdjustmentKind::Multiplier,
            1.1,
        )
    }

    fn scored(field: InputField, category: LeverCategory, score: f64, rank: usize) -> ScoredLever {
        ScoredLever {
            definition: lever(field, category),
            impact: LeverImpact::default(),
            score,
            rank,
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(3.0, 3.0, 3.0), 0.0);
        assert_eq!(normalize(-2.0, -2.0, 2.0), 0.0);
        assert_eq!(normalize(2.0, -2.0, 2.0), 1.0);
    }

    #[test]
    fn test_guardrail_promotes_close_product_ops() {
        let ranking = vec![
            scored(InputField::CostPerMql, LeverCategory::Marketing, 1.00, 1),
            scored(InputField::ArpaMonth, LeverCategory::UnitEconomics, 0.90, 2),
            scored(
                InputField::OnboardingHoursPerCustomer,
                LeverCategory::ProductOps,
                0.86,
                3,
            ),
        ];
        assert_eq!(select_primary(&ranking), Some((2, true)));
    }

    #[test]
    fn test_guardrail_keeps_clear_marketing_winner() {
        let ranking = vec![
            scored(InputField::CostPerMql, LeverCategory::Marketing, 1.00, 1),
            scored(InputField::ArpaMonth, LeverCategory::UnitEconomics, 0.90, 2),
            scored(
                InputField::OnboardingHoursPerCustomer,
                LeverCategory::ProductOps,
                0.80,
                3,
            ),
        ];
        assert_eq!(select_primary(&ranking), Some((0, false)));
    }

    #[test]
    fn test_guardrail_at_exact_threshold_promotes() {
        let ranking = vec![
            scored(
                InputField::SessionsPerMonth,
                LeverCategory::Marketing,
                1.00,
                1,
            ),
            scored(
                InputField::LogoChurnMonthly,
                LeverCategory::ProductOps,
                0.85,
                2,
            ),
        ];
        assert_eq!(select_primary(&ranking), Some((1, true)));
    }

    #[test]
    fn test_guardrail_without_product_ops_candidate() {
        let ranking = vec![
            scored(
                InputField::SessionsPerMonth,
                LeverCategory::Marketing,
                1.00,
                1,
            ),
            scored(InputField::ArpaMonth, LeverCategory::UnitEconomics, 0.99, 2),
        ];
        assert_eq!(select_primary(&ranking), Some((0, false)));
    }

    #[test]
    fn test_non_marketing_winner_untouched() {
        let ranking = vec![
            scored(InputField::ArpaMonth, LeverCategory::UnitEconomics, 1.00, 1),
            scored(
                InputField::LogoChurnMonthly,
                LeverCategory::ProductOps,
                0.99,
                2,
            ),
        ];
        assert_eq!(select_primary(&ranking), Some((0, false)));
        assert_eq!(select_primary(&[]), None);
    }

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(confidence_from_scores(1.0, 0.84), Confidence::High);
        assert_eq!(confidence_from_scores(1.0, 0.90), Confidence::Medium);
        assert_eq!(confidence_from_scores(1.0, 0.98), Confidence::Low);
        assert_eq!(confidence_from_scores(0.0, 0.0), Confidence::Low);
    }

    #[test]
    fn test_confidence_needs_two_candidates() {
        let single = scored(InputField::ArpaMonth, LeverCategory::UnitEconomics, 0.9, 1);
        assert_eq!(confidence_for(&[single]), Confidence::Low);
        assert_eq!(confidence_for(&[]), Confidence::Low);
    }

    #[test]
    fn test_score_candidates_ranks_and_weights() {
        let candidates = vec![
            (
                lever(InputField::SessionsPerMonth, LeverCategory::Marketing),
                LeverImpact {
                    delta_contribution: -100.0,
                    delta_breakeven: 2,
                    delta_ops_load: 10.0,
                },
            ),
            (
                lever(InputField::ArpaMonth, LeverCategory::UnitEconomics),
                LeverImpact {
                    delta_contribution: 900.0,
                    delta_breakeven: -1,
                    delta_ops_load: 0.0,
                },
            ),
        ];

        let ranking = score_candidates(candidates);
        assert_eq!(ranking[0].definition.field, InputField::ArpaMonth);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[1].rank, 2);

        // Best on every metric: 0.40 + 0.25 + 0.20 + 0.6 * 0.15
        assert!((ranking[0].score - 0.94).abs() < 1e-12);
        // Worst on every metric: only the marketing prior remains
        assert!((ranking[1].score - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_contribution_floor_when_all_negative() {
        let candidates = vec![
            (
                lever(InputField::SessionsPerMonth, LeverCategory::Marketing),
                LeverImpact {
                    delta_contribution: -50.0,
                    ..Default::default()
                },
            ),
            (
                lever(InputField::MqlRate, LeverCategory::Marketing),
                LeverImpact {
                    delta_contribution: -10.0,
                    ..Default::default()
                },
            ),
        ];

        let ranking = score_candidates(candidates);
        // Range is [-50, 0.1], so -10 maps to 40 / 50.1
        let expected =
            40.0 / 50.1 * WEIGHT_ECONOMIC + WEIGHT_TIME + WEIGHT_OPS + 0.4 * WEIGHT_SCALING;
        assert_eq!(ranking[0].definition.field, InputField::MqlRate);
        assert!((ranking[0].score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let candidates = vec![
            (
                lever(InputField::ActivationRate, LeverCategory::ProductOps),
                LeverImpact::default(),
            ),
            (
                lever(InputField::TrialToPaidRate, LeverCategory::ProductOps),
                LeverImpact::default(),
            ),
        ];
        let ranking = score_candidates(candidates);
        assert_eq!(ranking[0].definition.field, InputField::ActivationRate);
        assert_eq!(ranking[1].definition.field, InputField::TrialToPaidRate);
    }
}
