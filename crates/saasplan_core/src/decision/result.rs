//! Decision engine output types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::LeverDefinition;

use super::scoring::{confidence_for, select_primary};

/// Raw deltas of one lever against the unmodified baseline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LeverImpact {
    /// Change in total contribution; higher is better
    pub delta_contribution: f64,
    /// Change in breakeven month, "never" counted as horizon + 1; negative is better
    pub delta_breakeven: i64,
    /// Change in peak monthly ops hours; negative is better
    pub delta_ops_load: f64,
}

/// A candidate lever with its score and 1-based rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLever {
    pub definition: LeverDefinition,
    pub impact: LeverImpact,
    pub score: f64,
    pub rank: usize,
}

/// A runner-up suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLever {
    pub definition: LeverDefinition,
    pub rank: usize,
}

/// How clearly the top lever beats the runner-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Recommendation produced by the decision engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// `None` when no lever applies to the business model
    pub primary: Option<ScoredLever>,
    /// Up to three further candidates, best first, excluding the primary.
    ///
    /// These are not always ranks 2 to 4: when the guardrail promotes a
    /// product/ops lever, the demoted leader stays listed first with rank 1.
    pub secondary: Vec<RankedLever>,
    pub confidence: Confidence,
    /// A product/ops lever was promoted over a top-ranked marketing lever
    pub guardrail_applied: bool,
    /// Every evaluated candidate, best first
    pub ranking: Vec<ScoredLever>,
}

impl DecisionResult {
    pub const MAX_SECONDARY: usize = 3;

    /// Result for an empty candidate set
    pub fn empty() -> Self {
        Self {
            primary: None,
            secondary: Vec::new(),
            confidence: Confidence::Low,
            guardrail_applied: false,
            ranking: Vec::new(),
        }
    }

    /// Build the result from a ranking sorted best first
    pub fn from_ranking(ranking: Vec<ScoredLever>) -> Self {
        let Some((primary_idx, guardrail_applied)) = select_primary(&ranking) else {
            return Self::empty();
        };

        let secondary = ranking
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != primary_idx)
            .take(Self::MAX_SECONDARY)
            .map(|(_, s)| RankedLever {
                definition: s.definition.clone(),
                rank: s.rank,
            })
            .collect();

        Self {
            primary: Some(ranking[primary_idx].clone()),
            secondary,
            confidence: confidence_for(&ranking),
            guardrail_applied,
            ranking,
        }
    }

    pub fn has_recommendation(&self) -> bool {
        self.primary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdjustmentKind, InputField, LeverCategory};

    fn scored(field: InputField, category: LeverCategory, score: f64, rank: usize) -> ScoredLever {
        ScoredLever {
            definition: LeverDefinition::new(
                field,
                field.key(),
                category,
                AdjustmentKind::Multiplier,
                1.1,
            ),
            impact: LeverImpact::default(),
            score,
            rank,
        }
    }

    fn secondary_ranks(result: &DecisionResult) -> Vec<usize> {
        result.secondary.iter().map(|s| s.rank).collect()
    }

    #[test]
    fn test_secondary_without_guardrail_is_next_three() {
        let result = DecisionResult::from_ranking(vec![
            scored(InputField::ArpaMonth, LeverCategory::UnitEconomics, 1.0, 1),
            scored(InputField::CostPerMql, LeverCategory::Marketing, 0.7, 2),
            scored(InputField::MqlRate, LeverCategory::Marketing, 0.6, 3),
            scored(InputField::GrossMargin, LeverCategory::Marketing, 0.5, 4),
            scored(InputField::MqlToSqlRate, LeverCategory::Marketing, 0.4, 5),
        ]);

        assert!(!result.guardrail_applied);
        assert_eq!(result.primary.as_ref().unwrap().rank, 1);
        assert_eq!(secondary_ranks(&result), vec![2, 3, 4]);
    }

    #[test]
    fn test_secondary_keeps_demoted_leader_first() {
        let result = DecisionResult::from_ranking(vec![
            scored(InputField::CostPerMql, LeverCategory::Marketing, 1.0, 1),
            scored(InputField::ArpaMonth, LeverCategory::UnitEconomics, 0.9, 2),
            scored(
                InputField::OnboardingHoursPerCustomer,
                LeverCategory::ProductOps,
                0.86,
                3,
            ),
            scored(InputField::GrossMargin, LeverCategory::Marketing, 0.5, 4),
            scored(InputField::MqlRate, LeverCategory::Marketing, 0.4, 5),
        ]);

        assert!(result.guardrail_applied);
        assert_eq!(result.primary.as_ref().unwrap().rank, 3);
        assert_eq!(secondary_ranks(&result), vec![1, 2, 4]);
        assert_eq!(result.secondary[0].definition.field, InputField::CostPerMql);
    }
}
