//! Strategy scenarios
//!
//! A scenario bundles several lever changes applied together. Comparing
//! scenarios runs the baseline once and each scenario once, then reports the
//! aggregate deltas against the baseline.

use serde::{Deserialize, Serialize};

use crate::apply::apply_levers;
use crate::error::SimulationError;
use crate::model::{BaselineInputs, BusinessModel, InputField, LeverChange, SimulationResult};
use crate::simulation::simulate_business_case;

/// A named bundle of lever changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    pub id: String,
    pub name: String,
    pub changes: Vec<LeverChange>,
}

impl ScenarioDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, changes: Vec<LeverChange>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            changes,
        }
    }

    /// More traffic, better lead conversion, cheaper leads
    pub fn marketing_focus() -> Self {
        Self::new(
            "marketing_focus",
            "Marketing focus",
            vec![
                LeverChange::multiplier(InputField::SessionsPerMonth, 1.10),
                LeverChange::multiplier(InputField::MqlRate, 1.10),
                LeverChange::multiplier(InputField::CostPerMql, 0.90),
            ],
        )
    }

    /// Lower churn, leaner onboarding and support
    pub fn ops_focus() -> Self {
        Self::new(
            "ops_focus",
            "Operational focus",
            vec![
                LeverChange::additive(InputField::LogoChurnMonthly, -0.005),
                LeverChange::multiplier(InputField::OnboardingHoursPerCustomer, 0.75),
                LeverChange::multiplier(InputField::SupportHoursPerCustomerMonth, 0.85),
            ],
        )
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::marketing_focus(), Self::ops_focus()]
    }
}

/// Aggregate differences of a scenario against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDelta {
    pub ending_mrr: f64,
    pub total_contribution: f64,
    pub peak_ops_hours: f64,
    /// `None` when either run never breaks even
    pub breakeven_months: Option<i64>,
}

impl ScenarioDelta {
    fn between(baseline: &SimulationResult, scenario: &SimulationResult) -> Self {
        let base = &baseline.aggregates;
        let other = &scenario.aggregates;

        Self {
            ending_mrr: other.ending_mrr - base.ending_mrr,
            total_contribution: other.total_contribution - base.total_contribution,
            peak_ops_hours: other.peak_ops_hours - base.peak_ops_hours,
            breakeven_months: match (base.breakeven.month(), other.breakeven.month()) {
                (Some(b), Some(s)) => Some(i64::from(s) - i64::from(b)),
                _ => None,
            },
        }
    }
}

/// One simulated scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: ScenarioDefinition,
    pub inputs: BaselineInputs,
    pub result: SimulationResult,
    pub delta: ScenarioDelta,
}

/// Baseline plus every compared scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub model: BusinessModel,
    pub horizon_months: u32,
    pub baseline: SimulationResult,
    pub scenarios: Vec<ScenarioOutcome>,
}

impl ScenarioComparison {
    pub fn get(&self, id: &str) -> Option<&ScenarioOutcome> {
        self.scenarios.iter().find(|s| s.scenario.id == id)
    }

    /// Scenario with the highest total contribution
    pub fn best_by_contribution(&self) -> Option<&ScenarioOutcome> {
        self.scenarios.iter().max_by(|a, b| {
            a.result
                .aggregates
                .total_contribution
                .total_cmp(&b.result.aggregates.total_contribution)
        })
    }
}

/// Simulate the baseline and each scenario over the same horizon
pub fn compare_scenarios(
    baseline: &BaselineInputs,
    model: BusinessModel,
    horizon_months: u32,
    scenarios: &[ScenarioDefinition],
) -> Result<ScenarioComparison, SimulationError> {
    let baseline_result = simulate_business_case(baseline, model, horizon_months)?;

    let outcomes = scenarios
        .iter()
        .map(|scenario| {
            let inputs = apply_levers(baseline, &scenario.changes);
            let result = simulate_business_case(&inputs, model, horizon_months)?;
            let delta = ScenarioDelta::between(&baseline_result, &result);

            tracing::debug!(
                scenario = %scenario.id,
                delta_contribution = delta.total_contribution,
                delta_ending_mrr = delta.ending_mrr,
                "scenario simulated"
            );

            Ok(ScenarioOutcome {
                scenario: scenario.clone(),
                inputs,
                result,
                delta,
            })
        })
        .collect::<Result<Vec<_>, SimulationError>>()?;

    Ok(ScenarioComparison {
        model,
        horizon_months,
        baseline: baseline_result,
        scenarios: outcomes,
    })
}
