//! Decision engine evaluation loop
//!
//! Runs the simulator once on the baseline and once per applicable lever,
//! then hands the raw deltas to the scoring rules.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::apply::apply_levers;
use crate::config::default_lever_catalog;
use crate::error::SimulationError;
use crate::model::{BaselineInputs, Breakeven, BusinessModel, LeverDefinition, SimulationResult};
use crate::simulation::simulate_business_case;

use super::result::{DecisionResult, LeverImpact};
use super::scoring::score_candidates;

/// Recommend a lever from the default catalog
pub fn run_decision_engine(
    baseline: &BaselineInputs,
    model: BusinessModel,
    horizon_months: u32,
) -> Result<DecisionResult, SimulationError> {
    run_decision_engine_with_catalog(baseline, model, horizon_months, &default_lever_catalog())
}

/// Recommend a lever from `catalog`.
///
/// Levers not applicable to `model` are skipped. An empty candidate set
/// yields a result without a primary lever.
pub fn run_decision_engine_with_catalog(
    baseline: &BaselineInputs,
    model: BusinessModel,
    horizon_months: u32,
    catalog: &[LeverDefinition],
) -> Result<DecisionResult, SimulationError> {
    let reference = simulate_business_case(baseline, model, horizon_months)?;

    let candidates: Vec<&LeverDefinition> =
        catalog.iter().filter(|l| l.applies_to(model)).collect();

    tracing::debug!(
        ?model,
        horizon_months,
        candidates = candidates.len(),
        catalog = catalog.len(),
        "running decision engine"
    );

    if candidates.is_empty() {
        return Ok(DecisionResult::empty());
    }

    let impacts = evaluate_candidates(baseline, model, horizon_months, &reference, &candidates)?;
    let result = DecisionResult::from_ranking(score_candidates(impacts));

    for lever in &result.ranking {
        tracing::debug!(
            rank = lever.rank,
            field = %lever.definition.field,
            delta_contribution = lever.impact.delta_contribution,
            delta_breakeven = lever.impact.delta_breakeven,
            delta_ops_load = lever.impact.delta_ops_load,
            score = lever.score,
            "scored lever"
        );
    }

    if result.guardrail_applied
        && let Some(primary) = &result.primary
    {
        tracing::debug!(
            promoted = %primary.definition.field,
            "marketing lever ranked first but a product/ops lever is close; preferring product/ops"
        );
    }

    Ok(result)
}

type Evaluated = (LeverDefinition, LeverImpact);

fn evaluate_candidates(
    baseline: &BaselineInputs,
    model: BusinessModel,
    horizon_months: u32,
    reference: &SimulationResult,
    candidates: &[&LeverDefinition],
) -> Result<Vec<Evaluated>, SimulationError> {
    let evaluate = |lever: &&LeverDefinition| -> Result<Evaluated, SimulationError> {
        let inputs = apply_levers(baseline, &[lever.change()]);
        let result = simulate_business_case(&inputs, model, horizon_months)?;
        let impact = impact_against(reference, &result, horizon_months);
        Ok(((*lever).clone(), impact))
    };

    #[cfg(feature = "parallel")]
    let impacts = candidates.par_iter().map(evaluate).collect();

    #[cfg(not(feature = "parallel"))]
    let impacts = candidates.iter().map(evaluate).collect();

    impacts
}

/// Deltas of `result` against `reference`
fn impact_against(
    reference: &SimulationResult,
    result: &SimulationResult,
    horizon_months: u32,
) -> LeverImpact {
    let reference_breakeven = comparable_breakeven(reference.aggregates.breakeven, horizon_months);
    let breakeven = comparable_breakeven(result.aggregates.breakeven, horizon_months);

    LeverImpact {
        delta_contribution: result.aggregates.total_contribution
            - reference.aggregates.total_contribution,
        delta_breakeven: breakeven - reference_breakeven,
        delta_ops_load: result.aggregates.peak_ops_hours - reference.aggregates.peak_ops_hours,
    }
}

/// "Never" counts as one month past the horizon so deltas stay finite
fn comparable_breakeven(breakeven: Breakeven, horizon_months: u32) -> i64 {
    match breakeven {
        Breakeven::Month(m) => i64::from(m),
        Breakeven::Never => i64::from(horizon_months) + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdjustmentKind, InputField, LeverCategory};

    fn pricing_lever(multiplier: f64) -> Vec<LeverDefinition> {
        vec![LeverDefinition::new(
            InputField::ArpaMonth,
            "Pricing",
            LeverCategory::UnitEconomics,
            AdjustmentKind::Multiplier,
            multiplier,
        )]
    }

    fn breakeven_with(
        baseline: &BaselineInputs,
        model: BusinessModel,
        horizon: u32,
        catalog: &[LeverDefinition],
    ) -> Breakeven {
        let inputs = apply_levers(baseline, &[catalog[0].change()]);
        let result = simulate_business_case(&inputs, model, horizon).unwrap();
        result.aggregates.breakeven
    }

    #[test]
    fn test_comparable_breakeven() {
        assert_eq!(comparable_breakeven(Breakeven::Month(4), 12), 4);
        assert_eq!(comparable_breakeven(Breakeven::Never, 12), 13);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let baseline = BaselineInputs::plg_default();
        assert_eq!(
            run_decision_engine(&baseline, BusinessModel::Plg, 0),
            Err(SimulationError::InvalidHorizon(0))
        );
    }

    #[test]
    fn test_identity_lever_has_zero_impact() {
        let baseline = BaselineInputs::plg_default();
        let catalog = pricing_lever(1.0);

        let result =
            run_decision_engine_with_catalog(&baseline, BusinessModel::Plg, 12, &catalog).unwrap();
        let primary = result.primary.unwrap();
        assert_eq!(primary.impact, LeverImpact::default());
        assert!(result.secondary.is_empty());
    }

    #[test]
    fn test_lever_reaching_breakeven_inside_horizon() {
        let baseline = BaselineInputs::plg_default();
        let model = BusinessModel::Plg;
        let catalog = pricing_lever(10.0);

        let reference = simulate_business_case(&baseline, model, 12).unwrap();
        assert_eq!(reference.aggregates.breakeven, Breakeven::Never);
        let month = breakeven_with(&baseline, model, 12, &catalog)
            .month()
            .expect("tenfold pricing breaks even within the horizon");

        let result = run_decision_engine_with_catalog(&baseline, model, 12, &catalog).unwrap();
        let impact = result.primary.unwrap().impact;
        // Never counts as month 13
        assert_eq!(impact.delta_breakeven, i64::from(month) - 13);
        assert!(impact.delta_breakeven < 0);
    }

    #[test]
    fn test_lever_losing_breakeven_inside_horizon() {
        let baseline = BaselineInputs::sales_led_default();
        let model = BusinessModel::SalesLed;
        let catalog = pricing_lever(0.1);

        let reference = simulate_business_case(&baseline, model, 24).unwrap();
        let month = reference.aggregates.breakeven.month().unwrap();
        assert_eq!(
            breakeven_with(&baseline, model, 24, &catalog),
            Breakeven::Never
        );

        let result = run_decision_engine_with_catalog(&baseline, model, 24, &catalog).unwrap();
        let impact = result.primary.unwrap().impact;
        assert_eq!(impact.delta_breakeven, 25 - i64::from(month));
        assert!(impact.delta_breakeven > 0);
    }
}
