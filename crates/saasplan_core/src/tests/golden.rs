//! Golden reference run: early-stage PLG preset over 12 months
//!
//! Inputs: 8000 sessions, 3% lead conversion, 22 per lead, 35% activation,
//! 12% trial-to-paid, ARPA 90, 82% margin, 4% churn, 0.5% expansion,
//! 1.8h onboarding, 0.35h support, 38 per hour.

use super::assert_close;
use crate::model::{BaselineInputs, Breakeven, BusinessModel};
use crate::simulation::simulate_business_case;

const TOL: f64 = 1e-6;

fn golden_run() -> crate::model::SimulationResult {
    simulate_business_case(&BaselineInputs::plg_default(), BusinessModel::Plg, 12).unwrap()
}

#[test]
fn test_golden_month_one() {
    let result = golden_run();
    let m1 = result.month(1).unwrap();

    // 240 leads -> 84 activated -> 10.08 customers
    assert_eq!(m1.month, 1);
    assert_close(m1.new_customers, 10.08, TOL);
    assert_close(m1.total_customers, 10.08, TOL);
    assert_close(m1.mrr, 907.2, TOL);
    assert_close(m1.gross_profit, 743.904, TOL);
    assert_close(m1.marketing_cost, 5_280.0, TOL);
    assert_close(m1.sales_cost, 0.0, TOL);
    // 18.144 onboarding + 3.528 support
    assert_close(m1.ops_hours_total, 21.672, TOL);
    assert_close(m1.ops_cost, 823.536, TOL);
    assert_close(m1.contribution, -5_359.632, TOL);
    assert_close(m1.cumulative_contribution, -5_359.632, TOL);
}

#[test]
fn test_golden_month_two() {
    let result = golden_run();
    let m2 = result.month(2).unwrap();

    // 10.08 prior, 0.4032 churned, 9.6768 retained
    assert_close(m2.new_customers, 10.08, TOL);
    assert_close(m2.total_customers, 19.7568, TOL);
    // 1778.112 base + 4.35456 expansion
    assert_close(m2.mrr, 1_782.46656, TOL);
    assert_close(m2.gross_profit, 1_461.622_579_2, TOL);
    assert_close(m2.ops_hours_total, 25.05888, TOL);
    assert_close(m2.ops_cost, 952.23744, TOL);
    assert_close(m2.contribution, -4_770.614_860_8, TOL);
    assert_close(m2.cumulative_contribution, -10_130.246_860_8, TOL);
}

#[test]
fn test_golden_final_month_and_aggregates() {
    let result = golden_run();
    assert_eq!(result.horizon(), 12);

    let m12 = result.month(12).unwrap();
    assert_close(m12.total_customers, 97.597_141_152_9, 1e-6);
    assert_close(m12.contribution, -32.551_135_164_2, 1e-6);

    let agg = &result.aggregates;
    assert_close(agg.ending_mrr, 8_823.125_417_279_7, 1e-6);
    assert_close(agg.total_contribution, -30_185.811_476_058_9, 1e-6);
    assert_close(agg.peak_ops_hours, 52.302_999_403_5, 1e-6);
    assert_eq!(agg.breakeven, Breakeven::Never);
}

#[test]
fn test_golden_contribution_improves_every_month() {
    let result = golden_run();
    for pair in result.months.windows(2) {
        assert!(
            pair[1].contribution > pair[0].contribution,
            "month {} did not improve on month {}",
            pair[1].month,
            pair[0].month
        );
    }
}

#[test]
fn test_golden_breaks_even_later() {
    let result =
        simulate_business_case(&BaselineInputs::plg_default(), BusinessModel::Plg, 36).unwrap();
    let Breakeven::Month(month) = result.aggregates.breakeven else {
        panic!("PLG preset should break even within 36 months");
    };
    assert!(month > 12);
    assert!(result.month(month).unwrap().cumulative_contribution >= 0.0);
    assert!(result.month(month - 1).unwrap().cumulative_contribution < 0.0);
}
