use crate::error::SimulationError;
use crate::model::{
    Aggregates, BaselineInputs, Breakeven, BusinessModel, SimulationMonth, SimulationResult,
};

/// Funnel output for one month, before retention is applied
#[derive(Debug, Clone, Copy)]
struct Acquisition {
    mqls: f64,
    new_customers: f64,
    sales_cost: f64,
}

fn acquire(inputs: &BaselineInputs, model: BusinessModel) -> Acquisition {
    let mqls = inputs.sessions_per_month * inputs.mql_rate;

    match model {
        BusinessModel::SalesLed => {
            let sqls = mqls * inputs.mql_to_sql_rate;
            Acquisition {
                mqls,
                new_customers: sqls * inputs.sql_to_customer_rate,
                sales_cost: sqls * inputs.sales_cost_per_sql,
            }
        }
        BusinessModel::Plg => {
            let activated = mqls * inputs.activation_rate;
            Acquisition {
                mqls,
                new_customers: activated * inputs.trial_to_paid_rate,
                sales_cost: 0.0,
            }
        }
    }
}

fn monthly_marketing_cost(inputs: &BaselineInputs, mqls: f64) -> f64 {
    if inputs.use_cost_per_mql {
        mqls * inputs.cost_per_mql
    } else {
        inputs.marketing_spend_fixed
    }
}

/// Run the monthly business case.
///
/// The only carried state is the customer count at the end of the previous
/// month, starting from zero. Returns `InvalidHorizon` for a zero horizon.
pub fn simulate_business_case(
    inputs: &BaselineInputs,
    model: BusinessModel,
    horizon_months: u32,
) -> Result<SimulationResult, SimulationError> {
    if horizon_months == 0 {
        return Err(SimulationError::InvalidHorizon(horizon_months));
    }

    let mut months = Vec::with_capacity(horizon_months as usize);
    let mut prior_customers = 0.0;
    let mut cumulative_contribution = 0.0;

    for month in 1..=horizon_months {
        let acquisition = acquire(inputs, model);
        let new_customers = acquisition.new_customers;

        let churned = prior_customers * inputs.logo_churn_monthly;
        let retained = prior_customers - churned;
        let total_customers = retained + new_customers;

        // Expansion needs an existing relationship, so only the retained cohort upsells
        let base_mrr = total_customers * inputs.arpa_month;
        let expansion = retained * inputs.arpa_month * inputs.expansion_rate_monthly;
        let mrr = base_mrr + expansion;

        let gross_profit = mrr * inputs.gross_margin;
        let marketing_cost = monthly_marketing_cost(inputs, acquisition.mqls);

        let onboarding_hours = new_customers * inputs.onboarding_hours_per_customer;
        let support_hours = total_customers * inputs.support_hours_per_customer_month;
        let ops_hours_total = onboarding_hours + support_hours;
        let ops_cost = ops_hours_total * inputs.ops_cost_per_hour;

        let contribution = gross_profit - marketing_cost - acquisition.sales_cost - ops_cost;
        cumulative_contribution += contribution;

        tracing::trace!(
            month,
            new_customers,
            total_customers,
            mrr,
            contribution,
            cumulative_contribution,
            "simulated month"
        );

        months.push(SimulationMonth {
            month,
            new_customers,
            total_customers,
            mrr,
            gross_profit,
            marketing_cost,
            sales_cost: acquisition.sales_cost,
            ops_cost,
            contribution,
            cumulative_contribution,
            ops_hours_total,
        });

        prior_customers = total_customers;
    }

    let aggregates = aggregate(&months);

    tracing::debug!(
        ?model,
        horizon_months,
        ending_mrr = aggregates.ending_mrr,
        total_contribution = aggregates.total_contribution,
        breakeven = %aggregates.breakeven,
        "business case simulated"
    );

    Ok(SimulationResult { months, aggregates })
}

fn aggregate(months: &[SimulationMonth]) -> Aggregates {
    let ending_mrr = months.last().map_or(0.0, |m| m.mrr);
    let total_contribution = months.iter().map(|m| m.contribution).sum();
    let peak_ops_hours = months
        .iter()
        .map(|m| m.ops_hours_total)
        .fold(f64::NEG_INFINITY, f64::max);
    let breakeven = months
        .iter()
        .find(|m| m.cumulative_contribution >= 0.0)
        .map_or(Breakeven::Never, |m| Breakeven::Month(m.month));

    Aggregates {
        ending_mrr,
        total_contribution,
        peak_ops_hours,
        breakeven,
    }
}
