//! Simulation results
//!
//! Contains the month-by-month output of the business case simulator and
//! the aggregates derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One simulated month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationMonth {
    /// 1-based month index
    pub month: u32,
    pub new_customers: f64,
    /// Customers at period end
    pub total_customers: f64,
    pub mrr: f64,
    pub gross_profit: f64,
    pub marketing_cost: f64,
    pub sales_cost: f64,
    pub ops_cost: f64,
    /// Gross profit minus marketing, sales and ops cost
    pub contribution: f64,
    pub cumulative_contribution: f64,
    pub ops_hours_total: f64,
}

/// First month with non-negative cumulative contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakeven {
    Month(u32),
    Never,
}

impl Breakeven {
    pub fn month(self) -> Option<u32> {
        match self {
            Breakeven::Month(m) => Some(m),
            Breakeven::Never => None,
        }
    }
}

impl fmt::Display for Breakeven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakeven::Month(m) => write!(f, "month {m}"),
            Breakeven::Never => write!(f, "never"),
        }
    }
}

/// Summary values over the whole horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub ending_mrr: f64,
    pub total_contribution: f64,
    pub peak_ops_hours: f64,
    pub breakeven: Breakeven,
}

/// Complete result of one simulator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub months: Vec<SimulationMonth>,
    pub aggregates: Aggregates,
}

impl SimulationResult {
    /// Number of simulated months
    pub fn horizon(&self) -> u32 {
        self.months.len() as u32
    }

    /// Get a month by its 1-based index
    pub fn month(&self, month: u32) -> Option<&SimulationMonth> {
        let idx = month.checked_sub(1)? as usize;
        self.months.get(idx)
    }

    /// Peak ops load expressed in full-time equivalents
    pub fn peak_ops_fte(&self, hours_per_fte_month: f64) -> Option<f64> {
        if hours_per_fte_month > 0.0 {
            Some(self.aggregates.peak_ops_hours / hours_per_fte_month)
        } else {
            None
        }
    }

    pub fn ending_customers(&self) -> f64 {
        self.months.last().map_or(0.0, |m| m.total_customers)
    }
}
