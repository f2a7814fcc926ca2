//! SaaS business case simulation library
//!
//! This crate models the month-by-month trajectory of a subscription business
//! and recommends the single operational change with the best payoff.
//! It supports:
//! - Self-serve (PLG) and sales-led acquisition funnels
//! - Variable (cost-per-lead) or fixed marketing budgets
//! - Logo churn, expansion revenue and operational load
//! - Typed lever application with rate clamping
//! - Multi-criteria lever ranking with a marketing guardrail
//! - Bundled strategy scenarios compared against the baseline
//!
//! # Example
//!
//! ```ignore
//! use saasplan_core::{BaselineInputs, BusinessModel, run_decision_engine, simulate_business_case};
//!
//! let inputs = BaselineInputs::plg_default();
//! let result = simulate_business_case(&inputs, BusinessModel::Plg, 12)?;
//! println!("ending MRR: {:.0}", result.aggregates.ending_mrr);
//!
//! let decision = run_decision_engine(&inputs, BusinessModel::Plg, 12)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod apply;
pub mod decision;
pub mod error;
pub mod scenario;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use apply::apply_levers;
pub use decision::{DecisionResult, run_decision_engine, run_decision_engine_with_catalog};
pub use error::SimulationError;
pub use model::{
    BaselineInputs, Breakeven, BusinessModel, InputField, LeverChange, LeverDefinition,
    SimulationResult,
};
pub use scenario::{ScenarioDefinition, compare_scenarios};
pub use simulation::simulate_business_case;
