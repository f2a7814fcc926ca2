//! Lever recommendation.
//!
//! The decision engine perturbs the baseline with one catalog lever at a time,
//! simulates each variant and compares it with the unmodified baseline on
//! three criteria:
//!
//! - total contribution over the horizon (higher is better)
//! - breakeven month, with "never" counted as `horizon + 1` (earlier is better)
//! - peak monthly operational hours (lower is better)
//!
//! Each criterion is min-max normalized across the candidate set and combined
//! with a per-category prior into one weighted score. A marketing lever only
//! stays on top when no product/ops lever reaches 85% of its score.
//!
//! ```ignore
//! use saasplan_core::decision::run_decision_engine;
//! use saasplan_core::model::{BaselineInputs, BusinessModel};
//!
//! let decision = run_decision_engine(&BaselineInputs::plg_default(), BusinessModel::Plg, 12)?;
//! if let Some(primary) = &decision.primary {
//!     println!("{} ({})", primary.definition.label, decision.confidence);
//! }
//! ```

mod engine;
mod result;
mod scoring;

pub use engine::{run_decision_engine, run_decision_engine_with_catalog};
pub use result::{Confidence, DecisionResult, LeverImpact, RankedLever, ScoredLever};
pub use scoring::{
    CONTRIBUTION_RANGE_FLOOR, GUARDRAIL_RATIO, HIGH_CONFIDENCE_GAP, MEDIUM_CONFIDENCE_GAP,
    WEIGHT_ECONOMIC, WEIGHT_OPS, WEIGHT_SCALING, WEIGHT_TIME, confidence_for,
    confidence_from_scores, normalize, score_candidates, select_primary, weighted_score,
};
