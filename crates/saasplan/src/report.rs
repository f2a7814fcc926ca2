//! Report rendering
//!
//! Each report is a plain struct that serializes to JSON and implements
//! `Display` for the terminal.

use std::fmt;

use saasplan_core::config::PresetCatalog;
use saasplan_core::decision::DecisionResult;
use saasplan_core::scenario::ScenarioComparison;
use saasplan_core::{BaselineInputs, BusinessModel, SimulationResult};
use serde::Serialize;

use crate::input::ResolvedInput;
use crate::util::format::{
    format_currency, format_month_delta, format_signed_currency, format_signed_hours,
};

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render a report in the requested format
pub fn render<R: Serialize + fmt::Display>(
    report: &R,
    format: OutputFormat,
) -> color_eyre::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, title: &str, input: &ResolvedInput) -> fmt::Result {
    writeln!(
        f,
        "{title}: {} ({}, {} months)",
        input.source,
        input.model.label(),
        input.horizon_months
    )?;
    writeln!(f)
}

// ============================================================================
// simulate
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    pub source: &'a str,
    pub model: BusinessModel,
    pub horizon_months: u32,
    pub inputs: &'a BaselineInputs,
    pub result: &'a SimulationResult,
    pub peak_ops_fte: Option<f64>,
    #[serde(skip)]
    input: &'a ResolvedInput,
}

impl<'a> SimulationReport<'a> {
    pub fn new(input: &'a ResolvedInput, result: &'a SimulationResult) -> Self {
        Self {
            source: &input.source,
            model: input.model,
            horizon_months: input.horizon_months,
            inputs: &input.baseline,
            result,
            peak_ops_fte: result.peak_ops_fte(input.baseline.hours_per_fte_month),
            input,
        }
    }
}

impl fmt::Display for SimulationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "Business case", self.input)?;

        writeln!(
            f,
            "{:>5} {:>9} {:>10} {:>11} {:>13} {:>13} {:>8}",
            "Month", "New", "Customers", "MRR", "Contribution", "Cumulative", "Ops h"
        )?;
        for m in &self.result.months {
            writeln!(
                f,
                "{:>5} {:>9.1} {:>10.1} {:>11} {:>13} {:>13} {:>8.1}",
                m.month,
                m.new_customers,
                m.total_customers,
                format_currency(m.mrr),
                format_currency(m.contribution),
                format_currency(m.cumulative_contribution),
                m.ops_hours_total
            )?;
        }

        let agg = &self.result.aggregates;
        writeln!(f)?;
        writeln!(
            f,
            "Ending MRR:          {}",
            format_currency(agg.ending_mrr)
        )?;
        writeln!(
            f,
            "Ending customers:    {:.1}",
            self.result.ending_customers()
        )?;
        writeln!(
            f,
            "Total contribution:  {}",
            format_currency(agg.total_contribution)
        )?;
        writeln!(f, "Breakeven:           {}", agg.breakeven)?;
        match self.peak_ops_fte {
            Some(fte) => writeln!(
                f,
                "Peak ops load:       {:.1} h ({fte:.2} FTE)",
                agg.peak_ops_hours
            ),
            None => writeln!(f, "Peak ops load:       {:.1} h", agg.peak_ops_hours),
        }
    }
}

// ============================================================================
// decide
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DecisionReport<'a> {
    pub source: &'a str,
    pub model: BusinessModel,
    pub horizon_months: u32,
    pub decision: &'a DecisionResult,
    #[serde(skip)]
    input: &'a ResolvedInput,
}

impl<'a> DecisionReport<'a> {
    pub fn new(input: &'a ResolvedInput, decision: &'a DecisionResult) -> Self {
        Self {
            source: &input.source,
            model: input.model,
            horizon_months: input.horizon_months,
            decision,
            input,
        }
    }
}

impl fmt::Display for DecisionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "Decision", self.input)?;

        let Some(primary) = &self.decision.primary else {
            return writeln!(
                f,
                "No significant improvement possible with the current levers."
            );
        };

        writeln!(f, "Biggest economic lever: {}", primary.definition.label)?;
        writeln!(
            f,
            "  Category:       {}",
            primary.definition.category.label()
        )?;
        writeln!(f, "  Confidence:     {}", self.decision.confidence)?;
        writeln!(
            f,
            "  Contribution:   {}",
            format_signed_currency(primary.impact.delta_contribution)
        )?;
        writeln!(
            f,
            "  Breakeven:      {}",
            format_month_delta(primary.impact.delta_breakeven)
        )?;
        writeln!(
            f,
            "  Peak ops load:  {}",
            format_signed_hours(primary.impact.delta_ops_load)
        )?;
        if self.decision.guardrail_applied
            && let Some(leader) = self.decision.ranking.first()
        {
            writeln!(
                f,
                "  Guardrail:      preferred over \"{}\" (ranked first)",
                leader.definition.label
            )?;
        }
        writeln!(f)?;
        writeln!(f, "  \"{}\"", primary.definition.category.rationale())?;

        if !self.decision.secondary.is_empty() {
            writeln!(f)?;
            writeln!(f, "Also worth considering:")?;
            for lever in &self.decision.secondary {
                writeln!(f, "  #{} {}", lever.rank, lever.definition.label)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Ranking:")?;
        for lever in &self.decision.ranking {
            writeln!(
                f,
                "  {:>2}. {:<36} {:<15} {:.3}",
                lever.rank,
                lever.definition.label,
                lever.definition.category.label(),
                lever.score
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// compare
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub source: &'a str,
    pub comparison: &'a ScenarioComparison,
    #[serde(skip)]
    input: &'a ResolvedInput,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(input: &'a ResolvedInput, comparison: &'a ScenarioComparison) -> Self {
        Self {
            source: &input.source,
            comparison,
            input,
        }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "Scenario comparison", self.input)?;

        writeln!(
            f,
            "{:<20} {:>11} {:>13} {:>13} {:>10} {:>8}",
            "Scenario", "Ending MRR", "Contribution", "vs baseline", "Breakeven", "Peak h"
        )?;

        let base = &self.comparison.baseline.aggregates;
        writeln!(
            f,
            "{:<20} {:>11} {:>13} {:>13} {:>10} {:>8.1}",
            "Baseline",
            format_currency(base.ending_mrr),
            format_currency(base.total_contribution),
            "-",
            base.breakeven.to_string(),
            base.peak_ops_hours
        )?;

        for outcome in &self.comparison.scenarios {
            let agg = &outcome.result.aggregates;
            writeln!(
                f,
                "{:<20} {:>11} {:>13} {:>13} {:>10} {:>8.1}",
                outcome.scenario.name,
                format_currency(agg.ending_mrr),
                format_currency(agg.total_contribution),
                format_signed_currency(outcome.delta.total_contribution),
                agg.breakeven.to_string(),
                agg.peak_ops_hours
            )?;
        }

        if let Some(best) = self.comparison.best_by_contribution() {
            writeln!(f)?;
            writeln!(f, "Best by contribution: {}", best.scenario.name)?;
        }
        Ok(())
    }
}

// ============================================================================
// presets
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PresetListReport<'a> {
    presets: Vec<&'a saasplan_core::config::Preset>,
}

impl<'a> PresetListReport<'a> {
    pub fn new(catalog: &'a PresetCatalog) -> Self {
        Self {
            presets: catalog.iter().collect(),
        }
    }
}

impl fmt::Display for PresetListReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for preset in &self.presets {
            writeln!(f, "{}", preset.id)?;
            writeln!(f, "  {} [{}]", preset.label, preset.model)?;
            writeln!(f, "  {}", preset.description)?;
        }
        Ok(())
    }
}
