//! Command-line interface definition and dispatch

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use saasplan_core::config::PresetCatalog;
use saasplan_core::scenario::ScenarioDefinition;
use saasplan_core::{
    BusinessModel, compare_scenarios, run_decision_engine, simulate_business_case,
};

use crate::input::{InputSource, ResolvedInput, resolve_input};
use crate::report::{
    ComparisonReport, DecisionReport, OutputFormat, PresetListReport, SimulationReport, render,
};
use crate::util::io::atomic_write;

#[derive(Parser, Debug)]
#[command(name = "saasplan")]
#[command(about = "SaaS business case simulator and lever recommendation engine")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Write logs to saasplan.log in this directory instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate the business case month by month
    Simulate(AnalysisArgs),
    /// Recommend the lever with the best payoff
    Decide(AnalysisArgs),
    /// Compare the built-in strategy scenarios against the baseline
    Compare(AnalysisArgs),
    /// List the built-in presets
    Presets {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct AnalysisArgs {
    /// Built-in preset id (see `saasplan presets`)
    #[arg(
        short,
        long,
        conflicts_with = "input",
        default_value = "early_stage_plg"
    )]
    pub preset: String,

    /// YAML file with model, optional horizon_months and baseline
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the business model (plg, sales_led)
    #[arg(short, long, value_parser = parse_model)]
    pub model: Option<BusinessModel>,

    /// Months to simulate [default: 12, or the input file's horizon_months]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub horizon: Option<u32>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_model(s: &str) -> Result<BusinessModel, String> {
    s.parse()
}

impl AnalysisArgs {
    pub fn source(&self) -> InputSource {
        match &self.input {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Preset(self.preset.clone()),
        }
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    fn resolve(&self, presets: &PresetCatalog) -> color_eyre::Result<ResolvedInput> {
        resolve_input(&self.source(), presets, self.model, self.horizon)
    }
}

/// Run one command and return the rendered report
pub fn execute(command: &Command, presets: &PresetCatalog) -> color_eyre::Result<String> {
    match command {
        Command::Simulate(args) => {
            let input = args.resolve(presets)?;
            let result =
                simulate_business_case(&input.baseline, input.model, input.horizon_months)?;
            render(&SimulationReport::new(&input, &result), args.format())
        }
        Command::Decide(args) => {
            let input = args.resolve(presets)?;
            let decision = run_decision_engine(&input.baseline, input.model, input.horizon_months)?;
            tracing::info!(
                primary = decision
                    .primary
                    .as_ref()
                    .map_or("none", |p| p.definition.field.key()),
                confidence = %decision.confidence,
                guardrail_applied = decision.guardrail_applied,
                "decision computed"
            );
            render(&DecisionReport::new(&input, &decision), args.format())
        }
        Command::Compare(args) => {
            let input = args.resolve(presets)?;
            let comparison = compare_scenarios(
                &input.baseline,
                input.model,
                input.horizon_months,
                &ScenarioDefinition::builtin(),
            )?;
            render(&ComparisonReport::new(&input, &comparison), args.format())
        }
        Command::Presets { json } => {
            let format = if *json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            render(&PresetListReport::new(presets), format)
        }
    }
}

/// Execute the command and deliver its report to stdout or `--output`
pub fn run(cli: &Cli) -> color_eyre::Result<()> {
    let presets = PresetCatalog::builtin();
    let report = execute(&cli.command, &presets)?;

    let output = match &cli.command {
        Command::Simulate(args) | Command::Decide(args) | Command::Compare(args) => {
            args.output.as_deref()
        }
        Command::Presets { .. } => None,
    };

    match output {
        Some(path) => {
            atomic_write(path, &report)
                .wrap_err_with(|| format!("could not write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{report}"),
    }
    Ok(())
}
