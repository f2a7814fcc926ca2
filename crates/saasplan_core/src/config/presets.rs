//! Named baseline presets
//!
//! Presets seed realistic early-stage starting points. They are plain data;
//! every value can be overridden before the core is invoked.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::{BaselineInputs, BusinessModel};

pub const EARLY_STAGE_PLG: &str = "early_stage_plg";
pub const EARLY_STAGE_SALES_LED: &str = "early_stage_sales_led";

/// A named starting point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub description: String,
    pub model: BusinessModel,
    pub baseline: BaselineInputs,
}

impl BaselineInputs {
    /// Typical self-serve SaaS focused on product and retention
    pub fn plg_default() -> Self {
        Self {
            sessions_per_month: 8_000.0,
            mql_rate: 0.03,
            cost_per_mql: 22.0,
            marketing_spend_fixed: 0.0,
            use_cost_per_mql: true,

            // Unused in PLG
            mql_to_sql_rate: 0.0,
            sql_to_customer_rate: 0.0,
            sales_cycle_days: 0.0,
            sales_cost_per_sql: 0.0,

            activation_rate: 0.35,
            trial_to_paid_rate: 0.12,

            arpa_month: 90.0,
            logo_churn_monthly: 0.04,
            gross_margin: 0.82,
            expansion_rate_monthly: 0.005,

            onboarding_hours_per_customer: 1.8,
            support_hours_per_customer_month: 0.35,
            ops_cost_per_hour: 38.0,
            hours_per_fte_month: 140.0,
        }
    }

    /// B2B SaaS with demo-driven sales and little automation
    pub fn sales_led_default() -> Self {
        Self {
            sessions_per_month: 5_000.0,
            mql_rate: 0.02,
            cost_per_mql: 45.0,
            marketing_spend_fixed: 0.0,
            use_cost_per_mql: true,

            mql_to_sql_rate: 0.28,
            sql_to_customer_rate: 0.18,
            sales_cycle_days: 45.0,
            sales_cost_per_sql: 35.0,

            // Unused in sales-led
            activation_rate: 0.0,
            trial_to_paid_rate: 0.0,

            arpa_month: 280.0,
            logo_churn_monthly: 0.025,
            gross_margin: 0.78,
            expansion_rate_monthly: 0.01,

            onboarding_hours_per_customer: 3.2,
            support_hours_per_customer_month: 0.25,
            ops_cost_per_hour: 42.0,
            hours_per_fte_month: 140.0,
        }
    }

    /// Built-in baseline for a business model
    pub fn default_for(model: BusinessModel) -> Self {
        match model {
            BusinessModel::Plg => Self::plg_default(),
            BusinessModel::SalesLed => Self::sales_led_default(),
        }
    }
}

/// Ordered preset collection with lookup by id
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
    by_id: FxHashMap<String, usize>,
}

impl PresetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The two built-in early-stage presets
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Preset {
            id: EARLY_STAGE_PLG.to_string(),
            label: "Early-stage PLG SaaS (DACH)".to_string(),
            description: "Typical self-serve SaaS with a focus on product and retention"
                .to_string(),
            model: BusinessModel::Plg,
            baseline: BaselineInputs::plg_default(),
        });
        catalog.insert(Preset {
            id: EARLY_STAGE_SALES_LED.to_string(),
            label: "Early-stage sales-led SaaS (DACH)".to_string(),
            description: "B2B SaaS with demo sales and little automation".to_string(),
            model: BusinessModel::SalesLed,
            baseline: BaselineInputs::sales_led_default(),
        });
        catalog
    }

    /// Add a preset, replacing any existing one with the same id
    pub fn insert(&mut self, preset: Preset) {
        match self.by_id.get(&preset.id) {
            Some(&idx) => self.presets[idx] = preset,
            None => {
                self.by_id.insert(preset.id.clone(), self.presets.len());
                self.presets.push(preset);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.by_id.get(id).map(|&idx| &self.presets[idx])
    }

    /// Like `get`, but reports a missing id as an error
    pub fn require(&self, id: &str) -> Result<&Preset, SimulationError> {
        self.get(id)
            .ok_or_else(|| SimulationError::UnknownPreset(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
