//! Lever types
//!
//! A lever is a single named perturbation of one baseline field. The decision
//! engine evaluates each catalog entry at its default magnitude.

use serde::{Deserialize, Serialize};

use super::inputs::{BusinessModel, InputField};

/// How a change combines with the current field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// `current * value`
    Multiplier,
    /// `current + value`
    #[serde(alias = "delta_abs")]
    Additive,
}

/// One perturbation of one field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverChange {
    pub field: InputField,
    pub kind: AdjustmentKind,
    pub value: f64,
}

impl LeverChange {
    pub fn multiplier(field: InputField, value: f64) -> Self {
        Self {
            field,
            kind: AdjustmentKind::Multiplier,
            value,
        }
    }

    pub fn additive(field: InputField, value: f64) -> Self {
        Self {
            field,
            kind: AdjustmentKind::Additive,
            value,
        }
    }

    /// Apply to a single value, without clamping
    pub fn adjust(&self, current: f64) -> f64 {
        match self.kind {
            AdjustmentKind::Multiplier => current * self.value,
            AdjustmentKind::Additive => current + self.value,
        }
    }
}

/// Lever grouping used for the scaling prior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverCategory {
    Marketing,
    Sales,
    ProductOps,
    UnitEconomics,
}

impl LeverCategory {
    /// Early-stage belief that internal efficiency compounds more reliably
    /// than paid acquisition.
    pub const fn scaling_prior(self) -> f64 {
        match self {
            LeverCategory::ProductOps => 1.0,
            LeverCategory::Sales => 0.7,
            LeverCategory::UnitEconomics => 0.6,
            LeverCategory::Marketing => 0.4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeverCategory::Marketing => "marketing",
            LeverCategory::Sales => "sales",
            LeverCategory::ProductOps => "product/ops",
            LeverCategory::UnitEconomics => "unit economics",
        }
    }

    /// One-line takeaway shown next to a recommendation
    pub fn rationale(self) -> &'static str {
        match self {
            LeverCategory::ProductOps => {
                "Internal levers often beat pure external growth at an early stage."
            }
            LeverCategory::Sales => {
                "Time and process inefficiency is often more expensive here than missing leads."
            }
            LeverCategory::Marketing => {
                "Scaling marketing pays off here because the unit economics already work."
            }
            LeverCategory::UnitEconomics => {
                "Pricing and margin have the most direct effect on the result."
            }
        }
    }
}

/// Static catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverDefinition {
    pub field: InputField,
    pub label: String,
    pub category: LeverCategory,
    pub kind: AdjustmentKind,
    pub value: f64,
    #[serde(default)]
    pub sales_led_only: bool,
}

impl LeverDefinition {
    pub fn new(
        field: InputField,
        label: impl Into<String>,
        category: LeverCategory,
        kind: AdjustmentKind,
        value: f64,
    ) -> Self {
        Self {
            field,
            label: label.into(),
            category,
            kind,
            value,
            sales_led_only: false,
        }
    }

    pub fn sales_led_only(mut self) -> Self {
        self.sales_led_only = true;
        self
    }

    /// The change this lever makes at its default magnitude
    pub fn change(&self) -> LeverChange {
        LeverChange {
            field: self.field,
            kind: self.kind,
            value: self.value,
        }
    }

    /// Whether the lever is meaningful under `model`
    pub fn applies_to(&self, model: BusinessModel) -> bool {
        match model {
            BusinessModel::Plg => !self.sales_led_only,
            BusinessModel::SalesLed => !self.field.is_self_serve_conversion(),
        }
    }
}
