//! Baseline input record and field addressing
//!
//! `BaselineInputs` is the flat set of current-state assumptions for one
//! business. Levers address its numeric fields through `InputField`, a closed
//! enumeration with read/write accessors, so every perturbation stays typed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Go-to-market model used to interpret the conversion fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessModel {
    /// Self-serve: signup -> activation -> trial-to-paid
    #[serde(alias = "self_serve")]
    Plg,
    /// Sales-led: MQL -> SQL -> closed-won
    SalesLed,
}

impl BusinessModel {
    pub fn label(self) -> &'static str {
        match self {
            BusinessModel::Plg => "PLG (self-serve)",
            BusinessModel::SalesLed => "Sales-led (B2B)",
        }
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessModel::Plg => write!(f, "plg"),
            BusinessModel::SalesLed => write!(f, "sales_led"),
        }
    }
}

impl FromStr for BusinessModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "plg" | "self_serve" => Ok(BusinessModel::Plg),
            "sales_led" | "sales" => Ok(BusinessModel::SalesLed),
            other => Err(format!("unknown business model '{other}'")),
        }
    }
}

/// Current-state assumptions for one business.
///
/// Rate fields are expected in [0, 1] but the record does not enforce it;
/// `apply_levers` clamps them after every perturbation. Unknown keys are
/// rejected so a misspelled optional field cannot silently fall back to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaselineInputs {
    // === Acquisition ===
    pub sessions_per_month: f64,
    pub mql_rate: f64,
    pub cost_per_mql: f64,
    /// Used instead of `cost_per_mql` when `use_cost_per_mql` is false
    #[serde(default)]
    pub marketing_spend_fixed: f64,
    #[serde(default = "default_true")]
    pub use_cost_per_mql: bool,

    // === Sales-led conversion ===
    #[serde(default)]
    pub mql_to_sql_rate: f64,
    #[serde(default)]
    pub sql_to_customer_rate: f64,
    /// Informational only, the monthly model has no pipeline delay
    #[serde(default)]
    pub sales_cycle_days: f64,
    #[serde(default)]
    pub sales_cost_per_sql: f64,

    // === Self-serve conversion ===
    #[serde(default)]
    pub activation_rate: f64,
    #[serde(default)]
    pub trial_to_paid_rate: f64,

    // === Monetization & retention ===
    pub arpa_month: f64,
    pub logo_churn_monthly: f64,
    pub gross_margin: f64,
    #[serde(default)]
    pub expansion_rate_monthly: f64,

    // === Operations ===
    pub onboarding_hours_per_customer: f64,
    pub support_hours_per_customer_month: f64,
    pub ops_cost_per_hour: f64,
    #[serde(default = "default_hours_per_fte")]
    pub hours_per_fte_month: f64,
}

fn default_true() -> bool {
    true
}

fn default_hours_per_fte() -> f64 {
    140.0
}

impl BaselineInputs {
    /// Read a numeric field
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::SessionsPerMonth => self.sessions_per_month,
            InputField::MqlRate => self.mql_rate,
            InputField::CostPerMql => self.cost_per_mql,
            InputField::MarketingSpendFixed => self.marketing_spend_fixed,
            InputField::MqlToSqlRate => self.mql_to_sql_rate,
            InputField::SqlToCustomerRate => self.sql_to_customer_rate,
            InputField::SalesCycleDays => self.sales_cycle_days,
            InputField::SalesCostPerSql => self.sales_cost_per_sql,
            InputField::ActivationRate => self.activation_rate,
            InputField::TrialToPaidRate => self.trial_to_paid_rate,
            InputField::ArpaMonth => self.arpa_month,
            InputField::LogoChurnMonthly => self.logo_churn_monthly,
            InputField::GrossMargin => self.gross_margin,
            InputField::ExpansionRateMonthly => self.expansion_rate_monthly,
            InputField::OnboardingHoursPerCustomer => self.onboarding_hours_per_customer,
            InputField::SupportHoursPerCustomerMonth => self.support_hours_per_customer_month,
            InputField::OpsCostPerHour => self.ops_cost_per_hour,
            InputField::HoursPerFteMonth => self.hours_per_fte_month,
        }
    }

    /// Mutable slot for a numeric field
    pub fn get_mut(&mut self, field: InputField) -> &mut f64 {
        match field {
            InputField::SessionsPerMonth => &mut self.sessions_per_month,
            InputField::MqlRate => &mut self.mql_rate,
            InputField::CostPerMql => &mut self.cost_per_mql,
            InputField::MarketingSpendFixed => &mut self.marketing_spend_fixed,
            InputField::MqlToSqlRate => &mut self.mql_to_sql_rate,
            InputField::SqlToCustomerRate => &mut self.sql_to_customer_rate,
            InputField::SalesCycleDays => &mut self.sales_cycle_days,
            InputField::SalesCostPerSql => &mut self.sales_cost_per_sql,
            InputField::ActivationRate => &mut self.activation_rate,
            InputField::TrialToPaidRate => &mut self.trial_to_paid_rate,
            InputField::ArpaMonth => &mut self.arpa_month,
            InputField::LogoChurnMonthly => &mut self.logo_churn_monthly,
            InputField::GrossMargin => &mut self.gross_margin,
            InputField::ExpansionRateMonthly => &mut self.expansion_rate_monthly,
            InputField::OnboardingHoursPerCustomer => &mut self.onboarding_hours_per_customer,
            InputField::SupportHoursPerCustomerMonth => &mut self.support_hours_per_customer_month,
            InputField::OpsCostPerHour => &mut self.ops_cost_per_hour,
            InputField::HoursPerFteMonth => &mut self.hours_per_fte_month,
        }
    }

    /// Fields holding NaN or infinite values
    pub fn non_finite_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .iter()
            .copied()
            .filter(|field| !self.get(*field).is_finite())
            .collect()
    }
}

/// How a field's value is bounded after a lever is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fraction clamped into [0, 1]
    Rate,
    /// Count, currency or hours; left as computed
    Unbounded,
}

/// Addressable numeric field of `BaselineInputs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    SessionsPerMonth,
    MqlRate,
    CostPerMql,
    MarketingSpendFixed,
    MqlToSqlRate,
    SqlToCustomerRate,
    SalesCycleDays,
    SalesCostPerSql,
    ActivationRate,
    TrialToPaidRate,
    ArpaMonth,
    LogoChurnMonthly,
    GrossMargin,
    ExpansionRateMonthly,
    OnboardingHoursPerCustomer,
    SupportHoursPerCustomerMonth,
    OpsCostPerHour,
    HoursPerFteMonth,
}

impl InputField {
    pub const ALL: [InputField; 18] = [
        InputField::SessionsPerMonth,
        InputField::MqlRate,
        InputField::CostPerMql,
        InputField::MarketingSpendFixed,
        InputField::MqlToSqlRate,
        InputField::SqlToCustomerRate,
        InputField::SalesCycleDays,
        InputField::SalesCostPerSql,
        InputField::ActivationRate,
        InputField::TrialToPaidRate,
        InputField::ArpaMonth,
        InputField::LogoChurnMonthly,
        InputField::GrossMargin,
        InputField::ExpansionRateMonthly,
        InputField::OnboardingHoursPerCustomer,
        InputField::SupportHoursPerCustomerMonth,
        InputField::OpsCostPerHour,
        InputField::HoursPerFteMonth,
    ];

    /// Fields clamped into [0, 1] after lever application
    pub const RATES: [InputField; 8] = [
        InputField::MqlRate,
        InputField::MqlToSqlRate,
        InputField::SqlToCustomerRate,
        InputField::ActivationRate,
        InputField::TrialToPaidRate,
        InputField::LogoChurnMonthly,
        InputField::GrossMargin,
        InputField::ExpansionRateMonthly,
    ];

    /// Every new field must be classified here before it compiles.
    pub const fn kind(self) -> FieldKind {
        match self {
            InputField::MqlRate
            | InputField::MqlToSqlRate
            | InputField::SqlToCustomerRate
            | InputField::ActivationRate
            | InputField::TrialToPaidRate
            | InputField::LogoChurnMonthly
            | InputField::GrossMargin
            | InputField::ExpansionRateMonthly => FieldKind::Rate,
            InputField::SessionsPerMonth
            | InputField::CostPerMql
            | InputField::MarketingSpendFixed
            | InputField::SalesCycleDays
            | InputField::SalesCostPerSql
            | InputField::ArpaMonth
            | InputField::OnboardingHoursPerCustomer
            | InputField::SupportHoursPerCustomerMonth
            | InputField::OpsCostPerHour
            | InputField::HoursPerFteMonth => FieldKind::Unbounded,
        }
    }

    pub const fn is_rate(self) -> bool {
        matches!(self.kind(), FieldKind::Rate)
    }

    /// Conversion stages that only exist in the self-serve funnel
    pub const fn is_self_serve_conversion(self) -> bool {
        matches!(
            self,
            InputField::ActivationRate | InputField::TrialToPaidRate
        )
    }

    /// Snake-case identifier, identical to the serialized key
    pub fn key(self) -> &'static str {
        match self {
            InputField::SessionsPerMonth => "sessions_per_month",
            InputField::MqlRate => "mql_rate",
            InputField::CostPerMql => "cost_per_mql",
            InputField::MarketingSpendFixed => "marketing_spend_fixed",
            InputField::MqlToSqlRate => "mql_to_sql_rate",
            InputField::SqlToCustomerRate => "sql_to_customer_rate",
            InputField::SalesCycleDays => "sales_cycle_days",
            InputField::SalesCostPerSql => "sales_cost_per_sql",
            InputField::ActivationRate => "activation_rate",
            InputField::TrialToPaidRate => "trial_to_paid_rate",
            InputField::ArpaMonth => "arpa_month",
            InputField::LogoChurnMonthly => "logo_churn_monthly",
            InputField::GrossMargin => "gross_margin",
            InputField::ExpansionRateMonthly => "expansion_rate_monthly",
            InputField::OnboardingHoursPerCustomer => "onboarding_hours_per_customer",
            InputField::SupportHoursPerCustomerMonth => "support_hours_per_customer_month",
            InputField::OpsCostPerHour => "ops_cost_per_hour",
            InputField::HoursPerFteMonth => "hours_per_fte_month",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
