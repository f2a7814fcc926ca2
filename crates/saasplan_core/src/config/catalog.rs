//! Default lever catalog
//!
//! Each entry is evaluated alone, at its default magnitude, by the decision
//! engine. Pass a different slice to `run_decision_engine_with_catalog` to
//! substitute a custom catalog.

use crate::model::{AdjustmentKind, InputField, LeverCategory, LeverDefinition};

/// The built-in thirteen-lever catalog
pub fn default_lever_catalog() -> Vec<LeverDefinition> {
    use AdjustmentKind::{Additive, Multiplier};
    use LeverCategory::{Marketing, ProductOps, Sales, UnitEconomics};

    vec![
        // Marketing
        LeverDefinition::new(
            InputField::SessionsPerMonth,
            "Traffic increase (+15%)",
            Marketing,
            Multiplier,
            1.15,
        ),
        LeverDefinition::new(
            InputField::MqlRate,
            "MQL conversion rate (+10%)",
            Marketing,
            Multiplier,
            1.10,
        ),
        LeverDefinition::new(
            InputField::CostPerMql,
            "Cost-per-lead reduction (-15%)",
            Marketing,
            Multiplier,
            0.85,
        ),
        // Sales funnel
        LeverDefinition::new(
            InputField::MqlToSqlRate,
            "Qualification rate (+10%)",
            Sales,
            Multiplier,
            1.10,
        )
        .sales_led_only(),
        LeverDefinition::new(
            InputField::SqlToCustomerRate,
            "Win rate (+10%)",
            Sales,
            Multiplier,
            1.10,
        )
        .sales_led_only(),
        LeverDefinition::new(
            InputField::SalesCycleDays,
            "Sales cycle reduction (-15%)",
            Sales,
            Multiplier,
            0.85,
        )
        .sales_led_only(),
        // Self-serve funnel
        LeverDefinition::new(
            InputField::ActivationRate,
            "Product activation (+10%)",
            ProductOps,
            Multiplier,
            1.10,
        ),
        LeverDefinition::new(
            InputField::TrialToPaidRate,
            "Trial-to-paid (+10%)",
            ProductOps,
            Multiplier,
            1.10,
        ),
        // Unit economics & operations
        LeverDefinition::new(
            InputField::ArpaMonth,
            "Pricing optimization (+10% ARPA)",
            UnitEconomics,
            Multiplier,
            1.10,
        ),
        LeverDefinition::new(
            InputField::LogoChurnMonthly,
            "Churn reduction (-1 pt absolute)",
            ProductOps,
            Additive,
            -0.01,
        ),
        LeverDefinition::new(
            InputField::OnboardingHoursPerCustomer,
            "Onboarding automation (-30% hours)",
            ProductOps,
            Multiplier,
            0.70,
        ),
        LeverDefinition::new(
            InputField::SupportHoursPerCustomerMonth,
            "Support efficiency (-20% hours)",
            ProductOps,
            Multiplier,
            0.80,
        ),
        LeverDefinition::new(
            InputField::ExpansionRateMonthly,
            "Expansion revenue (+0.5 pt MoM)",
            UnitEconomics,
            Additive,
            0.005,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BusinessModel;

    #[test]
    fn test_catalog_shape() {
        let catalog = default_lever_catalog();
        assert_eq!(catalog.len(), 13);

        let plg = catalog
            .iter()
            .filter(|l| l.applies_to(BusinessModel::Plg))
            .count();
        let sales = catalog
            .iter()
            .filter(|l| l.applies_to(BusinessModel::SalesLed))
            .count();
        assert_eq!(plg, 10);
        assert_eq!(sales, 11);
    }

    #[test]
    fn test_catalog_fields_unique() {
        let catalog = default_lever_catalog();
        let mut fields: Vec<_> = catalog.iter().map(|l| l.field).collect();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), catalog.len());
    }
}
