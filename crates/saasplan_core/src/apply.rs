//! Lever application
//!
//! Produces a perturbed copy of the baseline inputs. Changes are applied in
//! list order, then every rate field is clamped into [0, 1]. Non-rate fields
//! (costs, hours, ARPA, volumes) are left exactly as computed, even when an
//! aggressive reduction drives them negative.

use crate::model::{BaselineInputs, InputField, LeverChange};

/// Apply `changes` to a copy of `base`
#[must_use]
pub fn apply_levers(base: &BaselineInputs, changes: &[LeverChange]) -> BaselineInputs {
    let mut inputs = *base;

    for change in changes {
        let slot = inputs.get_mut(change.field);
        *slot = change.adjust(*slot);
    }

    clamp_rates(&mut inputs);
    inputs
}

/// Clamp every rate field into [0, 1]
fn clamp_rates(inputs: &mut BaselineInputs) {
    for field in InputField::RATES {
        let slot = inputs.get_mut(field);
        *slot = slot.clamp(0.0, 1.0);
    }
}
