mod inputs;
mod levers;
mod results;

pub use inputs::{BaselineInputs, BusinessModel, FieldKind, InputField};
pub use levers::{AdjustmentKind, LeverCategory, LeverChange, LeverDefinition};
pub use results::{Aggregates, Breakeven, SimulationMonth, SimulationResult};
