//! Static configuration consumed by the core
//!
//! The lever catalog and the input presets are data, not logic. Both can be
//! replaced by callers: the decision engine accepts any catalog slice, and a
//! `PresetCatalog` can be extended with custom entries.
//!
//! ```ignore
//! use saasplan_core::config::{PresetCatalog, default_lever_catalog};
//! use saasplan_core::decision::run_decision_engine_with_catalog;
//!
//! let presets = PresetCatalog::builtin();
//! let preset = presets.require("early_stage_plg")?;
//! let decision = run_decision_engine_with_catalog(
//!     &preset.baseline,
//!     preset.model,
//!     12,
//!     &default_lever_catalog(),
//! )?;
//! ```

mod catalog;
mod presets;

pub use catalog::default_lever_catalog;
pub use presets::{EARLY_STAGE_PLG, EARLY_STAGE_SALES_LED, Preset, PresetCatalog};
