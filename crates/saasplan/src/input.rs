//! Loading baseline inputs from presets and YAML files
//!
//! An input file holds one business case:
//!
//! ```yaml
//! model: sales_led
//! horizon_months: 24
//! baseline:
//!   sessions_per_month: 5000
//!   mql_rate: 0.02
//!   cost_per_mql: 45
//!   # ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use saasplan_core::config::{Preset, PresetCatalog};
use saasplan_core::{BaselineInputs, BusinessModel};
use serde::{Deserialize, Serialize};

/// Horizon used when neither the command line nor the input file sets one
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Error types for loading input files
#[derive(Debug)]
pub enum InputError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(msg) => write!(f, "IO error: {}", msg),
            InputError::Parse(msg) => write!(f, "Parse error: {}", msg),
            InputError::Invalid(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

/// One business case as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    pub model: BusinessModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_months: Option<u32>,
    pub baseline: BaselineInputs,
}

impl InputDocument {
    pub fn from_preset(preset: &Preset) -> Self {
        Self {
            model: preset.model,
            horizon_months: None,
            baseline: preset.baseline,
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, InputError> {
        let doc: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| InputError::Parse(format!("Failed to parse input: {}", e)))?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|e| {
            InputError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Reject values the simulator cannot work with
    pub fn validate(&self) -> Result<(), InputError> {
        let bad = self.baseline.non_finite_fields();
        if !bad.is_empty() {
            let names: Vec<_> = bad.iter().map(|f| f.key()).collect();
            return Err(InputError::Invalid(format!("non-finite value in {}", names.join(", "))));
        }
        if self.horizon_months == Some(0) {
            return Err(InputError::Invalid("horizon_months must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Where the baseline comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Preset(String),
    File(PathBuf),
}

/// A fully resolved business case ready to simulate
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    /// Preset id or file path, for report headers
    pub source: String,
    pub model: BusinessModel,
    pub horizon_months: u32,
    pub baseline: BaselineInputs,
}

/// Resolve the input for one command.
///
/// Command-line overrides win over the input file, which wins over
/// `DEFAULT_HORIZON_MONTHS`.
pub fn resolve_input(
    source: &InputSource,
    presets: &PresetCatalog,
    model_override: Option<BusinessModel>,
    horizon_override: Option<u32>,
) -> color_eyre::Result<ResolvedInput> {
    use color_eyre::eyre::WrapErr;

    let (label, doc) = match source {
        InputSource::Preset(id) => (id.clone(), InputDocument::from_preset(presets.require(id)?)),
        InputSource::File(path) => (
            path.display().to_string(),
            InputDocument::load(path)
                .wrap_err_with(|| format!("could not load input file {}", path.display()))?,
        ),
    };

    let resolved = ResolvedInput {
        source: label,
        model: model_override.unwrap_or(doc.model),
        horizon_months: horizon_override
            .or(doc.horizon_months)
            .unwrap_or(DEFAULT_HORIZON_MONTHS),
        baseline: doc.baseline,
    };

    tracing::debug!(
        source = %resolved.source,
        model = %resolved.model,
        horizon_months = resolved.horizon_months,
        "input resolved"
    );

    Ok(resolved)
}
