use serde::{Deserialize, Serialize};

use crate::catalog::{ClientRequisitions, StaticCatalog};
use crate::error::AppError;
use crate::purchase_order::DEFAULT_MAX_BUDGET;

/// The configuration bundled with the app.
const BUILTIN_CONFIG: &str = include_str!("../config.toml");

/// Tunables for form validation.
///
/// Every field has a default so that a missing `[form]` section keeps the
/// stock behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSettings {
    #[serde(default = "default_max_budget")]
    pub max_budget: f64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            max_budget: default_max_budget(),
        }
    }
}

fn default_max_budget() -> f64 {
    DEFAULT_MAX_BUDGET
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSettings,
    #[serde(default)]
    pub clients: Vec<ClientRequisitions>,
}

impl FormConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    /// The configuration compiled into the binary.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    /// The requisition catalog described by `[[clients]]`.
    pub fn catalog(&self) -> StaticCatalog {
        StaticCatalog::new(self.clients.clone())
    }
}
