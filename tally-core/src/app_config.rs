use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::{CoreError, CoreResult};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingRules,
    #[serde(default)]
    pub inventory: InventoryRules,
    #[serde(default)]
    pub milking: MilkingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingRules {
    #[serde(default = "default_markup_rate")]
    pub markup_rate: f64,
    /// Estimate numbers are allocated starting at `estimate_number_base + 1`.
    #[serde(default = "default_estimate_number_base")]
    pub estimate_number_base: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryRules {
    /// Units on hand for every component category at startup
    #[serde(default = "default_initial_stock")]
    pub initial_stock: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MilkingRules {
    #[serde(default = "default_days")]
    pub days: usize,
    #[serde(default = "default_min_cow_id")]
    pub min_cow_id: u32,
    #[serde(default = "default_max_cow_id")]
    pub max_cow_id: u32,
}

fn default_markup_rate() -> f64 { 1.2 }
fn default_estimate_number_base() -> u64 { 1000 }
fn default_initial_stock() -> u32 { 10 }
fn default_days() -> usize { 7 }
fn default_min_cow_id() -> u32 { 100 }
fn default_max_cow_id() -> u32 { 999 }

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            markup_rate: default_markup_rate(),
            estimate_number_base: default_estimate_number_base(),
        }
    }
}

impl Default for InventoryRules {
    fn default() -> Self {
        Self {
            initial_stock: default_initial_stock(),
        }
    }
}

impl Default for MilkingRules {
    fn default() -> Self {
        Self {
            days: default_days(),
            min_cow_id: default_min_cow_id(),
            max_cow_id: default_max_cow_id(),
        }
    }
}

impl Config {
    /// Load from `config/` under the current directory, honoring `RUN_MODE`
    pub fn load() -> CoreResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("."), &run_mode)
    }

    /// Layer `<root>/config/default`, `<root>/config/<run_mode>`,
    /// `<root>/config/local`, then `TALLY_` environment variables.
    pub fn load_from(root: &Path, run_mode: &str) -> CoreResult<Self> {
        tracing::info!("Loading configuration from {} for run mode {}", root.display(), run_mode);

        let dir = root.join("config");
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&file(run_mode)).required(false))
            // Local file, never checked in
            .add_source(config::File::with_name(&file("local")).required(false))
            // Eg.. `TALLY_PRICING__MARKUP_RATE=1.5`
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an inline TOML document, filling unspecified keys with defaults.
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.pricing.markup_rate.is_finite() || self.pricing.markup_rate < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "markup_rate must be a non-negative number, got {}",
                self.pricing.markup_rate
            )));
        }
        if self.milking.days == 0 {
            return Err(CoreError::ValidationError("milking schedule needs at least one day".to_string()));
        }
        if self.milking.min_cow_id > self.milking.max_cow_id {
            return Err(CoreError::ValidationError(format!(
                "cow id range is empty: {}..={}",
                self.milking.min_cow_id, self.milking.max_cow_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pricing.markup_rate, 1.2);
        assert_eq!(config.pricing.estimate_number_base, 1000);
        assert_eq!(config.inventory.initial_stock, 10);
        assert_eq!(config.milking.days, 7);
        assert_eq!(config.milking.min_cow_id, 100);
        assert_eq!(config.milking.max_cow_id, 999);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [pricing]
            markup_rate = 1.5

            [inventory]
            initial_stock = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.markup_rate, 1.5);
        assert_eq!(config.pricing.estimate_number_base, 1000);
        assert_eq!(config.inventory.initial_stock, 2);
        assert_eq!(config.milking.days, 7);
    }

    #[test]
    fn test_rejects_empty_cow_id_range() {
        let result = Config::from_toml_str(
            r#"
            [milking]
            min_cow_id = 500
            max_cow_id = 400
            "#,
        );

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    fn write_config(root: &Path, name: &str, contents: &str) {
        let dir = root.join("config");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{}.toml", name)), contents).unwrap();
    }

    // Only test in the crate that touches TALLY_ variables
    #[test]
    fn test_load_from_layers_files_and_env() {
        let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap();
        let shipped = Config::load_from(workspace, "test").unwrap();
        assert_eq!(shipped.pricing.markup_rate, 1.2);
        assert_eq!(shipped.pricing.estimate_number_base, 1000);
        assert_eq!(shipped.inventory.initial_stock, 10);
        assert_eq!(shipped.milking.days, 7);

        let root = tempfile::tempdir().unwrap();
        write_config(
            root.path(),
            "default",
            "[pricing]\nmarkup_rate = 1.3\nestimate_number_base = 2000\n\n[inventory]\ninitial_stock = 4\n",
        );
        write_config(root.path(), "staging", "[inventory]\ninitial_stock = 6\n");
        write_config(root.path(), "local", "[milking]\ndays = 5\n");

        let config = Config::load_from(root.path(), "staging").unwrap();
        assert_eq!(config.pricing.markup_rate, 1.3);
        assert_eq!(config.pricing.estimate_number_base, 2000);
        assert_eq!(config.inventory.initial_stock, 6);
        assert_eq!(config.milking.days, 5);
        assert_eq!(config.milking.max_cow_id, 999);

        // Missing run mode file is optional
        let config = Config::load_from(root.path(), "production").unwrap();
        assert_eq!(config.inventory.initial_stock, 4);

        env::set_var("TALLY_PRICING__MARKUP_RATE", "1.5");
        let result = Config::load_from(root.path(), "staging");
        env::remove_var("TALLY_PRICING__MARKUP_RATE");

        let config = result.unwrap();
        assert_eq!(config.pricing.markup_rate, 1.5);
        assert_eq!(config.pricing.estimate_number_base, 2000);
        assert_eq!(config.inventory.initial_stock, 6);
    }

    #[test]
    fn test_load_from_requires_default_file() {
        let root = tempfile::tempdir().unwrap();
        let err = Config::load_from(root.path(), "development").unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn test_rejects_zero_days() {
        let mut config = Config::default();
        config.milking.days = 0;
        assert!(config.validate().is_err());
    }
}
