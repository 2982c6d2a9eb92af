//! Configuration for waymark
//!
//! Configuration is read from `waymark.toml` (in the data directory, or an
//! explicit path). Every field has a default, so the file is optional.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, WaymarkError};
use crate::search::{Guidance, SearchOptions, Variant};
use crate::tuning::TuningOptions;

pub use types::{
    DataConfig, ReportConfig, SearchConfig, TuningConfig, WaymarkConfig, CONFIG_FILE_NAME,
    DEFAULT_ENERGY_BUDGET, DEFAULT_ENERGY_WEIGHT, DEFAULT_SOURCE, DEFAULT_TARGET,
    DEFAULT_TUNING_STEPS,
};

impl WaymarkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WaymarkConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `waymark.toml` in `data_dir` when it
    /// exists, else the defaults
    pub fn discover(data_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(WaymarkError::not_found("config file", path.display()));
            }
            tracing::debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        let path = Self::default_path(data_dir);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "load_config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tuning.steps == 0 {
            bail_invalid!("tuning.steps", "0 (must be at least 1)");
        }
        if self.tuning.heuristics.is_empty() {
            bail_invalid!("tuning.heuristics", "[] (list at least one heuristic)");
        }
        if !self.search.energy_budget.is_finite() || self.search.energy_budget < 0.0 {
            bail_invalid!("search.energy_budget", self.search.energy_budget);
        }
        if !self.search.energy_weight.is_finite() || self.search.energy_weight < 0.0 {
            bail_invalid!("search.energy_weight", self.search.energy_weight);
        }
        for (context, guidance) in [
            ("report.astar.weight", &self.report.astar),
            ("report.budget_astar.weight", &self.report.budget_astar),
            ("report.budget_astar_alt.weight", &self.report.budget_astar_alt),
        ] {
            if !guidance.weight.is_finite() || guidance.weight < 0.0 {
                bail_invalid!(context, guidance.weight);
            }
        }
        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            source: self.search.source.clone(),
            target: self.search.target.clone(),
            energy_budget: self.search.energy_budget,
            energy_weight: self.search.energy_weight,
        }
    }

    pub fn tuning_options(&self) -> TuningOptions {
        TuningOptions {
            steps: self.tuning.steps,
            heuristics: self.tuning.heuristics.clone(),
        }
    }

    /// Configured guidance for an informed variant; `None` for UCS variants
    pub fn guidance_for(&self, variant: Variant) -> Option<Guidance> {
        match variant {
            Variant::AStar => Some(self.report.astar),
            Variant::BudgetAStar => Some(self.report.budget_astar),
            Variant::BudgetAStarAlt => Some(self.report.budget_astar_alt),
            Variant::Ucs | Variant::BudgetUcs | Variant::EnergyWeightedUcs => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WaymarkConfig::default();
        assert_eq!(config.search.source, "1");
        assert_eq!(config.search.target, "50");
        assert_eq!(config.search.energy_budget, 287_932.0);
        assert_eq!(config.search.energy_weight, 0.1);
        assert_eq!(config.data.graph, "G.json");
        assert_eq!(config.data.coordinates, "Coord.json");
        assert_eq!(config.tuning.steps, 100);
        assert_eq!(config.tuning.heuristics, Heuristic::ALL.to_vec());
        assert_eq!(config.report.astar, Guidance::new(Heuristic::Octile, 1.0));
        assert_eq!(
            config.report.budget_astar_alt,
            Guidance::new(Heuristic::Manhattan, 0.89)
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = WaymarkConfig::default();
        config.search.source = "A".to_string();
        config.search.energy_budget = 12.5;
        config.tuning.heuristics = vec![Heuristic::Chebyshev];
        config.save(&path).unwrap();

        let loaded = WaymarkConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_negative_report_weight_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "[report.astar]\nheuristic = \"octile\"\nweight = -3.0\n",
        )
        .unwrap();

        let err = WaymarkConfig::load(&path).unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidValue { ref context, .. } if context == "report.astar.weight"));
    }

    #[test]
    fn test_non_finite_report_weight_rejected() {
        let mut config = WaymarkConfig::default();
        config.report.budget_astar_alt.weight = f64::NAN;
        assert!(config.validate().is_err());

        config.report.budget_astar_alt.weight = 0.0;
        config.report.budget_astar.weight = f64::INFINITY;
        assert!(config.validate().is_err());

        config.report.budget_astar.weight = 0.76;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[search]\ntarget = \"D\"\n").unwrap();

        let config = WaymarkConfig::load(&path).unwrap();
        assert_eq!(config.search.target, "D");
        assert_eq!(config.search.source, "1");
        assert_eq!(config.data, DataConfig::default());
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_report_guidance_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "[report.astar]\nheuristic = \"euclidean\"\nweight = 0.5\n",
        )
        .unwrap();

        let config = WaymarkConfig::load(&path).unwrap();
        assert_eq!(
            config.guidance_for(Variant::AStar),
            Some(Guidance::new(Heuristic::Euclidean, 0.5))
        );
        assert_eq!(config.guidance_for(Variant::BudgetUcs), None);
    }

    #[test]
    fn test_discover_without_file_is_default() {
        let dir = tempdir().unwrap();
        let config = WaymarkConfig::discover(dir.path(), None).unwrap();
        assert_eq!(config, WaymarkConfig::default());
    }

    #[test]
    fn test_discover_reads_data_dir_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[search]\nsource = \"7\"\n",
        )
        .unwrap();

        let config = WaymarkConfig::discover(dir.path(), None).unwrap();
        assert_eq!(config.search.source, "7");
    }

    #[test]
    fn test_discover_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = WaymarkConfig::discover(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, WaymarkError::NotFound { .. }));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[tuning]\nsteps = 0\n").unwrap();

        let err = WaymarkConfig::load(&path).unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidValue { .. }));
    }

    #[test]
    fn test_search_options_from_config() {
        let mut config = WaymarkConfig::default();
        config.search.target = "9".to_string();
        let opts = config.search_options();
        assert_eq!(opts.source, "1");
        assert_eq!(opts.target, "9");
        assert_eq!(opts.energy_budget, DEFAULT_ENERGY_BUDGET);
        assert_eq!(opts.energy_weight, DEFAULT_ENERGY_WEIGHT);
    }
}
