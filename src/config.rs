//! Layered roster configuration.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HUDDLE_*` prefix, `__` as separator)
//! 2. A TOML file given by the caller (`--config`)
//! 3. The bundled 2026 roster (`data/huddle-2026.toml`)
//!
//! Figment maps `HUDDLE_PERIOD__END` -> `period.end`,
//! `HUDDLE_OUTPUT__LOCALE` -> `output.locale`, etc.
//!
//! The configuration is read-only once loaded. Personnel pools, the
//! holiday table and the override table are all part of it.

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::format::Locale;
use crate::models::{Employee, HolidayCalendar, OverrideTable};
use crate::validation::{validate_config, ValidationResult};

/// The bundled roster, used as the lowest configuration layer.
pub const BUNDLED_ROSTER: &str = include_str!("../data/huddle-2026.toml");

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "HUDDLE_";

/// Complete roster configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Generation bounds.
    pub period: PeriodConfig,
    /// The four personnel lists.
    pub pools: PoolConfig,
    /// Public holidays.
    #[serde(default)]
    pub holidays: HolidayCalendar,
    /// Manual overrides.
    #[serde(default)]
    pub overrides: OverrideTable,
    /// Presentation and export defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Generation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    /// Start anchor. Generation begins on the first Monday on or after it.
    pub start: NaiveDate,
    /// Inclusive cutoff for week start dates.
    pub end: NaiveDate,
}

/// Personnel lists, in rotation order.
///
/// The Lead pool is `general_leads` followed by `lower_priority_leads`;
/// the Co-Lead pool is `priority_co_leads` followed by `general_co_leads`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Leads rotated first.
    #[serde(default)]
    pub general_leads: Vec<Employee>,
    /// Leads rotated after the general leads.
    #[serde(default)]
    pub lower_priority_leads: Vec<Employee>,
    /// Co-Leads rotated first.
    #[serde(default)]
    pub priority_co_leads: Vec<Employee>,
    /// Co-Leads rotated after the priority co-leads.
    #[serde(default)]
    pub general_co_leads: Vec<Employee>,
}

/// Presentation and export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Date display locale.
    #[serde(default)]
    pub locale: Locale,
    /// Prefix exported CSV with a UTF-8 byte-order mark.
    #[serde(default = "default_bom")]
    pub bom: bool,
    /// Default export file name.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_bom() -> bool {
    true
}

fn default_export_file() -> String {
    "division_huddle_schedule.csv".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            bom: default_bom(),
            export_file: default_export_file(),
        }
    }
}

impl PoolConfig {
    /// Combined Lead pool in rotation order.
    pub fn lead_pool(&self) -> Vec<Employee> {
        self.general_leads
            .iter()
            .chain(&self.lower_priority_leads)
            .cloned()
            .collect()
    }

    /// Combined Co-Lead pool in rotation order.
    pub fn co_lead_pool(&self) -> Vec<Employee> {
        self.priority_co_leads
            .iter()
            .chain(&self.general_co_leads)
            .cloned()
            .collect()
    }

    /// Every employee across all four lists.
    pub fn all(&self) -> impl Iterator<Item = &Employee> {
        self.general_leads
            .iter()
            .chain(&self.lower_priority_leads)
            .chain(&self.priority_co_leads)
            .chain(&self.general_co_leads)
    }
}

impl RosterConfig {
    /// The bundled roster alone, without file or environment layers.
    pub fn builtin() -> Result<Self, ConfigError> {
        Figment::from(Toml::string(BUNDLED_ROSTER))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration from all layers.
    ///
    /// `path`, when given, must exist. Does not validate; see
    /// [`RosterConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(path)?.extract().map_err(ConfigError::from)
    }

    /// Load configuration and reject it if validation finds any problem.
    pub fn load_validated(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Toml::string(BUNDLED_ROSTER));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound {
                    path: path.display().to_string(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Checks the configuration for structural problems.
    pub fn validate(&self) -> ValidationResult {
        validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeRef;
    use figment::Jail;

    #[test]
    fn test_builtin_roster_loads() {
        let config = RosterConfig::builtin().unwrap();
        assert_eq!(config.period.start, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
        assert_eq!(config.period.end, NaiveDate::from_ymd_opt(2027, 1, 31).unwrap());
        assert_eq!(config.pools.general_leads.len(), 29);
        assert_eq!(config.pools.lower_priority_leads.len(), 5);
        assert_eq!(config.pools.priority_co_leads.len(), 27);
        assert_eq!(config.pools.general_co_leads.len(), 36);
        assert_eq!(config.holidays.len(), 20);
        assert_eq!(config.overrides.lead.len(), 4);
        assert_eq!(config.overrides.co_lead_swaps.len(), 2);
        assert_eq!(config.output.locale, Locale::Thai);
        assert!(config.output.bom);
    }

    #[test]
    fn test_builtin_roster_is_valid() {
        let config = RosterConfig::builtin().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pool_concatenation_order() {
        let config = RosterConfig::builtin().unwrap();
        let leads = config.pools.lead_pool();
        assert_eq!(leads.len(), 34);
        assert_eq!(leads[0].id, "GM01");
        assert_eq!(leads[29].id, "LM01");

        let co_leads = config.pools.co_lead_pool();
        assert_eq!(co_leads.len(), 63);
        assert_eq!(co_leads[0].id, "PH01");
        assert_eq!(co_leads[27].id, "GH01");
        assert_eq!(config.pools.all().count(), 97);
    }

    #[test]
    fn test_env_overrides_file_and_bundle() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "roster.toml",
                r#"
                [period]
                start = "2026-03-01"
                end = "2026-06-30"

                [output]
                locale = "en"
                "#,
            )?;
            jail.set_env("HUDDLE_PERIOD__END", "2026-04-30");

            let config = RosterConfig::load(Some(Path::new("roster.toml"))).unwrap();
            assert_eq!(config.period.start, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
            assert_eq!(config.period.end, NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
            assert_eq!(config.output.locale, Locale::English);
            // Untouched sections come from the bundle.
            assert_eq!(config.pools.general_leads.len(), 29);
            Ok(())
        });
    }

    #[test]
    fn test_file_replaces_override_table() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "roster.toml",
                r#"
                [overrides]
                lead = [{ week = 3, employee = { name = "ราตรี" } }]
                co_lead_swaps = []
                "#,
            )?;

            let config = RosterConfig::load(Some(Path::new("roster.toml"))).unwrap();
            assert_eq!(config.overrides.lead.len(), 1);
            assert_eq!(
                config.overrides.lead[0].employee,
                EmployeeRef::Name("ราตรี".into())
            );
            assert!(config.overrides.co_lead_swaps.is_empty());
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_file() {
        let err = RosterConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_validated_rejects_empty_pool() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "roster.toml",
                r#"
                [pools]
                priority_co_leads = []
                general_co_leads = []
                "#,
            )?;

            let err = RosterConfig::load_validated(Some(Path::new("roster.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            Ok(())
        });
    }
}
