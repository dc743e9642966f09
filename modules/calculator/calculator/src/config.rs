//! Configuration for the calculator module.
//!
//! Sources are layered lowest to highest: built-in defaults, an optional
//! YAML file, then `CALCULATOR_*` environment variables.
//!
//! ```yaml
//! domain_policy: strict   # or "ieee"
//! max_fraction_digits: 14
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the environment variables read by [`CalculatorConfig::load`].
pub const ENV_PREFIX: &str = "CALCULATOR_";

/// Keys read from the environment after [`ENV_PREFIX`] is stripped. Other
/// `CALCULATOR_*` variables are ignored.
const ENV_KEYS: [&str; 2] = ["domain_policy", "max_fraction_digits"];

/// Largest precision that still carries information for an `f64`.
pub const MAX_FRACTION_DIGITS: u8 = 17;

/// How divide and sqrt treat inputs outside their domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Return `CalculatorError::DivisionByZero` / `CalculatorError::Domain`.
    #[default]
    Strict,
    /// Return the IEEE 754 result: infinity or NaN.
    Ieee,
}

impl DomainPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Ieee => "ieee",
        }
    }
}

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Domain violation handling for divide and sqrt.
    pub domain_policy: DomainPolicy,

    /// Maximum number of fraction digits shown for a result.
    pub max_fraction_digits: u8,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            domain_policy: DomainPolicy::Strict,
            max_fraction_digits: 14,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to load configuration: {0}")]
    Load(#[source] Box<figment::Error>),

    #[error("max_fraction_digits must be at most {MAX_FRACTION_DIGITS}, got {value}")]
    InvalidFractionDigits { value: u8 },
}

impl CalculatorConfig {
    /// Load configuration from defaults, an optional YAML file, and the
    /// environment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `path` is given but does not exist
    /// - `Load` if a source cannot be parsed or contains unknown fields
    /// - `InvalidFractionDigits` if the loaded precision is out of range
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))?;

        config.validate()?;
        tracing::debug!(
            domain_policy = config.domain_policy.as_str(),
            max_fraction_digits = config.max_fraction_digits,
            "calculator configuration loaded"
        );
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// - `InvalidFractionDigits` if `max_fraction_digits` exceeds
    ///   [`MAX_FRACTION_DIGITS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::InvalidFractionDigits {
                value: self.max_fraction_digits,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = CalculatorConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, CalculatorConfig::default());
            assert_eq!(config.domain_policy, DomainPolicy::Strict);
            assert_eq!(config.max_fraction_digits, 14);
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "calculator.yaml",
                "domain_policy: ieee\nmax_fraction_digits: 4\n",
            )?;
            let config = CalculatorConfig::load(Some(Path::new("calculator.yaml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.domain_policy, DomainPolicy::Ieee);
            assert_eq!(config.max_fraction_digits, 4);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("calculator.yaml", "max_fraction_digits: 4\n")?;
            jail.set_env("CALCULATOR_MAX_FRACTION_DIGITS", "2");
            jail.set_env("CALCULATOR_DOMAIN_POLICY", "ieee");
            let config = CalculatorConfig::load(Some(Path::new("calculator.yaml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.max_fraction_digits, 2);
            assert_eq!(config.domain_policy, DomainPolicy::Ieee);
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_prefixed_env_vars_are_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("CALCULATOR_HOME", "/opt/calc");
            jail.set_env("CALCULATOR_LOG", "trace");
            jail.set_env("CALCULATOR_MAX_FRACTION_DIGITS", "3");
            let config = CalculatorConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.max_fraction_digits, 3);
            assert_eq!(config.domain_policy, DomainPolicy::Strict);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_is_reported() {
        Jail::expect_with(|_jail| {
            let err = CalculatorConfig::load(Some(Path::new("absent.yaml")));
            assert!(matches!(err, Err(ConfigError::NotFound { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("calculator.yaml", "precision: 3\n")?;
            let err = CalculatorConfig::load(Some(Path::new("calculator.yaml")));
            assert!(matches!(err, Err(ConfigError::Load(_))));
            Ok(())
        });
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("calculator.yaml", "domain_policy: lenient\n")?;
            let err = CalculatorConfig::load(Some(Path::new("calculator.yaml")));
            assert!(matches!(err, Err(ConfigError::Load(_))));
            Ok(())
        });
    }

    #[test]
    fn test_out_of_range_precision_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("CALCULATOR_MAX_FRACTION_DIGITS", "18");
            let err = CalculatorConfig::load(None);
            assert!(matches!(
                err,
                Err(ConfigError::InvalidFractionDigits { value: 18 })
            ));
            Ok(())
        });
    }
}
