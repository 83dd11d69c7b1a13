//! Runtime configuration.
//!
//! Values come from, in increasing precedence: [`RuntimeConfig::default`],
//! then environment variables.
//!
//! | Variable | Field | Values |
//! |----------|-------|--------|
//! | `TILEARRAY_QUIET` | `quiet` | `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` |
//! | `TILEARRAY_DIMENSION_ORDER` | `default_order` | see [`DimensionOrder`]'s `FromStr` |

use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinate::{CoordinateSystem, DimensionOrder};
use crate::error::{Result, TileError};

pub const QUIET_ENV: &str = "TILEARRAY_QUIET";
pub const DIMENSION_ORDER_ENV: &str = "TILEARRAY_DIMENSION_ORDER";

/// Settings carried by a [`Runtime`](crate::runtime::Runtime).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Suppress the startup banner. On by default.
    pub quiet: bool,
    /// Ordering used by [`RuntimeConfig::coordinate_system`].
    pub default_order: DimensionOrder,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            quiet: true,
            default_order: DimensionOrder::default(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(TileError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `TileError::InvalidConfig` if a variable is set to a value
    /// that does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    ///
    /// # Example
    ///
    /// ```
    /// use tilearray::{DimensionOrder, RuntimeConfig};
    ///
    /// let config = RuntimeConfig::from_lookup(|key| match key {
    ///     "TILEARRAY_DIMENSION_ORDER" => Some("fortran".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.default_order, DimensionOrder::Increasing);
    /// assert!(!config.quiet);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(val) = lookup(QUIET_ENV) {
            config.quiet = parse_bool(QUIET_ENV, &val)?;
        }
        if let Some(val) = lookup(DIMENSION_ORDER_ENV) {
            config.default_order = val.parse().map_err(|_| TileError::InvalidConfig {
                key: DIMENSION_ORDER_ENV.to_string(),
                value: val.clone(),
            })?;
        }
        debug!(?config, "loaded runtime configuration");
        Ok(config)
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_default_order(mut self, order: DimensionOrder) -> Self {
        self.default_order = order;
        self
    }

    /// Zero-based coordinate system of rank `dim` using `default_order`.
    pub fn coordinate_system(&self, dim: usize) -> CoordinateSystem {
        CoordinateSystem::new(dim, 0, self.default_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert!(config.quiet);
        assert_eq!(config.default_order, DimensionOrder::Decreasing);
    }

    #[test]
    fn test_quiet_values() {
        for v in ["1", "true", "YES", "on"] {
            let config = RuntimeConfig::from_lookup(lookup(&[(QUIET_ENV, v)])).unwrap();
            assert!(config.quiet, "{v}");
        }
        let config = RuntimeConfig::from_lookup(lookup(&[(QUIET_ENV, "off")])).unwrap();
        assert!(!config.quiet);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            RuntimeConfig::from_lookup(lookup(&[(QUIET_ENV, "maybe")])),
            Err(TileError::InvalidConfig {
                key: QUIET_ENV.to_string(),
                value: "maybe".to_string()
            })
        );
        assert_eq!(
            RuntimeConfig::from_lookup(lookup(&[(DIMENSION_ORDER_ENV, "diagonal")])),
            Err(TileError::InvalidConfig {
                key: DIMENSION_ORDER_ENV.to_string(),
                value: "diagonal".to_string()
            })
        );
    }

    #[test]
    fn test_coordinate_system() {
        let config = RuntimeConfig::new().with_default_order(DimensionOrder::Increasing);
        assert_eq!(config.coordinate_system(3), CoordinateSystem::fortran_style(3));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RuntimeConfig = serde_json::from_str(r#"{"quiet": false}"#).unwrap();
        assert!(!config.quiet);
        assert_eq!(config.default_order, DimensionOrder::Decreasing);

        let config: RuntimeConfig =
            serde_json::from_str(r#"{"default_order": "increasing"}"#).unwrap();
        assert_eq!(config.default_order, DimensionOrder::Increasing);
        assert!(config.quiet);
    }
}
