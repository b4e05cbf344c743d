//! Application configuration management.
//!
//! Configuration is layered from default values, an optional TOML file and
//! environment variables, in increasing order of precedence.

use cca_solver::Limits;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// Bounds on acceptable bids and supply
    #[serde(default)]
    pub limits: Limits,

    /// Cross-checking against exhaustive enumeration
    #[serde(default)]
    pub verify: VerifyConfig,
}

/// Settings for the brute force cross-check
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct VerifyConfig {
    /// Auctions are enumerated only when both the bidder count and the
    /// largest bid length are below this threshold
    pub threshold: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self { threshold: 8 }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The given config file
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `CCA_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Accept quantities of up to 500 units
    /// export CCA_LIMITS__MAX_QUANTITY=500
    ///
    /// # Never enumerate auctions with 6 or more bidders
    /// export CCA_VERIFY__THRESHOLD=6
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        config = config.add_source(
            config::Environment::with_prefix("CCA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        let app: Self = built_config.try_deserialize()?;

        // Revenue is summed over every bidder and must not overflow
        let Limits {
            max_bidders,
            max_price,
            ..
        } = app.limits;
        if (max_bidders as u64).checked_mul(max_price).is_none() {
            return Err(anyhow::anyhow!(
                "limits allow a total revenue of {max_bidders} x {max_price}, which overflows"
            ));
        }

        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.verify.threshold, 8);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("ccauction-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[limits]\nmax_quantity = 250\n\n[verify]\nthreshold = 5").unwrap();
        drop(file);

        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.limits.max_quantity, 250);
        assert_eq!(config.limits.max_bidders, 100);
        assert_eq!(config.verify.threshold, 5);
    }

    #[test]
    fn test_rejects_overflowing_limits() {
        let path =
            std::env::temp_dir().join(format!("ccauction-price-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[limits]\nmax_price = {}", u64::MAX / 2).unwrap();
        drop(file);

        let result = AppConfig::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/ccauction.toml"))).is_err());
    }
}
