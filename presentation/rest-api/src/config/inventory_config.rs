use std::env;

use business::domain::fridge_item::severity::{SeverityError, SeverityPolicy, SeverityThresholds};
use business::domain::shared::value_objects::CreatedBy;

const DEFAULT_CREATED_BY: &str = "joe";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_number: {0}")]
    InvalidNumber(&'static str),
    #[error("config.invalid_bool: {0}")]
    InvalidBool(&'static str),
    #[error("config.invalid_created_by")]
    InvalidCreatedBy,
    #[error(transparent)]
    Severity(#[from] SeverityError),
}

/// Inventory settings: who new items are attributed to and how day counts
/// map to severity tiers.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub created_by: CreatedBy,
    pub severity: SeverityPolicy,
}

impl InventoryConfig {
    /// Load inventory configuration from environment variables
    ///
    /// Environment variables:
    /// - FRIDGE_CREATED_BY: attribution tag for new items (default: "joe")
    /// - EXPIRY_CRITICAL_DAYS / EXPIRY_WARNING_DAYS (default: 3 / 7)
    /// - USE_BY_CRITICAL_DAYS / USE_BY_WARNING_DAYS (default: 1 / 3)
    /// - EXPIRES_TODAY_TIER: report "expires today" as its own tier (default: false)
    ///
    /// # Errors
    /// Returns error if FRIDGE_CREATED_BY is set but blank. Invalid severity
    /// values are logged and replaced by the default policy.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let created_by =
            lookup("FRIDGE_CREATED_BY").unwrap_or_else(|| DEFAULT_CREATED_BY.to_string());
        let created_by = CreatedBy::new(created_by).ok_or(ConfigError::InvalidCreatedBy)?;

        let severity = match parse_severity_policy(&lookup) {
            Ok(policy) => policy,
            Err(e) => {
                tracing::warn!("{}, using the default severity policy", e);
                SeverityPolicy::default()
            }
        };

        Ok(Self {
            created_by,
            severity,
        })
    }
}

fn parse_severity_policy(
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<SeverityPolicy, ConfigError> {
    let defaults = SeverityPolicy::default();

    let expiry = SeverityThresholds::new(
        parse_days(lookup, "EXPIRY_CRITICAL_DAYS", defaults.expiry.critical_days())?,
        parse_days(lookup, "EXPIRY_WARNING_DAYS", defaults.expiry.warning_days())?,
    )?;
    let use_by = SeverityThresholds::new(
        parse_days(lookup, "USE_BY_CRITICAL_DAYS", defaults.use_by.critical_days())?,
        parse_days(lookup, "USE_BY_WARNING_DAYS", defaults.use_by.warning_days())?,
    )?;
    let expires_today_tier = match lookup("EXPIRES_TODAY_TIER") {
        None => defaults.expires_today_tier,
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool("EXPIRES_TODAY_TIER"))?,
    };

    Ok(SeverityPolicy {
        expiry,
        use_by,
        expires_today_tier,
    })
}

fn parse_days(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidNumber(key)),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_use_defaults_when_nothing_set() {
        let config = InventoryConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.created_by.as_str(), "joe");
        assert_eq!(config.severity, SeverityPolicy::default());
    }

    #[test]
    fn should_read_created_by_and_thresholds() {
        let config = InventoryConfig::from_lookup(lookup_from(&[
            ("FRIDGE_CREATED_BY", "lydia"),
            ("EXPIRY_CRITICAL_DAYS", "0"),
            ("EXPIRY_WARNING_DAYS", "3"),
            ("USE_BY_CRITICAL_DAYS", "2"),
            ("USE_BY_WARNING_DAYS", "4"),
            ("EXPIRES_TODAY_TIER", "true"),
        ]))
        .unwrap();

        assert_eq!(config.created_by.as_str(), "lydia");
        assert_eq!(config.severity.expiry, SeverityThresholds::new(0, 3).unwrap());
        assert_eq!(config.severity.use_by, SeverityThresholds::new(2, 4).unwrap());
        assert!(config.severity.expires_today_tier);
    }

    #[test]
    fn should_fall_back_when_number_invalid() {
        let lookup = lookup_from(&[("EXPIRY_WARNING_DAYS", "a week")]);

        assert_eq!(
            parse_severity_policy(&lookup),
            Err(ConfigError::InvalidNumber("EXPIRY_WARNING_DAYS"))
        );
        assert_eq!(
            InventoryConfig::from_lookup(lookup).unwrap().severity,
            SeverityPolicy::default()
        );
    }

    #[test]
    fn should_fall_back_when_thresholds_inconsistent() {
        let lookup = lookup_from(&[("USE_BY_CRITICAL_DAYS", "9")]);

        assert_eq!(
            parse_severity_policy(&lookup),
            Err(ConfigError::Severity(SeverityError::CriticalAboveWarning))
        );
        assert_eq!(
            InventoryConfig::from_lookup(lookup).unwrap().severity,
            SeverityPolicy::default()
        );
    }

    #[test]
    fn should_reject_blank_created_by() {
        let result = InventoryConfig::from_lookup(lookup_from(&[("FRIDGE_CREATED_BY", "  ")]));

        assert_eq!(result.unwrap_err(), ConfigError::InvalidCreatedBy);
    }

    #[test]
    fn should_parse_common_boolean_spellings() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool(" no "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
