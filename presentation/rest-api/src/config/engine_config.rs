use std::env;
use std::str::FromStr;
use std::time::Duration;

use business::domain::shared::cache::MAX_CACHE_TTL;
use business::domain::store::model::RankingWeights;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("config.invalid_value: {0}")]
    InvalidValue(String),
    #[error("config.invalid_ranking_weights")]
    InvalidRankingWeights,
}

/// Reads and parses an optional variable. Unset or blank yields `None`.
pub fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    parse_value(name, env::var(name).ok())
}

fn parse_value<T: FromStr>(name: &str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
    }
}

/// Default bound on one catalog fetch from the database.
pub const DEFAULT_CATALOG_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

fn fetch_timeout(secs: Option<u64>) -> Duration {
    secs.filter(|s| *s > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_CATALOG_FETCH_TIMEOUT)
}

fn ranking_weights(price: Option<f64>, distance: Option<f64>) -> Result<RankingWeights, ConfigError> {
    let defaults = RankingWeights::default();
    let weights = RankingWeights {
        price: price.unwrap_or(defaults.price),
        distance: distance.unwrap_or(defaults.distance),
    };

    let valid = |w: f64| w.is_finite() && w >= 0.0;
    if !valid(weights.price) || !valid(weights.distance) || weights.price + weights.distance <= 0.0 {
        return Err(ConfigError::InvalidRankingWeights);
    }
    Ok(weights)
}

/// Tuning knobs of the nutrition and store engines.
pub struct EngineConfig {
    pub catalog_cache_ttl: Duration,
    pub catalog_fetch_timeout: Duration,
    pub strict_ingredient_validation: bool,
    pub ranking_weights: RankingWeights,
}

impl EngineConfig {
    /// Environment variables:
    /// - CATALOG_CACHE_TTL_SECS: catalog snapshot lifetime, capped at 60 (default: 60)
    /// - CATALOG_FETCH_TIMEOUT_SECS: deadline for one catalog reload, 0 means default (default: 5)
    /// - STRICT_INGREDIENT_VALIDATION: reject unknown ingredients (default: true)
    /// - RANKING_WEIGHT_PRICE / RANKING_WEIGHT_DISTANCE: score weights (default: 0.5 / 0.5)
    pub fn from_env() -> Result<Self, ConfigError> {
        let ttl_secs = parse_var::<u64>("CATALOG_CACHE_TTL_SECS")?;
        let fetch_timeout_secs = parse_var::<u64>("CATALOG_FETCH_TIMEOUT_SECS")?;
        let strict = parse_var::<bool>("STRICT_INGREDIENT_VALIDATION")?.unwrap_or(true);
        let weights = ranking_weights(
            parse_var("RANKING_WEIGHT_PRICE")?,
            parse_var("RANKING_WEIGHT_DISTANCE")?,
        )?;

        Ok(Self {
            catalog_cache_ttl: ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(MAX_CACHE_TTL)
                .min(MAX_CACHE_TTL),
            catalog_fetch_timeout: fetch_timeout(fetch_timeout_secs),
            strict_ingredient_validation: strict,
            ranking_weights: weights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_blank_values_as_unset() {
        assert_eq!(parse_value::<u64>("X", None), Ok(None));
        assert_eq!(parse_value::<u64>("X", Some("  ".to_string())), Ok(None));
        assert_eq!(parse_value::<u64>("X", Some(" 30 ".to_string())), Ok(Some(30)));
    }

    #[test]
    fn should_name_the_variable_that_failed_to_parse() {
        assert_eq!(
            parse_value::<bool>("STRICT_INGREDIENT_VALIDATION", Some("maybe".to_string())),
            Err(ConfigError::InvalidValue("STRICT_INGREDIENT_VALIDATION".to_string()))
        );
    }

    #[test]
    fn should_default_ranking_weights_to_even_split() {
        assert_eq!(ranking_weights(None, None), Ok(RankingWeights::default()));
        assert_eq!(
            ranking_weights(Some(0.7), None),
            Ok(RankingWeights {
                price: 0.7,
                distance: 0.5
            })
        );
    }

    #[test]
    fn should_reject_negative_or_all_zero_weights() {
        assert_eq!(
            ranking_weights(Some(-0.1), None),
            Err(ConfigError::InvalidRankingWeights)
        );
        assert_eq!(
            ranking_weights(Some(0.0), Some(0.0)),
            Err(ConfigError::InvalidRankingWeights)
        );
    }

    #[test]
    fn should_bound_catalog_fetches_by_default() {
        assert_eq!(fetch_timeout(None), DEFAULT_CATALOG_FETCH_TIMEOUT);
        assert_eq!(fetch_timeout(Some(0)), DEFAULT_CATALOG_FETCH_TIMEOUT);
        assert_eq!(fetch_timeout(Some(12)), Duration::from_secs(12));
    }
}
