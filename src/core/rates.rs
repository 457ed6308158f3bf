//! Exchange rate abstractions and core types

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Live rates for a currency pair, both legs quoted against the same
/// base currency of the upstream API.
///
/// A snapshot is fetched once per command and threaded explicitly
/// through conversion and projection, so every number shown in a single
/// run comes from the same fetch.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub base: String,
    pub target: String,
    pub base_rate: f64,
    pub target_rate: f64,
    pub fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    /// Looks up the quoted rate for one of the two configured codes.
    ///
    /// Unknown codes are an error, never a default value.
    pub fn rate_for(&self, code: &str) -> Result<f64> {
        let rate = if code == self.base {
            self.base_rate
        } else if code == self.target {
            self.target_rate
        } else {
            return Err(anyhow!(
                "Unsupported currency: {}. Configured pair is {}/{}",
                code,
                self.base,
                self.target
            ));
        };
        if !rate.is_finite() || rate <= 0.0 {
            return Err(anyhow!("Invalid rate {} for currency: {}", rate, code));
        }
        Ok(rate)
    }

    /// Units of `to` received for one unit of `from`.
    pub fn cross_rate(&self, from: &str, to: &str) -> Result<f64> {
        Ok(self.rate_for(to)? / self.rate_for(from)?)
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        Ok(amount * self.cross_rate(from, to)?)
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str, target: &str) -> Result<RateSnapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> RateSnapshot {
        RateSnapshot {
            base: "USD".to_string(),
            target: "LRD".to_string(),
            base_rate: 1.0,
            target_rate: 197.5,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_rate_lookup() {
        let snap = snapshot();
        assert_eq!(snap.rate_for("USD").unwrap(), 1.0);
        assert_eq!(snap.rate_for("LRD").unwrap(), 197.5);
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        let snap = snapshot();
        let err = snap.rate_for("EUR").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported currency: EUR. Configured pair is USD/LRD"
        );
    }

    #[test]
    fn test_zero_rate_is_an_error_not_a_value() {
        let mut snap = snapshot();
        snap.target_rate = 0.0;
        let err = snap.rate_for("LRD").unwrap_err();
        assert_eq!(err.to_string(), "Invalid rate 0 for currency: LRD");
        assert!(snap.cross_rate("LRD", "USD").is_err());
    }

    #[test]
    fn test_cross_rate_both_directions() {
        let snap = snapshot();
        assert_eq!(snap.cross_rate("USD", "LRD").unwrap(), 197.5);
        assert_eq!(snap.cross_rate("LRD", "USD").unwrap(), 1.0 / 197.5);
        assert_eq!(snap.cross_rate("USD", "USD").unwrap(), 1.0);
    }

    #[test]
    fn test_convert_amount() {
        let snap = snapshot();
        assert_eq!(snap.convert(5.0, "USD", "LRD").unwrap(), 987.5);
    }
}
