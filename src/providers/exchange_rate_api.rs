use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;

use crate::core::cache::SnapshotCache;
use crate::core::rates::{RateProvider, RateSnapshot};
use tracing::{debug, instrument};

// ExchangeRateApiProvider implementation for RateProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
    cache: SnapshotCache,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, cache: SnapshotCache) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
            cache,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "LatestRatesFetch",
        skip(self),
        fields(base = %base, target = %target)
    )]
    async fn fetch_rates(&self, base: &str, target: &str) -> Result<RateSnapshot> {
        if let Some(cached) = self.cache.get(base, target).await {
            return Ok(cached);
        }

        let url = format!("{}/v4/latest/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("lrx/1.0").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {} URL: {}", e, base, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", base, e))?;

        // The endpoint quotes every rate against `base`, so the base leg
        // is 1.0 by construction. A code absent from the map is a fetch
        // failure, never a zero rate.
        let target_rate = if target == base {
            1.0
        } else {
            data.rates
                .get(target)
                .copied()
                .ok_or_else(|| anyhow!("No rate found for currency: {}", target))?
        };

        if !target_rate.is_finite() || target_rate <= 0.0 {
            return Err(anyhow!(
                "Invalid rate {} for currency: {}",
                target_rate,
                target
            ));
        }

        let snapshot = RateSnapshot {
            base: base.to_string(),
            target: target.to_string(),
            base_rate: 1.0,
            target_rate,
            fetched_at: Utc::now(),
        };

        self.cache.put(snapshot.clone()).await;

        Ok(snapshot)
    }
}
