use super::ui;
use crate::core::config::AppConfig;
use crate::core::rates::RateProvider;
use anyhow::{Result, bail};
use tracing::debug;

pub async fn run(
    provider: &(dyn RateProvider + Send + Sync),
    config: &AppConfig,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        bail!("Amount must be a positive number, got {amount}");
    }
    let from = from.to_uppercase();
    let to = to.to_uppercase();

    let pb = ui::new_fetch_spinner("Fetching exchange rates...");
    let snapshot = provider
        .fetch_rates(&config.pair.base, &config.pair.target)
        .await;
    pb.finish_and_clear();
    let snapshot = snapshot?;

    debug!("Converting {} {} to {}", amount, from, to);
    let converted = snapshot.convert(amount, &from, &to)?;

    println!(
        "{amount} {from} = {} {to}",
        ui::style_text(&format!("{converted:.2}"), ui::StyleType::TotalValue)
    );
    println!(
        "{}",
        ui::style_text(
            &format!(
                "Rate as of {}: 1 {} = {:.4} {}",
                snapshot.fetched_at.format("%Y-%m-%d"),
                from,
                snapshot.cross_rate(&from, &to)?,
                to
            ),
            ui::StyleType::Subtle
        )
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::RateSnapshot;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::Utc;

    struct FixedRateProvider {
        target_rate: f64,
    }

    #[async_trait]
    impl RateProvider for FixedRateProvider {
        async fn fetch_rates(&self, base: &str, target: &str) -> Result<RateSnapshot> {
            if self.target_rate <= 0.0 {
                return Err(anyhow!("No rate found for currency: {}", target));
            }
            Ok(RateSnapshot {
                base: base.to_string(),
                target: target.to_string(),
                base_rate: 1.0,
                target_rate: self.target_rate,
                fetched_at: Utc::now(),
            })
        }
    }

    #[tokio::test]
    async fn test_convert_between_configured_codes() {
        let provider = FixedRateProvider { target_rate: 200.0 };
        let config = AppConfig::default();

        // Lowercase codes are accepted and normalized
        let result = run(&provider, &config, 5.0, "usd", "lrd").await;
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[tokio::test]
    async fn test_convert_rejects_unknown_code() {
        let provider = FixedRateProvider { target_rate: 200.0 };
        let config = AppConfig::default();

        let result = run(&provider, &config, 5.0, "USD", "EUR").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unsupported currency: EUR")
        );
    }

    #[tokio::test]
    async fn test_convert_rejects_non_positive_amount() {
        let provider = FixedRateProvider { target_rate: 200.0 };
        let config = AppConfig::default();

        let result = run(&provider, &config, 0.0, "USD", "LRD").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Amount must be a positive number")
        );
    }

    #[tokio::test]
    async fn test_convert_propagates_fetch_failure() {
        let provider = FixedRateProvider { target_rate: 0.0 };
        let config = AppConfig::default();

        let result = run(&provider, &config, 5.0, "USD", "LRD").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("No rate found for currency: LRD")
        );
    }
}
