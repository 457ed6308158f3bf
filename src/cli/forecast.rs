use super::ui;
use crate::core::config::AppConfig;
use crate::core::projection::project;
use crate::core::rates::{RateProvider, RateSnapshot};
use anyhow::Result;
use chrono::{Duration, Utc};
use tracing::info;

/// Demo growth range in %/day, used when no explicit rates are given.
const GROWTH_RANGE: (f64, f64) = (0.05, 0.2);

/// Seedable uniform sampler for demo growth rates.
///
/// Kept out of the projection engine so forecasts are reproducible for
/// a given seed and the engine itself stays deterministic.
struct GrowthSampler {
    state: u64,
}

impl GrowthSampler {
    fn new(seed: u64) -> Self {
        GrowthSampler { state: seed }
    }

    // splitmix64 step mapped into GROWTH_RANGE
    fn sample(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        let unit = (z >> 11) as f64 / (1u64 << 53) as f64;
        GROWTH_RANGE.0 + (GROWTH_RANGE.1 - GROWTH_RANGE.0) * unit
    }
}

fn render_forecast_table(snapshot: &RateSnapshot, series: &[f64], today: f64) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Day"),
        ui::header_cell("Date"),
        ui::header_cell(&format!("{} per {}", snapshot.target, snapshot.base)),
        ui::header_cell("Change"),
    ]);

    for (i, rate) in series.iter().enumerate() {
        let day = i as i64 + 1;
        let date = snapshot.fetched_at + Duration::days(day);
        let change = ((rate - today) / today) * 100.0;
        table.add_row(vec![
            comfy_table::Cell::new(day.to_string()),
            comfy_table::Cell::new(date.format("%Y-%m-%d").to_string()),
            ui::rate_cell(*rate),
            ui::change_cell(change),
        ]);
    }

    table.to_string()
}

pub async fn run(
    provider: &(dyn RateProvider + Send + Sync),
    config: &AppConfig,
    days: Option<u32>,
    base_growth: Option<f64>,
    target_growth: Option<f64>,
    seed: Option<u64>,
) -> Result<()> {
    let days = days.unwrap_or(config.forecast.days);

    let pb = ui::new_fetch_spinner("Fetching exchange rates...");
    let snapshot = provider
        .fetch_rates(&config.pair.base, &config.pair.target)
        .await;
    pb.finish_and_clear();
    let snapshot = snapshot?;

    // Explicit flags win; missing rates are drawn from the demo range
    // with a reproducible seed.
    let sampled = base_growth.is_none() || target_growth.is_none();
    let mut sampler = GrowthSampler::new(seed.unwrap_or_else(|| Utc::now().timestamp() as u64));
    let base_growth = base_growth.unwrap_or_else(|| sampler.sample());
    let target_growth = target_growth.unwrap_or_else(|| sampler.sample());
    if sampled {
        info!(
            base_growth,
            target_growth, "Sampled daily growth rates for demo forecast"
        );
    }

    let series = project(
        snapshot.base_rate,
        snapshot.target_rate,
        base_growth,
        target_growth,
        days,
    )?;
    let today = snapshot.cross_rate(&snapshot.base, &snapshot.target)?;

    println!(
        "Forecast: {} to {} over {} day(s)\n",
        ui::style_text(&snapshot.base, ui::StyleType::Title),
        ui::style_text(&snapshot.target, ui::StyleType::Title),
        days
    );
    println!(
        "{}",
        ui::style_text(
            &format!(
                "Assumed daily growth: {} {base_growth:.4}%/day, {} {target_growth:.4}%/day",
                snapshot.base, snapshot.target
            ),
            ui::StyleType::Subtle
        )
    );
    println!("{}", render_forecast_table(&snapshot, &series, today));
    println!(
        "\n{} ({}): 1 {} = {} {}",
        ui::style_text("Today's Rate", ui::StyleType::TotalLabel),
        snapshot.fetched_at.format("%Y-%m-%d"),
        snapshot.base,
        ui::style_text(&format!("{today:.4}"), ui::StyleType::TotalValue),
        snapshot.target
    );

    Ok(())
}
