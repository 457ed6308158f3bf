use super::ui;
use crate::core::config::AppConfig;
use crate::core::rates::{RateProvider, RateSnapshot};
use anyhow::Result;

fn render_rates_table(snapshot: &RateSnapshot) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Rate (per {})", snapshot.base)),
    ]);
    table.add_row(vec![
        comfy_table::Cell::new(&snapshot.base),
        ui::rate_cell(snapshot.base_rate),
    ]);
    table.add_row(vec![
        comfy_table::Cell::new(&snapshot.target),
        ui::rate_cell(snapshot.target_rate),
    ]);

    let mut output = format!(
        "Exchange rates for {}\n\n",
        ui::style_text(
            &snapshot.fetched_at.format("%Y-%m-%d").to_string(),
            ui::StyleType::Title
        )
    );
    output.push_str(&table.to_string());
    output
}

pub async fn run(provider: &(dyn RateProvider + Send + Sync), config: &AppConfig) -> Result<()> {
    let pb = ui::new_fetch_spinner("Fetching exchange rates...");
    let snapshot = provider
        .fetch_rates(&config.pair.base, &config.pair.target)
        .await;
    pb.finish_and_clear();
    let snapshot = snapshot?;

    println!("{}", render_rates_table(&snapshot));

    let cross = snapshot.cross_rate(&snapshot.base, &snapshot.target)?;
    println!(
        "\n{}: 1 {} = {} {}",
        ui::style_text("Today's Rate", ui::StyleType::TotalLabel),
        snapshot.base,
        ui::style_text(&format!("{cross:.4}"), ui::StyleType::TotalValue),
        snapshot.target
    );

    Ok(())
}
