use super::ui;
use crate::providers::fcsapi::{Candle, FcsApiClient};
use anyhow::Result;
use comfy_table::{Cell, Table};

/// Renders every field of a candle as a two column table.
pub fn candle_table(candle: &Candle) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Field"), ui::header_cell("Value")]);

    let prices = [
        ("Open", &candle.open),
        ("High", &candle.high),
        ("Low", &candle.low),
        ("Close", &candle.close),
    ];
    for (label, value) in prices {
        table.add_row(vec![Cell::new(label), ui::number_cell(value)]);
    }
    table.add_row(vec![Cell::new("Change"), ui::change_cell(&candle.change)]);
    table.add_row(vec![
        Cell::new("Change (%)"),
        ui::change_cell(&candle.change_percent),
    ]);

    let times = [
        ("Opened (UTC)", &candle.open_time_utc),
        ("Updated (UTC)", &candle.last_update_utc),
    ];
    for (label, value) in times {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

pub async fn run(client: &FcsApiClient, from: &str, to: &str) -> Result<Candle> {
    let candle = client.latest_candle(from, to).await?;

    let title = if candle.symbol.is_empty() {
        format!("{from}/{to}")
    } else {
        candle.symbol.clone()
    };
    println!("{}", ui::style_text(&title, ui::StyleType::Title));
    println!("{}", candle_table(&candle));
    Ok(candle)
}
