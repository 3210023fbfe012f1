use super::ui;
use crate::core::currency::CurrencyConverter;
use anyhow::Result;
use tracing::info;

/// Formats a conversion result, e.g. `10.00 EUR = 11.33 USD`.
pub fn format_conversion(
    from: &str,
    to: &str,
    amount: f64,
    converted: f64,
    precision: usize,
) -> String {
    format!("{amount:.precision$} {from} = {converted:.precision$} {to}")
}

pub async fn run(
    converter: &dyn CurrencyConverter,
    from: &str,
    to: &str,
    amount: f64,
    precision: usize,
) -> Result<f64> {
    let converted = converter.convert(from, to, amount).await?;
    info!(from, to, amount, converted, "Converted amount");

    println!(
        "{}",
        ui::style_text(
            &format_conversion(from, to, amount, converted, precision),
            ui::StyleType::Value
        )
    );
    Ok(converted)
}
