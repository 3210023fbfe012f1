use super::ui;
use crate::helpers::{debug_jwt, new_uuid};
use anyhow::{Context, Result};
use serde_json::Value;

pub fn run_uuid(without_hyphens: bool, count: usize) -> Vec<String> {
    let ids: Vec<String> = (0..count).map(|_| new_uuid(without_hyphens)).collect();
    for id in &ids {
        println!("{id}");
    }
    ids
}

/// Pretty prints compact JSON produced by the token inspector.
fn pretty(compact: &str) -> Result<String> {
    let value: Value = serde_json::from_str(compact).context("Decoded segment is not JSON")?;
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn run_jwt(token: &str) -> Result<(String, String)> {
    let (header, payload) = debug_jwt(token.trim())?;

    println!("{}", ui::style_text("Header", ui::StyleType::Label));
    println!("{}", pretty(&header)?);
    println!("{}", ui::style_text("Payload", ui::StyleType::Label));
    println!("{}", pretty(&payload)?);
    println!(
        "{}",
        ui::style_text("Signature not verified", ui::StyleType::Subtle)
    );

    Ok((header, payload))
}
