use colored::Colorize;

use crate::core::math::statistics::{describe, parse_column, MissingPolicy, Summary};
use crate::debug_log;

pub fn render_table(summary: &Summary) -> String {
    let std = summary
        .std
        .map(|s| format!("{s:.6}"))
        .unwrap_or_else(|| "NaN".to_string());
    let rows = [
        ("count", summary.count.to_string()),
        ("missing", summary.missing.to_string()),
        ("mean", format!("{:.6}", summary.mean)),
        ("std", std),
        ("min", format!("{:.6}", summary.min)),
        ("25%", format!("{:.6}", summary.q1)),
        ("50%", format!("{:.6}", summary.median)),
        ("75%", format!("{:.6}", summary.q3)),
        ("max", format!("{:.6}", summary.max)),
    ];
    rows.iter()
        .map(|(k, v)| format!("{k:<8}{v:>14}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn main(values: &[String], policy: MissingPolicy, json: bool) -> anyhow::Result<()> {
    let tokens: Vec<&str> = values.iter().map(String::as_str).collect();
    let column = parse_column(&tokens)?;
    debug_log!("describe {} values, policy {policy:?}", column.len());
    let summary = describe(&column, policy)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        if summary.missing > 0 && policy == MissingPolicy::Drop {
            eprintln!(
                "{} dropped {} missing value(s)",
                "note:".cyan().bold(),
                summary.missing
            );
        }
        println!("{}", render_table(&summary));
    }
    Ok(())
}
