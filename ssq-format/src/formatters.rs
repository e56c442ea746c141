use crate::oneline::format_oneline;
use crate::FormatError;
use chrono::{Datelike, Local};
use ssq_core::Combination;
use std::str::FromStr;

/// Print format for outputting combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFormat {
    /// One combination per line, "03 07 12 19 25 31 + 09" (default)
    #[default]
    OneLine,
    /// Dated, numbered table with one column per ball
    Table,
    /// One JSON object per line
    Json,
}

impl FromStr for PrintFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oneline" | "line" => Ok(PrintFormat::OneLine),
            "table" => Ok(PrintFormat::Table),
            "json" => Ok(PrintFormat::Json),
            other => Err(format!(
                "unknown format '{}': expected oneline, table or json",
                other
            )),
        }
    }
}

/// Format combinations as a table
///
/// Example output:
/// ```text
/// Double Color Ball  2026.10.19
///    #  R1 R2 R3 R4 R5 R6   B
///    1  03 07 12 19 25 31  09
///    2  01 05 14 22 28 30  16
/// ```
pub fn format_table(combos: &[Combination]) -> String {
    let mut result = String::new();

    let now = Local::now();
    result.push_str(&format!(
        "Double Color Ball  {:04}.{:02}.{:02}\n",
        now.year(),
        now.month(),
        now.day()
    ));
    result.push_str("   #  R1 R2 R3 R4 R5 R6   B\n");

    for (i, combo) in combos.iter().enumerate() {
        result.push_str(&format!("{:4} ", i + 1));
        for &red in combo.red_numbers() {
            result.push_str(&format!(" {:02}", red));
        }
        result.push_str(&format!("  {:02}\n", combo.blue_number()));
    }

    result
}

/// Format a combination as a single-line JSON object
pub fn format_json(combo: &Combination) -> Result<String, FormatError> {
    Ok(serde_json::to_string(combo)?)
}

/// Parse a combination from a JSON object with `red_numbers` and `blue_number`
pub fn parse_json(input: &str) -> Result<Combination, FormatError> {
    Ok(serde_json::from_str(input.trim())?)
}

/// Format a batch of combinations, every line newline-terminated
pub fn format_all(combos: &[Combination], format: PrintFormat) -> Result<String, FormatError> {
    let mut result = String::new();

    match format {
        PrintFormat::OneLine => {
            for combo in combos {
                result.push_str(&format_oneline(combo));
                result.push('\n');
            }
        }
        PrintFormat::Table => result.push_str(&format_table(combos)),
        PrintFormat::Json => {
            for combo in combos {
                result.push_str(&format_json(combo)?);
                result.push('\n');
            }
        }
    }

    Ok(result)
}
