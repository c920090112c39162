use crate::{Conversion, ConvertResult, Style};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    style: Style,
    total: usize,
    failed: usize,
    conversions: &'a [Conversion],
}

/// Write every conversion. Results go to `out`; in text mode failures go to `err`.
pub fn print_conversions(
    out: &mut impl Write,
    err: &mut impl Write,
    result: &ConvertResult,
    style: Style,
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(out, err, result, colored_output),
        OutputFormat::Json => print_json(out, result, style),
    }
}

fn print_text(
    out: &mut impl Write,
    err: &mut impl Write,
    result: &ConvertResult,
    colored_output: bool,
) -> Result<()> {
    for conversion in &result.conversions {
        match (&conversion.output, &conversion.error) {
            (Some(output), _) => writeln!(out, "{}", output)?,
            (None, Some(message)) => {
                if colored_output {
                    writeln!(
                        err,
                        "{} {} {}",
                        "error:".red().bold(),
                        conversion.input.yellow(),
                        message.dimmed()
                    )?;
                } else {
                    writeln!(err, "error: {} {}", conversion.input, message)?;
                }
            }
            (None, None) => {}
        }
    }
    Ok(())
}

fn print_json(out: &mut impl Write, result: &ConvertResult, style: Style) -> Result<()> {
    let output = JsonOutput {
        style,
        total: result.conversions.len(),
        failed: result.failed_count,
        conversions: &result.conversions,
    };

    let text = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    writeln!(out, "{}", text)?;
    Ok(())
}

pub fn print_summary(err: &mut impl Write, failed: usize, total: usize, colored: bool) -> Result<()> {
    if failed == 0 {
        return Ok(());
    }

    let input_word = if total == 1 { "input" } else { "inputs" };
    if colored {
        writeln!(
            err,
            "{} {} of {} {} could not be converted",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            total,
            input_word
        )?;
    } else {
        writeln!(err, "✗ {} of {} {} could not be converted", failed, total, input_word)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConvertResult {
        let mut result = ConvertResult::default();
        result.push(Conversion::from_text("hello world", Style::Camel));
        result.push(Conversion::from_value(&json!(null), Style::Camel));
        result
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }

    #[test]
    fn test_text_output_splits_streams() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        print_conversions(&mut out, &mut err, &sample(), Style::Camel, OutputFormat::Text, false)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "helloWorld\n");
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("error: null"));
        assert!(err.contains("invalid input type"));
    }

    #[test]
    fn test_json_output() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        print_conversions(&mut out, &mut err, &sample(), Style::Camel, OutputFormat::Json, false)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["style"], "camel");
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["failed"], 1);
        assert_eq!(parsed["conversions"][0]["output"], "helloWorld");
        assert!(parsed["conversions"][0].get("error").is_none());
        assert!(parsed["conversions"][1]["error"].is_string());
        assert!(err.is_empty());
    }

    #[test]
    fn test_summary_only_on_failure() {
        let mut err = Vec::new();
        print_summary(&mut err, 0, 3, false).unwrap();
        assert!(err.is_empty());

        print_summary(&mut err, 1, 3, false).unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "✗ 1 of 3 inputs could not be converted\n");
    }
}
