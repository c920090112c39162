pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;

pub use case::{convert, to_camel_case, to_dot_case, Style};
pub use config::Config;
pub use error::CaseError;
pub use input::{convert_value, to_camel_case_value, to_dot_case_value};

use serde::Serialize;
use serde_json::Value;

/// Outcome of converting one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conversion {
    pub fn from_text(input: &str, style: Style) -> Self {
        Self {
            input: input.to_string(),
            output: Some(convert(input, style)),
            error: None,
        }
    }

    pub fn from_value(value: &Value, style: Style) -> Self {
        let input = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };

        match convert_value(value, style) {
            Ok(output) => Self {
                input,
                output: Some(output),
                error: None,
            },
            Err(e) => Self {
                input,
                output: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Parse `raw` as one JSON value and convert it. Malformed JSON is
    /// recorded as a failed conversion.
    pub fn from_json_str(raw: &str, style: Style) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value, style),
            Err(e) => Self {
                input: raw.to_string(),
                output: None,
                error: Some(CaseError::from(e).to_string()),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.output.as_deref(), Some(""))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    pub failed_count: usize,
    pub conversions: Vec<Conversion>,
}

impl ConvertResult {
    pub fn push(&mut self, conversion: Conversion) {
        if conversion.is_failure() {
            self.failed_count += 1;
        }
        self.conversions.push(conversion);
    }

    /// Drop successful conversions whose output is empty.
    pub fn skip_empty(&mut self) {
        self.conversions.retain(|c| !c.is_empty());
    }
}
