pub mod joiner;
pub mod tokenizer;

use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target naming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `helloWorld`
    #[default]
    #[serde(alias = "camelcase", alias = "camel-case")]
    Camel,
    /// `hello.world`
    #[serde(alias = "dotcase", alias = "dot-case")]
    Dot,
}

impl Style {
    pub fn apply(&self, input: &str) -> String {
        convert(input, *self)
    }
}

impl FromStr for Style {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" | "camel-case" => Ok(Style::Camel),
            "dot" | "dotcase" | "dot-case" => Ok(Style::Dot),
            _ => Err(CaseError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Camel => write!(f, "camel"),
            Style::Dot => write!(f, "dot"),
        }
    }
}

/// Tokenize `input` once and join the words in the given style.
pub fn convert(input: &str, style: Style) -> String {
    let tokens = tokenizer::tokenize(input);
    match style {
        Style::Camel => joiner::join_camel(&tokens),
        Style::Dot => joiner::join_dot(&tokens),
    }
}

/// Convert text to camelCase.
///
/// ```
/// assert_eq!(recase::to_camel_case("SCREEN_NAME"), "screenName");
/// assert_eq!(recase::to_camel_case("user number 1"), "userNumber1");
/// ```
pub fn to_camel_case(input: &str) -> String {
    convert(input, Style::Camel)
}

/// Convert text to dot.case.
///
/// ```
/// assert_eq!(recase::to_dot_case("Hello World"), "hello.world");
/// ```
pub fn to_dot_case(input: &str) -> String {
    convert(input, Style::Dot)
}
