use serde::Serialize;
use std::fmt;

/// Parsed value echoed back to the client. Integers stay integers in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedNumber {
    pub value: NumberValue,
    /// Integer part, truncated toward zero.
    pub integer: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberProperty {
    Armstrong,
    Odd,
    Even,
}

/// Properties that depend only on the integer part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberAnalysis {
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<NumberProperty>,
    pub digit_sum: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub number: NumberValue,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<NumberProperty>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

impl ClassificationResult {
    pub fn new(parsed: ParsedNumber, analysis: NumberAnalysis, fun_fact: FunFact) -> Self {
        Self {
            number: parsed.value,
            is_prime: analysis.is_prime,
            is_perfect: analysis.is_perfect,
            properties: analysis.properties,
            digit_sum: analysis.digit_sum,
            fun_fact: fun_fact.into_text(),
        }
    }
}

/// Outcome of a fun fact lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunFact {
    Fetched(String),
    Fallback(i64),
}

impl FunFact {
    /// Wraps upstream text, falling back when it is blank.
    pub fn from_text(number: i64, text: Option<String>) -> Self {
        match text {
            Some(text) if !text.trim().is_empty() => FunFact::Fetched(text),
            _ => FunFact::Fallback(number),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FunFact::Fallback(_))
    }

    pub fn into_text(self) -> String {
        match self {
            FunFact::Fetched(text) => text,
            FunFact::Fallback(number) => fallback_text(number),
        }
    }
}

pub fn fallback_text(number: i64) -> String {
    format!("No fun fact available for {}.", number)
}

impl fmt::Display for NumberProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NumberProperty::Armstrong => "armstrong",
            NumberProperty::Odd => "odd",
            NumberProperty::Even => "even",
        };
        f.write_str(label)
    }
}
