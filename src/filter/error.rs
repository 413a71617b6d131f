use super::field::Shape;
use super::operator::Operator;
use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that can occur while parsing a filter string into typed fields
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unable to parse clause '{clause}'. Expected 'key<op>value' format")]
    MalformedClause { clause: String },

    #[error("Unsupported operator '{operator}' for {shape} field. Only '==' and '!=' are allowed")]
    UnsupportedOperator { operator: Operator, shape: Shape },

    #[error("Unknown operator symbol: '{0}'. Valid operators are: ==, !=, >, <, >=, <=")]
    UnknownOperatorSymbol(String),

    #[error("Unable to parse '{text}' as a number for {shape} field: {source}")]
    InvalidNumber {
        text: String,
        shape: Shape,
        #[source]
        source: ParseFloatError,
    },

    #[error("Unable to parse '{text}' as a range. Expected 'low..high' format")]
    MalformedRange { text: String },

    #[error("Range {low}..{high} should be in ascending order")]
    RangeOutOfOrder { low: f64, high: f64 },

    #[error(
        "Unsupported field shape: '{0}'. Valid shapes are: string, string_list, bool, float, float_list, float_range"
    )]
    UnsupportedFieldShape(String),
}
