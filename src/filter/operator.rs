use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator carried by every clause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "==")]
    EqualTo,
    #[serde(rename = "!=")]
    NotEqualTo,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqualTo,
    #[serde(rename = "<=")]
    LessThanOrEqualTo,
}

impl Operator {
    /// All operators, ordered by their numeric code
    pub const ALL: [Operator; 6] = [
        Operator::EqualTo,
        Operator::NotEqualTo,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterThanOrEqualTo,
        Operator::LessThanOrEqualTo,
    ];

    /// Look up an operator by its textual symbol
    pub fn from_symbol(symbol: &str) -> Result<Self, ParseError> {
        match symbol {
            "==" => Ok(Operator::EqualTo),
            "!=" => Ok(Operator::NotEqualTo),
            ">=" => Ok(Operator::GreaterThanOrEqualTo),
            "<=" => Ok(Operator::LessThanOrEqualTo),
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            _ => Err(ParseError::UnknownOperatorSymbol(symbol.to_string())),
        }
    }

    /// Get the canonical symbol of this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::EqualTo => "==",
            Operator::NotEqualTo => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqualTo => ">=",
            Operator::LessThanOrEqualTo => "<=",
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// `==` and `!=`, the only operators accepted by non-numeric shapes
    pub fn is_equality(&self) -> bool {
        matches!(self, Operator::EqualTo | Operator::NotEqualTo)
    }
}

/// Symbol for a numeric operator code, or an empty string if the code is unknown
pub fn operator_symbol(code: u8) -> &'static str {
    Operator::from_code(code).map_or("", |op| op.symbol())
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
