use super::error::ParseError;
use super::operator::Operator;
use super::split::{ESCAPE, split_unescaped};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Delimiter between items of list values
pub const LIST_DELIMITER: &str = ":";
/// Delimiter between the bounds of a range value
pub const RANGE_DELIMITER: &str = "..";

/// A typed filter value together with the operator it was given with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter<T> {
    pub operator: Operator,
    pub value: T,
}

impl<T> Filter<T> {
    pub fn new(operator: Operator, value: T) -> Self {
        Self { operator, value }
    }
}

pub type StringFilter = Filter<String>;
pub type StringListFilter = Filter<Vec<String>>;
pub type BoolFilter = Filter<bool>;
pub type FloatFilter = Filter<f64>;
pub type FloatListFilter = Filter<Vec<f64>>;
pub type FloatRangeFilter = Filter<FloatRange>;

/// Inclusive pair of bounds with `low <= high`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub low: f64,
    pub high: f64,
}

impl FloatRange {
    /// Build a range, rejecting bounds that are not in ascending order
    pub fn new(low: f64, high: f64) -> Result<Self, ParseError> {
        match low.partial_cmp(&high) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { low, high }),
            // NaN bounds have no order either
            _ => Err(ParseError::RangeOutOfOrder { low, high }),
        }
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.low, RANGE_DELIMITER, self.high)
    }
}

/// The kind of value a schema field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    String,
    StringList,
    Bool,
    Float,
    FloatList,
    FloatRange,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::String,
        Shape::StringList,
        Shape::Bool,
        Shape::Float,
        Shape::FloatList,
        Shape::FloatRange,
    ];

    /// Get the canonical name of this shape
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::StringList => "string_list",
            Shape::Bool => "bool",
            Shape::Float => "float",
            Shape::FloatList => "float_list",
            Shape::FloatRange => "float_range",
        }
    }

    /// Whether fields of this shape accept operators other than `==` and `!=`
    pub fn accepts(&self, operator: Operator) -> bool {
        match self {
            Shape::Float => true,
            _ => operator.is_equality(),
        }
    }
}

impl FromStr for Shape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "string" | "str" => Ok(Shape::String),
            "string_list" | "strings" => Ok(Shape::StringList),
            "bool" | "boolean" => Ok(Shape::Bool),
            "float" | "f64" | "number" => Ok(Shape::Float),
            "float_list" | "floats" => Ok(Shape::FloatList),
            "float_range" | "range" => Ok(Shape::FloatRange),
            _ => Err(ParseError::UnsupportedFieldShape(s.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Mutable handle to a caller-owned filter field, tagged with its shape
#[derive(Debug)]
pub enum TypedField<'a> {
    String(&'a mut StringFilter),
    StringList(&'a mut StringListFilter),
    Bool(&'a mut BoolFilter),
    Float(&'a mut FloatFilter),
    FloatList(&'a mut FloatListFilter),
    FloatRange(&'a mut FloatRangeFilter),
}

impl TypedField<'_> {
    pub fn shape(&self) -> Shape {
        match self {
            TypedField::String(_) => Shape::String,
            TypedField::StringList(_) => Shape::StringList,
            TypedField::Bool(_) => Shape::Bool,
            TypedField::Float(_) => Shape::Float,
            TypedField::FloatList(_) => Shape::FloatList,
            TypedField::FloatRange(_) => Shape::FloatRange,
        }
    }

    /// Convert `raw` into this field's shape and store it with `operator`.
    ///
    /// The field is left untouched when the operator or the value is rejected.
    pub fn coerce(&mut self, operator: Operator, raw: &str) -> Result<(), ParseError> {
        let shape = self.shape();
        if !shape.accepts(operator) {
            return Err(ParseError::UnsupportedOperator { operator, shape });
        }

        match self {
            TypedField::String(field) => {
                **field = Filter::new(operator, raw.to_string());
            }
            TypedField::StringList(field) => {
                **field = Filter::new(operator, split_unescaped(raw, LIST_DELIMITER, ESCAPE));
            }
            TypedField::Bool(field) => {
                **field = Filter::new(operator, parse_bool(raw));
            }
            TypedField::Float(field) => {
                **field = Filter::new(operator, parse_float(raw, shape)?);
            }
            TypedField::FloatList(field) => {
                let values = raw
                    .split(LIST_DELIMITER)
                    .map(|piece| parse_float(piece, shape))
                    .collect::<Result<Vec<_>, _>>()?;
                **field = Filter::new(operator, values);
            }
            TypedField::FloatRange(field) => {
                **field = Filter::new(operator, parse_range(raw, shape)?);
            }
        }

        Ok(())
    }
}

impl<'a> From<&'a mut StringFilter> for TypedField<'a> {
    fn from(field: &'a mut StringFilter) -> Self {
        TypedField::String(field)
    }
}

impl<'a> From<&'a mut StringListFilter> for TypedField<'a> {
    fn from(field: &'a mut StringListFilter) -> Self {
        TypedField::StringList(field)
    }
}

impl<'a> From<&'a mut BoolFilter> for TypedField<'a> {
    fn from(field: &'a mut BoolFilter) -> Self {
        TypedField::Bool(field)
    }
}

impl<'a> From<&'a mut FloatFilter> for TypedField<'a> {
    fn from(field: &'a mut FloatFilter) -> Self {
        TypedField::Float(field)
    }
}

impl<'a> From<&'a mut FloatListFilter> for TypedField<'a> {
    fn from(field: &'a mut FloatListFilter) -> Self {
        TypedField::FloatList(field)
    }
}

impl<'a> From<&'a mut FloatRangeFilter> for TypedField<'a> {
    fn from(field: &'a mut FloatRangeFilter) -> Self {
        TypedField::FloatRange(field)
    }
}

/// Anything other than a case-insensitive "true" is false
fn parse_bool(raw: &str) -> bool {
    raw.trim().to_lowercase() == "true"
}

fn parse_float(text: &str, shape: Shape) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            text: text.to_string(),
            shape,
            source,
        })
}

fn parse_range(raw: &str, shape: Shape) -> Result<FloatRange, ParseError> {
    let mut bounds = raw.split(RANGE_DELIMITER);
    let (Some(low), Some(high)) = (bounds.next(), bounds.next()) else {
        return Err(ParseError::MalformedRange {
            text: raw.to_string(),
        });
    };

    FloatRange::new(parse_float(low, shape)?, parse_float(high, shape)?)
}
