//! Filter string parsing and type coercion
//!
//! A filter string is a list of clauses joined by a separator. Each clause
//! compares a key against a value, and the value is coerced into the field the
//! caller bound to that key.
//!
//! # Syntax
//!
//! ```text
//! key<op>value              A single clause
//! clause;clause;...         Clauses joined by the separator (commonly ';')
//! \;                        Literal separator inside a value
//! ```
//!
//! Keys match `[A-Za-z][A-Za-z0-9_]*`. Operators are `==`, `!=`, `>`, `<`,
//! `>=` and `<=`; only float fields accept the ordering ones.
//!
//! # Values
//!
//! - `string` - taken verbatim
//! - `string_list` - items split on `:`, `\:` for a literal colon
//! - `bool` - `true` (any case) is true, anything else is false
//! - `float` - a 64-bit float
//! - `float_list` - floats split on `:`
//! - `float_range` - `low..high` with `low <= high`
//!
//! # Examples
//!
//! ```text
//! name==john;age>=30;tags==a:b:c
//! title!=hello world\;foo;price==10..20
//! ```

pub mod clause;
pub mod error;
pub mod field;
pub mod operator;
pub mod parser;
pub mod schema;
pub mod split;

pub use clause::{ClauseTable, RawClause};
pub use error::ParseError;
pub use field::{
    BoolFilter, Filter, FloatFilter, FloatListFilter, FloatRange, FloatRangeFilter, Shape,
    StringFilter, StringListFilter, TypedField,
};
pub use operator::{Operator, operator_symbol};
pub use parser::{parse, parse_schema};
pub use schema::{DynamicField, DynamicFilters, FieldValue, FilterSet, Schema, bind};
pub use split::split_unescaped;
