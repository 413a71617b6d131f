//! Parse delimited filter strings such as `name==john;age>=30;tags==a:b:c`
//! into typed, operator-tagged fields.
//!
//! ```
//! use typed_filter::{FilterSet, FloatFilter, Operator, Schema, StringFilter, parse};
//!
//! #[derive(Default)]
//! struct People {
//!     name: StringFilter,
//!     age: FloatFilter,
//! }
//!
//! impl FilterSet for People {
//!     fn schema(&mut self) -> Schema<'_> {
//!         Schema::new()
//!             .field("name", &mut self.name)
//!             .field("age", &mut self.age)
//!     }
//! }
//!
//! let mut people = People::default();
//! parse("name==john;age>=30", ";", &mut people).unwrap();
//! assert_eq!(people.name.value, "john");
//! assert_eq!(people.age.operator, Operator::GreaterThanOrEqualTo);
//! assert_eq!(people.age.value, 30.0);
//! ```

pub mod cli;
pub mod config;
pub mod filter;

pub use config::{ConfigError, FieldSpec, FilterConfig, load_config, load_config_from_path};
pub use filter::{
    BoolFilter, ClauseTable, DynamicFilters, FieldValue, Filter, FilterSet, FloatFilter,
    FloatListFilter, FloatRange, FloatRangeFilter, Operator, ParseError, RawClause, Schema, Shape,
    StringFilter, StringListFilter, TypedField, bind, parse, parse_schema, split_unescaped,
};
