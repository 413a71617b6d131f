use super::clause::ClauseTable;
use super::error::ParseError;
use super::field::{
    BoolFilter, FloatFilter, FloatListFilter, FloatRangeFilter, Shape, StringFilter,
    StringListFilter, TypedField,
};
use serde::Serialize;

/// Ordered bindings from clause keys to caller-owned fields
#[derive(Debug, Default)]
pub struct Schema<'a> {
    fields: Vec<(&'a str, TypedField<'a>)>,
}

impl<'a> Schema<'a> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Bind `key` to `field`, builder style
    pub fn field(mut self, key: &'a str, field: impl Into<TypedField<'a>>) -> Self {
        self.push(key, field);
        self
    }

    pub fn push(&mut self, key: &'a str, field: impl Into<TypedField<'a>>) {
        self.fields.push((key, field.into()));
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A set of filter fields that can be populated from a filter string
pub trait FilterSet {
    /// Describe which clause key feeds which field
    fn schema(&mut self) -> Schema<'_>;
}

/// Coerce every clause that has a matching schema entry into its field.
///
/// Keys missing from the table leave their field untouched; clauses without a
/// schema entry are ignored. Stops at the first error without rolling back
/// fields that were already bound.
pub fn bind(schema: Schema<'_>, table: &ClauseTable) -> Result<(), ParseError> {
    for (key, mut field) in schema.fields {
        let Some((operator, raw)) = table.get(key) else {
            tracing::trace!(key, "no clause for field, skipping");
            continue;
        };

        tracing::debug!(key, shape = %field.shape(), operator = %operator, "binding field");
        field.coerce(operator, raw)?;
    }

    Ok(())
}

/// Owned filter value of any shape, for schemas only known at runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum FieldValue {
    String(StringFilter),
    StringList(StringListFilter),
    Bool(BoolFilter),
    Float(FloatFilter),
    FloatList(FloatListFilter),
    FloatRange(FloatRangeFilter),
}

impl FieldValue {
    /// Default value for `shape`
    pub fn empty(shape: Shape) -> Self {
        match shape {
            Shape::String => FieldValue::String(Default::default()),
            Shape::StringList => FieldValue::StringList(Default::default()),
            Shape::Bool => FieldValue::Bool(Default::default()),
            Shape::Float => FieldValue::Float(Default::default()),
            Shape::FloatList => FieldValue::FloatList(Default::default()),
            Shape::FloatRange => FieldValue::FloatRange(Default::default()),
        }
    }

    pub fn as_typed(&mut self) -> TypedField<'_> {
        match self {
            FieldValue::String(field) => field.into(),
            FieldValue::StringList(field) => field.into(),
            FieldValue::Bool(field) => field.into(),
            FieldValue::Float(field) => field.into(),
            FieldValue::FloatList(field) => field.into(),
            FieldValue::FloatRange(field) => field.into(),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            FieldValue::String(_) => Shape::String,
            FieldValue::StringList(_) => Shape::StringList,
            FieldValue::Bool(_) => Shape::Bool,
            FieldValue::Float(_) => Shape::Float,
            FieldValue::FloatList(_) => Shape::FloatList,
            FieldValue::FloatRange(_) => Shape::FloatRange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicField {
    pub key: String,
    #[serde(flatten)]
    pub value: FieldValue,
}

/// Filter fields declared at runtime, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DynamicFilters {
    pub fields: Vec<DynamicField>,
}

impl DynamicFilters {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a field; a repeated key replaces the earlier declaration
    pub fn declare(&mut self, key: impl Into<String>, shape: Shape) {
        let key = key.into();
        let value = FieldValue::empty(shape);
        match self.fields.iter_mut().find(|field| field.key == key) {
            Some(existing) => existing.value = value,
            None => self.fields.push(DynamicField { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.value)
    }
}

impl FilterSet for DynamicFilters {
    fn schema(&mut self) -> Schema<'_> {
        let mut schema = Schema::new();
        for field in &mut self.fields {
            schema.push(&field.key, field.value.as_typed());
        }
        schema
    }
}
