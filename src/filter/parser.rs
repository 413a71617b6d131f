use super::clause::ClauseTable;
use super::error::ParseError;
use super::schema::{FilterSet, Schema, bind};

/// Parse `input` and populate the fields of `filters`.
///
/// An empty input succeeds without touching any field.
pub fn parse<F: FilterSet + ?Sized>(
    input: &str,
    separator: &str,
    filters: &mut F,
) -> Result<(), ParseError> {
    parse_schema(input, separator, filters.schema())
}

/// Parse `input` and populate the fields bound in `schema`
pub fn parse_schema(input: &str, separator: &str, schema: Schema<'_>) -> Result<(), ParseError> {
    if input.is_empty() {
        return Ok(());
    }

    let table = ClauseTable::parse(input, separator)?;
    tracing::debug!(
        clauses = table.len(),
        fields = schema.len(),
        "parsed filter string"
    );
    bind(schema, &table)
}
