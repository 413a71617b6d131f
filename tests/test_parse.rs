use typed_filter::{
    BoolFilter, FilterSet, FloatFilter, FloatListFilter, FloatRange, FloatRangeFilter, Operator,
    ParseError, Schema, Shape, StringFilter, StringListFilter, parse,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct FilterAny {
    any_string: StringFilter,
    any_string_list: StringListFilter,
    any_bool: BoolFilter,
    any_float: FloatFilter,
    any_float_list: FloatListFilter,
    any_range: FloatRangeFilter,
}

impl FilterSet for FilterAny {
    fn schema(&mut self) -> Schema<'_> {
        Schema::new()
            .field("any_string", &mut self.any_string)
            .field("any_string_list", &mut self.any_string_list)
            .field("any_bool", &mut self.any_bool)
            .field("any_float", &mut self.any_float)
            .field("any_float_list", &mut self.any_float_list)
            .field("any_range", &mut self.any_range)
    }
}

const FULL_FILTER: &str = r"any_string==hello world\;foo\;bar;any_string_list==hello\:world:foo:bar;any_bool!=True;any_float==12345.6789;any_float_list!=1:2.3:4:5.6:7890;any_range!=5000..10000";

fn parse_any(input: &str) -> Result<FilterAny, ParseError> {
    let mut filters = FilterAny::default();
    parse(input, ";", &mut filters)?;
    Ok(filters)
}

#[test]
fn test_parse_every_shape() {
    let f = parse_any(FULL_FILTER).expect("filter should parse");

    assert_eq!(f.any_string.operator, Operator::EqualTo);
    assert_eq!(f.any_string.value, "hello world;foo;bar");

    assert_eq!(f.any_string_list.value, vec!["hello:world", "foo", "bar"]);

    assert_eq!(f.any_bool.operator, Operator::NotEqualTo);
    assert!(f.any_bool.value);

    assert_eq!(f.any_float.value, 12345.6789);

    assert_eq!(f.any_float_list.operator, Operator::NotEqualTo);
    assert_eq!(f.any_float_list.value, vec![1.0, 2.3, 4.0, 5.6, 7890.0]);

    assert_eq!(f.any_range.operator, Operator::NotEqualTo);
    assert_eq!(
        f.any_range.value,
        FloatRange {
            low: 5000.0,
            high: 10000.0
        }
    );
}

#[test]
fn test_reversed_range_is_rejected() {
    let err = parse_any("any_range!=10000..5000").unwrap_err();
    assert_eq!(
        err,
        ParseError::RangeOutOfOrder {
            low: 10000.0,
            high: 5000.0
        }
    );
}

#[test]
fn test_string_rejects_greater_than() {
    let err = parse_any("any_string>abc").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnsupportedOperator {
            operator: Operator::GreaterThan,
            shape: Shape::String
        }
    );
}

#[test]
fn test_float_accepts_all_six_operators() {
    for operator in Operator::ALL {
        let input = format!("any_float{}42", operator.symbol());
        let f = parse_any(&input).unwrap_or_else(|e| panic!("'{input}' failed: {e}"));
        assert_eq!(f.any_float, FloatFilter::new(operator, 42.0));
    }
}

#[test]
fn test_non_float_shapes_reject_ordering_operators() {
    for key in [
        "any_string",
        "any_string_list",
        "any_bool",
        "any_float_list",
        "any_range",
    ] {
        for symbol in [">", "<", ">=", "<="] {
            let input = format!("{key}{symbol}1..2");
            assert!(
                matches!(
                    parse_any(&input),
                    Err(ParseError::UnsupportedOperator { .. })
                ),
                "'{input}' should be rejected"
            );
        }
    }
}

#[test]
fn test_unknown_keys_are_ignored() {
    let f = parse_any("not_in_schema==whatever;any_bool==true").unwrap();
    assert!(f.any_bool.value);
    assert_eq!(f.any_string, StringFilter::default());
}

#[test]
fn test_absent_keys_keep_prior_values() {
    let mut filters = FilterAny {
        any_float: FloatFilter::new(Operator::LessThan, 7.0),
        ..Default::default()
    };
    parse("any_string==x", ";", &mut filters).unwrap();

    assert_eq!(filters.any_string.value, "x");
    assert_eq!(filters.any_float, FloatFilter::new(Operator::LessThan, 7.0));
}

#[test]
fn test_empty_input_is_a_no_op() {
    let f = parse_any("").unwrap();
    assert_eq!(f, FilterAny::default());
}

#[test]
fn test_reparsing_is_idempotent() {
    let first = parse_any(FULL_FILTER).unwrap();
    let second = parse_any(FULL_FILTER).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_keys_last_occurrence_wins() {
    let f = parse_any("any_float>1;any_float<=2").unwrap();
    assert_eq!(f.any_float, FloatFilter::new(Operator::LessThanOrEqualTo, 2.0));
}

#[test]
fn test_malformed_clause_names_the_clause() {
    let err = parse_any("any_string==ok;any string==bad").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedClause {
            clause: "any string==bad".to_string()
        }
    );
    assert!(err.to_string().contains("any string==bad"));
}

#[test]
fn test_invalid_number_reports_text_and_shape() {
    let err = parse_any("any_float_list==1:2:three").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'three'"), "{message}");
    assert!(message.contains("float_list"), "{message}");
}

#[test]
fn test_range_without_delimiter_is_malformed() {
    assert!(matches!(
        parse_any("any_range==5000"),
        Err(ParseError::MalformedRange { .. })
    ));
}

#[test]
fn test_lenient_bool() {
    assert!(!parse_any("any_bool==false").unwrap().any_bool.value);
    assert!(!parse_any("any_bool==nope").unwrap().any_bool.value);
    assert!(!parse_any("any_bool==").unwrap().any_bool.value);
    assert!(parse_any("any_bool==tRuE").unwrap().any_bool.value);
}

#[test]
fn test_trait_object_filter_set() {
    let mut filters = FilterAny::default();
    let dynamic: &mut dyn FilterSet = &mut filters;
    parse("any_float>=0.5", ";", dynamic).unwrap();
    assert_eq!(
        filters.any_float,
        FloatFilter::new(Operator::GreaterThanOrEqualTo, 0.5)
    );
}
