use super::error::ParseError;
use super::operator::Operator;
use super::split::split_clauses;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// Two-character operators are listed before their one-character prefixes.
static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z][A-Za-z0-9_]*?)(==|!=|>=|<=|>|<)(.*)$").expect("valid clause regex")
});

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid key regex"));

/// Check that `key` could appear on the left-hand side of a clause
pub fn is_valid_key(key: &str) -> bool {
    KEY_RE.is_match(key)
}

/// A single `key<op>value` clause before any type coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClause {
    pub key: String,
    pub operator: Operator,
    /// Unparsed value text, taken verbatim from after the operator
    pub value: String,
}

impl RawClause {
    /// Parse one clause; the whole text must match the clause grammar
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let caps = CLAUSE_RE
            .captures(text)
            .ok_or_else(|| ParseError::MalformedClause {
                clause: text.to_string(),
            })?;

        Ok(RawClause {
            key: caps[1].to_string(),
            operator: Operator::from_symbol(&caps[2])?,
            value: caps[3].to_string(),
        })
    }
}

/// Parsed clauses of one filter string, keyed by clause key
#[derive(Debug, Clone, Default)]
pub struct ClauseTable {
    clauses: HashMap<String, (Operator, String)>,
}

impl ClauseTable {
    /// Split `input` on `separator` and parse every clause.
    ///
    /// When a key repeats, the last occurrence wins.
    pub fn parse(input: &str, separator: &str) -> Result<Self, ParseError> {
        let mut clauses = HashMap::new();

        for text in split_clauses(input, separator) {
            let clause = RawClause::parse(&text)?;
            tracing::trace!(key = %clause.key, operator = %clause.operator, value = %clause.value, "parsed clause");
            if clauses
                .insert(clause.key.clone(), (clause.operator, clause.value))
                .is_some()
            {
                tracing::debug!(key = %clause.key, "duplicate key, keeping last occurrence");
            }
        }

        Ok(ClauseTable { clauses })
    }

    pub fn get(&self, key: &str) -> Option<(Operator, &str)> {
        self.clauses
            .get(key)
            .map(|(operator, value)| (*operator, value.as_str()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.clauses.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.clauses.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
