//! Exact-match filter construction for list endpoints.
//!
//! Every term is `column = value` with the value sent as a bound parameter. Values are
//! never inspected for operators, wildcards or nested structure, so a caller supplied
//! string can only ever be compared literally.

use sea_orm::{ColumnTrait, Condition, Value};

/// Conjunction of equality constraints on the columns of one entity.
#[derive(Debug, Clone)]
pub struct ExactMatchFilter<C> {
    terms: Vec<(C, Value)>,
}

impl<C: ColumnTrait> ExactMatchFilter<C> {
    /// Empty filter, matching every record.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Constrains `column` to equal `value` when a value is present.
    ///
    /// An absent value adds no term.
    pub fn eq<V: Into<Value>>(mut self, column: C, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.terms.push((column, value.into()));
        }
        self
    }

    /// Like [`eq`](Self::eq), but an empty string also counts as absent.
    ///
    /// Matches query strings such as `?sea=` which carry the key with no value.
    pub fn eq_text(self, column: C, value: Option<String>) -> Self {
        self.eq(column, value.filter(|v| !v.is_empty()))
    }

    /// Names of the constrained columns, in insertion order.
    #[cfg(test)]
    pub fn columns(&self) -> Vec<&'static str> {
        self.terms.iter().map(|(column, _)| column.as_str()).collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Converts the terms into a SeaORM condition joined with AND.
    pub fn into_condition(self) -> Condition {
        self.terms
            .into_iter()
            .fold(Condition::all(), |condition, (column, value)| {
                condition.add(column.eq(value))
            })
    }
}

impl<C: ColumnTrait> Default for ExactMatchFilter<C> {
    fn default() -> Self {
        Self::new()
    }
}
