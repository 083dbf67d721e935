//! Predicate chain: per-field filters evaluated against a record.
//!
//! A [`FieldFilter`] is one dimension of the filter bar (university, career,
//! price bound, modality, ...). A record survives a chain only if it passes
//! every active filter; an empty value means the filter is inactive and
//! passes everything. Records expose their filterable fields by name through
//! [`Filterable`], which keeps the chain generic across the three
//! collections.

use crate::model::{ForumPost, Resource, Tutor};

/// How a filter compares its value against a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact, case-sensitive equality on a text field.
    Eq,
    /// Set membership: the record's list field contains the value.
    Has,
    /// Numeric lower bound (record >= value).
    Min,
    /// Numeric upper bound (record <= value).
    Max,
}

/// A filterable field value, as exposed by a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

/// Records that expose named filterable fields.
pub trait Filterable {
    /// Look up a field by its filter name. `None` means the record has no
    /// such field, which fails any active filter on that name.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// A single filter predicate: field name, operator, raw string value as it
/// came from the query state.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Equality filter: `field == value`.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    /// Membership filter: the record's list field contains `value`.
    pub fn has(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Has, value)
    }

    /// Lower-bound filter on a numeric field.
    pub fn min(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Min, value)
    }

    /// Upper-bound filter on a numeric field.
    pub fn max(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Max, value)
    }

    /// Whether this filter narrows anything at all. Empty values and
    /// unparsable numeric bounds are inactive.
    pub fn is_active(&self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        match self.op {
            FilterOp::Min | FilterOp::Max => self.value.parse::<f64>().is_ok(),
            _ => true,
        }
    }

    /// Evaluate this filter against a record. Inactive filters pass
    /// everything; active filters on a missing field pass nothing.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        if self.value.is_empty() {
            return true;
        }
        let bound = match self.op {
            FilterOp::Min | FilterOp::Max => match self.value.parse::<f64>() {
                Ok(b) => Some(b),
                // Non-numeric range input deactivates the filter rather
                // than excluding every record.
                Err(_) => return true,
            },
            _ => None,
        };
        let Some(actual) = record.field(&self.field) else {
            return false;
        };
        match (self.op, actual) {
            (FilterOp::Eq, FieldValue::Text(t)) => t == self.value,
            (FilterOp::Has, FieldValue::List(items)) => items.iter().any(|i| *i == self.value),
            (FilterOp::Min, FieldValue::Number(n)) => bound.map_or(true, |b| n >= b),
            (FilterOp::Max, FieldValue::Number(n)) => bound.map_or(true, |b| n <= b),
            _ => false,
        }
    }
}

/// Keep only the records that pass every filter in the chain.
pub fn apply_filters<'a, T: Filterable>(
    records: &'a [T],
    filters: &[FieldFilter],
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| filters.iter().all(|f| f.matches(*r)))
        .collect()
}

impl Filterable for Resource {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "universidad" => Some(FieldValue::Text(self.university_code.clone())),
            "carrera" => Some(FieldValue::Text(self.career.clone())),
            "materia" => Some(FieldValue::Text(self.subject.clone())),
            "tipo" => Some(FieldValue::Text(self.kind.as_str().to_string())),
            _ => None,
        }
    }
}

impl Filterable for Tutor {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "subject" => Some(FieldValue::List(self.subjects.clone())),
            "university" => Some(FieldValue::Text(self.university.clone())),
            "price" => Some(FieldValue::Number(self.price_per_hour)),
            "rating" => Some(FieldValue::Number(self.rating)),
            "modality" => Some(FieldValue::List(
                self.modality.iter().map(|m| m.as_str().to_string()).collect(),
            )),
            _ => None,
        }
    }
}

impl Filterable for ForumPost {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "categoria" => Some(FieldValue::Text(self.category_id.to_string())),
            _ => None,
        }
    }
}
