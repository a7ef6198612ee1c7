//! Data
//!
//! Discrete value types and the labeled `Dataset` container the tree is learned from.
use crate::errors::TreeError;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for discrete attribute and label values.
///
/// Values are only ever compared for equality when splitting; `Ord` is
/// required so branches keep their children in a stable order.
pub trait Category: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T> Category for T where T: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

/// A mixed categorical value.
///
/// Lets integer attributes and string labels live in the same record,
/// e.g. `[1, 0, "no"]`. Serializes as the bare inner value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Attribute values followed by a trailing label.
pub type Record<V> = Vec<V>;

/// Non-empty sequence of records sharing one arity.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset<V> {
    records: Vec<Record<V>>,
    arity: usize,
}

impl<V: Category> Dataset<V> {
    /// Validate and wrap a set of records.
    ///
    /// Every record must have the length of the first one, and that length
    /// must leave room for the label.
    pub fn new(records: Vec<Record<V>>) -> Result<Self, TreeError> {
        let arity = records.first().map(|r| r.len()).ok_or(TreeError::EmptyDataset)?;
        if arity == 0 {
            return Err(TreeError::ArityMismatch {
                row: 0,
                expected: 1,
                found: 0,
            });
        }
        if let Some((row, r)) = records.iter().enumerate().find(|(_, r)| r.len() != arity) {
            return Err(TreeError::ArityMismatch {
                row,
                expected: arity,
                found: r.len(),
            });
        }
        Ok(Dataset { records, arity })
    }

    pub fn records(&self) -> &[Record<V>] {
        &self.records
    }

    pub fn n_records(&self) -> usize {
        self.records.len()
    }

    /// Record length, label included.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of attribute columns, the label excluded.
    pub fn n_attributes(&self) -> usize {
        self.arity - 1
    }

    pub fn labels(&self) -> impl Iterator<Item = &V> + '_ {
        let label_idx = self.arity - 1;
        self.records.iter().map(move |r| &r[label_idx])
    }

    /// Distinct values of an attribute column, in first-seen order.
    pub fn distinct_values(&self, axis: usize) -> Result<Vec<V>, TreeError> {
        self.check_attribute_axis(axis)?;
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for r in self.records.iter() {
            let v = &r[axis];
            if seen.insert(v) {
                values.push(v.clone());
            }
        }
        Ok(values)
    }

    /// True when every record carries the same label.
    pub fn is_pure(&self) -> bool {
        let mut labels = self.labels();
        match labels.next() {
            Some(first) => labels.all(|l| l == first),
            None => true,
        }
    }

    /// Records whose attribute at `axis` equals `value`, with that column removed.
    pub fn reduce(&self, axis: usize, value: &V) -> Result<Dataset<V>, TreeError> {
        self.check_attribute_axis(axis)?;
        let records = reduce_dataset(&self.records, axis, value);
        if records.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        Ok(Dataset {
            records,
            arity: self.arity - 1,
        })
    }

    fn check_attribute_axis(&self, axis: usize) -> Result<(), TreeError> {
        if axis >= self.n_attributes() {
            Err(TreeError::InvariantViolation(format!(
                "attribute index {} out of range for {} attribute columns",
                axis,
                self.n_attributes()
            )))
        } else {
            Ok(())
        }
    }
}

/// Keep the records whose value at `axis` equals `value`, dropping that column.
///
/// Survivors keep their relative order and are freshly allocated; the input
/// is left untouched.
pub fn reduce_dataset<V: Category>(records: &[Record<V>], axis: usize, value: &V) -> Vec<Record<V>> {
    records
        .iter()
        .filter(|r| r.get(axis) == Some(value))
        .map(|r| {
            let mut reduced = Vec::with_capacity(r.len() - 1);
            reduced.extend_from_slice(&r[..axis]);
            reduced.extend_from_slice(&r[axis + 1..]);
            reduced
        })
        .collect()
}
