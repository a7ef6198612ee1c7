use crate::data::Category;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A decision tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<V> {
    /// Terminal node holding a label.
    Leaf(V),
    /// Split on `attribute`, one child per observed value.
    Branch {
        attribute: String,
        children: BTreeMap<V, Node<V>>,
    },
}

impl<V: Category> Node<V> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn label(&self) -> Option<&V> {
        match self {
            Node::Leaf(label) => Some(label),
            Node::Branch { .. } => None,
        }
    }

    pub fn attribute(&self) -> Option<&str> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch { attribute, .. } => Some(attribute.as_str()),
        }
    }

    /// Child reached when the split attribute takes `value`.
    pub fn child(&self, value: &V) -> Option<&Node<V>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch { children, .. } => children.get(value),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch { children, .. } => 1 + children.values().map(|c| c.depth()).max().unwrap_or(0),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch { children, .. } => children.values().map(|c| c.n_leaves()).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch { children, .. } => 1 + children.values().map(|c| c.n_nodes()).sum::<usize>(),
        }
    }

    /// Distinct split attributes, in pre-order.
    pub fn attributes_used(&self) -> Vec<&str> {
        let mut used = Vec::new();
        self.collect_attributes(&mut used);
        used
    }

    fn collect_attributes<'a>(&'a self, used: &mut Vec<&'a str>) {
        if let Node::Branch { attribute, children } = self {
            if !used.contains(&attribute.as_str()) {
                used.push(attribute.as_str());
            }
            for c in children.values() {
                c.collect_attributes(used);
            }
        }
    }
}

/// Leaves serialize as the bare label, branches as
/// `{attribute: {value: subtree, ...}}`.
impl<V: Serialize> Serialize for Node<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(label) => label.serialize(serializer),
            Node::Branch { attribute, children } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(attribute, children)?;
                map.end()
            }
        }
    }
}

impl<V: Display> Node<V> {
    fn fmt_depth(&self, depth: usize, f: &mut fmt::Formatter) -> fmt::Result {
        let indent = "      ".repeat(depth);
        match self {
            Node::Leaf(label) => writeln!(f, "{}leaf: {}", indent, label),
            Node::Branch { attribute, children } => {
                writeln!(f, "{}split: {}", indent, attribute)?;
                for (value, child) in children {
                    writeln!(f, "{}  {} =", indent, value)?;
                    child.fmt_depth(depth + 1, f)?;
                }
                Ok(())
            }
        }
    }
}

impl<V: Display> Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_depth(0, f)
    }
}
