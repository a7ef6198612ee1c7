//! Tree
//!
//! Recursive ID3 induction and the fitted `Tree` wrapper.
use crate::config::TreeConfig;
use crate::data::{Category, Dataset, Record};
use crate::errors::TreeError;
use crate::node::Node;
use crate::splitter::{choose_optimal_attribute, Selection};
use crate::utils::majority_label;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A decision tree learned from a labeled dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<V> {
    pub root: Node<V>,
    /// Attribute names the tree was fitted with, in column order.
    pub attributes: Vec<String>,
    pub depth: usize,
    pub n_leaves: usize,
}

impl<V: Category> Tree<V> {
    /// Fit a tree on a validated dataset.
    ///
    /// * `dataset` - Records with the label in the last position.
    /// * `attributes` - One name per attribute column.
    /// * `cfg` - Growth options.
    pub fn fit(dataset: &Dataset<V>, attributes: &[String], cfg: &TreeConfig) -> Result<Self, TreeError> {
        let root = grow(dataset, attributes, cfg, 0)?;
        let tree = Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            attributes: attributes.to_vec(),
            root,
        };
        info!(
            "Fitted tree on {} records: depth {}, {} nodes, {} leaves, {} of {} attributes used.",
            dataset.n_records(),
            tree.depth,
            tree.root.n_nodes(),
            tree.n_leaves,
            tree.root.attributes_used().len(),
            tree.attributes.len()
        );
        Ok(tree)
    }

    /// Validate raw records, then fit.
    pub fn from_records(records: Vec<Record<V>>, attributes: &[String], cfg: &TreeConfig) -> Result<Self, TreeError> {
        let dataset = Dataset::new(records)?;
        Self::fit(&dataset, attributes, cfg)
    }
}

impl<V: Serialize> Tree<V> {
    /// Dump the tree as nested JSON maps.
    pub fn json_dump(&self) -> Result<String, TreeError> {
        match serde_json::to_string(&self.root) {
            Ok(s) => Ok(s),
            Err(e) => Err(TreeError::UnableToWrite(e.to_string())),
        }
    }
}

impl<V: Display> Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Build an ID3 tree sequentially.
pub fn make_tree<V: Category>(dataset: &Dataset<V>, attributes: &[String]) -> Result<Node<V>, TreeError> {
    grow(dataset, attributes, &TreeConfig::default(), 0)
}

fn grow<V: Category>(
    dataset: &Dataset<V>,
    attributes: &[String],
    cfg: &TreeConfig,
    depth: usize,
) -> Result<Node<V>, TreeError> {
    if attributes.len() != dataset.n_attributes() {
        return Err(TreeError::InvariantViolation(format!(
            "{} attribute names for {} attribute columns",
            attributes.len(),
            dataset.n_attributes()
        )));
    }

    if dataset.is_pure() {
        let label = dataset.labels().next().ok_or(TreeError::EmptyDataset)?;
        return Ok(Node::Leaf(label.clone()));
    }
    if attributes.is_empty() {
        return majority_leaf(dataset);
    }

    let info = match choose_optimal_attribute(dataset)? {
        Selection::Split(info) => info,
        Selection::NoAdequateAttribute => {
            debug!("No attribute reduces entropy at depth {}, closing node with the majority label.", depth);
            return majority_leaf(dataset);
        }
    };
    let attribute = attributes[info.axis].clone();
    debug!(
        "Splitting {} records on {} (gain {:.6}) at depth {}.",
        dataset.n_records(),
        attribute,
        info.gain,
        depth
    );

    // Every child gets its own copy of the remaining names.
    let sub_attributes: Vec<String> = attributes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != info.axis)
        .map(|(_, a)| a.clone())
        .collect();

    let values = dataset.distinct_values(info.axis)?;
    let build_child = |value: V| -> Result<(V, Node<V>), TreeError> {
        let reduced = dataset.reduce(info.axis, &value)?;
        let child = grow(&reduced, &sub_attributes, cfg, depth + 1)?;
        Ok((value, child))
    };
    let children: BTreeMap<V, Node<V>> = if cfg.parallel {
        values.into_par_iter().map(build_child).collect::<Result<_, _>>()?
    } else {
        values.into_iter().map(build_child).collect::<Result<_, _>>()?
    };

    Ok(Node::Branch { attribute, children })
}

fn majority_leaf<V: Category>(dataset: &Dataset<V>) -> Result<Node<V>, TreeError> {
    Ok(Node::Leaf(majority_label(dataset.records())?))
}
