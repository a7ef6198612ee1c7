//! Splitter
//!
//! Information-gain attribute selection.
use crate::constants::MIN_INFORMATION_GAIN;
use crate::data::{Category, Dataset};
use crate::errors::TreeError;
use crate::utils::{entropy, split_entropy};
use log::trace;

/// The attribute a node splits on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    /// Column index, label excluded.
    pub axis: usize,
    pub gain: f64,
}

/// Outcome of attribute selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Split(SplitInfo),
    /// No attribute reduces entropy; the caller falls back to the majority label.
    NoAdequateAttribute,
}

/// Information gain of every attribute, in column order.
pub fn attribute_gains<V: Category>(dataset: &Dataset<V>) -> Result<Vec<f64>, TreeError> {
    let base_entropy = entropy(dataset.records())?;
    (0..dataset.n_attributes())
        .map(|axis| split_entropy(dataset, axis).map(|h| base_entropy - h))
        .collect()
}

/// Pick the attribute with the largest information gain.
///
/// Attributes are scanned in ascending order and only a strictly larger
/// gain replaces the current best, so the earliest attribute wins ties.
pub fn choose_optimal_attribute<V: Category>(dataset: &Dataset<V>) -> Result<Selection, TreeError> {
    let mut best = Selection::NoAdequateAttribute;
    let mut best_gain = MIN_INFORMATION_GAIN;
    for (axis, gain) in attribute_gains(dataset)?.into_iter().enumerate() {
        trace!("Attribute {} has information gain {:.6}", axis, gain);
        if gain > best_gain {
            best_gain = gain;
            best = Selection::Split(SplitInfo { axis, gain });
        }
    }
    Ok(best)
}
