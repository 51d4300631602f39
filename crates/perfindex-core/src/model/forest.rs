//! Regression-forest artifact
//!
//! Each tree is a flat node array rooted at index 0:
//!
//! ```json
//! {"nodes": [
//!   {"feature": 1, "threshold": 60.5, "left": 1, "right": 2},
//!   {"value": 41.2},
//!   {"value": 78.9}
//! ]}
//! ```
//!
//! A sample goes left when `x[feature] <= threshold`. Child indices must
//! point forward, so every walk terminates. The forest predicts the mean of
//! its trees.

use serde::Deserialize;

use super::Predictor;
use crate::error::InferenceError;
use crate::features::{FeatureVector, FEATURE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self, String> {
        let tree = RegressionTree { nodes };
        tree.check()?;
        Ok(tree)
    }

    fn check(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(format!(
                            "node {} splits on feature {} (only {} features)",
                            index, feature, FEATURE_COUNT
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", index));
                    }
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(format!(
                                "node {} has invalid child index {}",
                                index, child
                            ));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("node {} has a non-finite leaf value", index));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf
    pub fn evaluate(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = features
                        .as_slice()
                        .get(*feature)
                        .ok_or_else(|| InferenceError::failed("split on unknown feature"))?;
                    let next = if *x <= *threshold { *left } else { *right };
                    if next <= index {
                        return Err(InferenceError::failed("tree walk did not advance"));
                    }
                    index = next;
                }
                None => return Err(InferenceError::failed("tree walk left the node array")),
            }
        }
    }
}

/// Mean of an ensemble of regression trees
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForestModel {
    trees: Vec<RegressionTree>,
}

impl ForestModel {
    pub fn new(trees: Vec<RegressionTree>) -> Result<Self, String> {
        let forest = ForestModel { trees };
        forest.check()?;
        Ok(forest)
    }

    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.check().map_err(|e| format!("tree {}: {}", index, e))?;
        }
        Ok(())
    }
}

impl Predictor for ForestModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}
