//! Decision tree ensemble loaded from per-tree node arrays.
//!
//! Each tree is stored the way tree learners usually expose their fitted
//! structure: parallel arrays indexed by node id, with `-1` marking a
//! missing child. A row goes left when `x[feature] <= threshold`. Leaf
//! `value` rows hold per-class weights; they are normalised to
//! probabilities and averaged over all trees.

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::check_shape;

const LEAF: i64 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f32>,
    pub value: Vec<Vec<f32>>,
}

impl DecisionTree {
    fn n_nodes(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> std::result::Result<(), String> {
        let n = self.n_nodes();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(format!("node arrays have inconsistent lengths (expected {})", n));
        }
        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if (left == LEAF) != (right == LEAF) {
                return Err(format!("node {} has exactly one child", node));
            }
            if left == LEAF {
                if self.value[node].len() != n_classes {
                    return Err(format!(
                        "leaf {} has {} class weights, expected {}",
                        node,
                        self.value[node].len(),
                        n_classes
                    ));
                }
                if self.value[node].iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(format!("leaf {} has a non-finite or negative class weight", node));
                }
                continue;
            }
            // children must point forward, which also rules out cycles
            for child in [left, right] {
                if child <= node as i64 || child as usize >= n {
                    return Err(format!("node {} has invalid child {}", node, child));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!("node {} splits on invalid feature {}", node, feature));
            }
            if !self.threshold[node].is_finite() {
                return Err(format!("node {} has a non-finite threshold", node));
            }
        }
        Ok(())
    }

    fn leaf_for(&self, x: &[f32]) -> usize {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        node
    }
}

/// Ensemble of decision trees voting with averaged class probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForestFile", into = "ForestFile")]
pub struct ForestClassifier {
    n_features: usize,
    classes: Vec<i64>,
    trees: Vec<DecisionTree>,
}

/// Serialized layout of a [`ForestClassifier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestFile {
    pub n_features: usize,
    pub classes: Vec<i64>,
    pub trees: Vec<DecisionTree>,
}

impl TryFrom<ForestFile> for ForestClassifier {
    type Error = String;

    fn try_from(file: ForestFile) -> std::result::Result<Self, Self::Error> {
        ForestClassifier::new(file.n_features, file.classes, file.trees)
    }
}

impl From<ForestClassifier> for ForestFile {
    fn from(model: ForestClassifier) -> Self {
        ForestFile {
            n_features: model.n_features,
            classes: model.classes,
            trees: model.trees,
        }
    }
}

impl ForestClassifier {
    pub fn new(
        n_features: usize,
        classes: Vec<i64>,
        trees: Vec<DecisionTree>,
    ) -> std::result::Result<Self, String> {
        if classes.is_empty() {
            return Err("forest has no classes".to_string());
        }
        if trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(n_features, classes.len())
                .map_err(|e| format!("tree {}: {}", i, e))?;
        }
        Ok(Self {
            n_features,
            classes,
            trees,
        })
    }

    /// Class probabilities averaged over all trees, in `classes` order.
    pub fn predict_proba(&self, x: &[f32]) -> Result<Vec<f32>> {
        check_shape(self, x)?;
        let mut proba = vec![0.0f32; self.classes.len()];
        for tree in &self.trees {
            let weights = &tree.value[tree.leaf_for(x)];
            let total: f32 = weights.iter().sum();
            if !total.is_finite() || total <= 0.0 {
                return Err(PredictError::ModelInference(
                    "leaf with no usable class weight".to_string(),
                ));
            }
            for (p, w) in proba.iter_mut().zip(weights) {
                *p += w / total;
            }
        }
        let n_trees = self.trees.len() as f32;
        for p in proba.iter_mut() {
            *p /= n_trees;
        }
        Ok(proba)
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }
}

impl ClassifierModel for ForestClassifier {
    fn predict(&self, x: &[f32]) -> Result<i64> {
        let proba = self.predict_proba(x)?;
        // first maximum wins on ties
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        Ok(self.classes[best])
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        "forest"
    }
}
