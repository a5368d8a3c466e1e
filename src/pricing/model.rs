// src/pricing/model.rs

use crate::pricing::error::{InferenceError, ModelError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Marks a leaf in the scikit-learn child arrays.
const LEAF: i64 = -1;

// prediction artifact (JSON export of the trained estimator)
//  ├── feature_names_in      training-time column order
//  ├── output_transform      identity | expm1
//  └── regressor
//       ├── kind: linear         intercept, coefficients[]
//       └── kind: tree_ensemble  base_score, trees[]
//                                 ├── children_left / children_right
//                                 ├── feature / threshold
//                                 └── value

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names_in: Vec<String>,
    #[serde(default)]
    pub output_transform: OutputTransform,
    pub regressor: Regressor,
}

/// Applied to the raw regressor output before it is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTransform {
    #[default]
    Identity,
    /// For models fitted on `log1p(price)`.
    Expm1,
}

impl OutputTransform {
    pub fn apply(&self, raw: f64) -> f64 {
        match self {
            OutputTransform::Identity => raw,
            OutputTransform::Expm1 => raw.exp_m1(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    TreeEnsemble {
        base_score: f64,
        trees: Vec<RegressionTree>,
    },
}

/// One regression tree in scikit-learn's parallel-array layout.
/// Node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl RegressionTree {
    fn len(&self) -> usize {
        self.children_left.len()
    }

    fn check(&self, index: usize, n_features: usize) -> Result<(), String> {
        let n = self.len();
        if n == 0 {
            return Err(format!("tree {index} has no nodes"));
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err(format!("tree {index} has node arrays of unequal length"));
        }

        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);

            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(format!("tree {index} node {node} has a single child"));
                }
                if !self.value[node].is_finite() {
                    return Err(format!("tree {index} leaf {node} has a non-finite value"));
                }
                continue;
            }

            for child in [left, right] {
                if child < 0 || child as usize >= n {
                    return Err(format!(
                        "tree {index} node {node} points at missing node {child}"
                    ));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!(
                    "tree {index} node {node} splits on unknown feature {feature}"
                ));
            }
            if !self.threshold[node].is_finite() {
                return Err(format!("tree {index} node {node} has a non-finite threshold"));
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf. A well-formed tree visits at most
    /// `len` nodes, so anything longer is a cycle.
    fn leaf_value(&self, tree: usize, row: &[f64]) -> Result<f64, InferenceError> {
        let len = self.len();
        let mut node: i64 = 0;

        for _ in 0..len {
            let idx = usize::try_from(node)
                .ok()
                .filter(|&i| i < len)
                .ok_or(InferenceError::NodeOutOfRange { tree, node, len })?;

            if self.children_left[idx] == LEAF {
                return Ok(self.value[idx]);
            }

            let x = usize::try_from(self.feature[idx])
                .ok()
                .and_then(|f| row.get(f))
                .copied()
                .ok_or(InferenceError::NodeOutOfRange { tree, node, len })?;

            node = if x <= self.threshold[idx] {
                self.children_left[idx]
            } else {
                self.children_right[idx]
            };
        }

        Err(InferenceError::Unterminated { tree })
    }
}

impl Regressor {
    pub fn kind(&self) -> &'static str {
        match self {
            Regressor::Linear { .. } => "linear",
            Regressor::TreeEnsemble { .. } => "tree_ensemble",
        }
    }

    fn check(&self, n_features: usize) -> Result<(), String> {
        match self {
            Regressor::Linear {
                intercept,
                coefficients,
            } => {
                if coefficients.len() != n_features {
                    return Err(format!(
                        "{} coefficients for {n_features} features",
                        coefficients.len()
                    ));
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err("linear model has non-finite parameters".into());
                }
                Ok(())
            }
            Regressor::TreeEnsemble { base_score, trees } => {
                if trees.is_empty() {
                    return Err("tree ensemble has no trees".into());
                }
                if !base_score.is_finite() {
                    return Err("tree ensemble has a non-finite base score".into());
                }
                trees
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, tree)| tree.check(i, n_features))
            }
        }
    }

    /// Raw model output for one row, before the output transform.
    fn score(&self, row: &[f64]) -> Result<f64, InferenceError> {
        match self {
            Regressor::Linear {
                intercept,
                coefficients,
            } => Ok(intercept
                + coefficients
                    .iter()
                    .zip(row)
                    .map(|(c, x)| c * x)
                    .sum::<f64>()),
            Regressor::TreeEnsemble { base_score, trees } => {
                let mut total = *base_score;
                for (i, tree) in trees.iter().enumerate() {
                    total += tree.leaf_value(i, row)?;
                }
                Ok(total)
            }
        }
    }
}

/// A loaded, validated model. Never mutated after construction, so one
/// instance is shared by every request.
#[derive(Debug)]
pub struct PriceModel {
    feature_order: Vec<String>,
    output_transform: OutputTransform,
    regressor: Regressor,
    fingerprint: String,
}

impl PriceModel {
    /// Read and validate the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ModelError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ModelError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let model = Self::from_slice(&bytes)?;

        tracing::info!(
            path = %path.display(),
            kind = model.kind(),
            features = model.feature_order.len(),
            fingerprint = %model.fingerprint,
            "model loaded"
        );

        Ok(model)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ModelArtifact =
            serde_json::from_slice(bytes).map_err(|e| ModelError::Invalid(e.to_string()))?;
        let fingerprint = format!("{:x}", Sha256::digest(bytes));
        Self::from_artifact(artifact, fingerprint)
    }

    pub fn from_artifact(artifact: ModelArtifact, fingerprint: String) -> Result<Self, ModelError> {
        let names = &artifact.feature_names_in;
        if names.is_empty() {
            return Err(ModelError::Invalid("feature_names_in is empty".into()));
        }
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ModelError::Invalid("feature_names_in has a blank name".into()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(ModelError::Invalid(format!("duplicate feature name `{dup}`")));
        }

        artifact
            .regressor
            .check(names.len())
            .map_err(ModelError::Invalid)?;

        Ok(Self {
            feature_order: artifact.feature_names_in,
            output_transform: artifact.output_transform,
            regressor: artifact.regressor,
            fingerprint,
        })
    }

    /// Training-time column order.
    pub fn feature_order(&self) -> &[String] {
        &self.feature_order
    }

    pub fn kind(&self) -> &'static str {
        self.regressor.kind()
    }

    /// SHA-256 of the artifact bytes, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Score one row laid out in `feature_order`.
    pub(crate) fn score_row(&self, row: &[f64]) -> Result<f64, InferenceError> {
        let raw = self.regressor.score(row)?;
        let out = self.output_transform.apply(raw);
        if !out.is_finite() {
            return Err(InferenceError::NonFinite(out));
        }
        Ok(out)
    }
}
