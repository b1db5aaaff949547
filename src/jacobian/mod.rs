//! Jacobian bookkeeping for analytic sensitivities.
//!
//! A [`Jacobian`] maps `(output, input)` name pairs to [`Sensitivity`] blocks.
//! It is created zero-filled over the full cross product of a component's
//! declared derivative outputs and inputs, so a pair with no physical
//! dependency holds an explicit zero block of the correct shape rather than
//! being absent. Consumers that assemble a global sensitivity structure rely
//! on this completeness.
//!
//! Elementwise dependencies (speed at height i depends only on height i) are
//! stored as [`Sensitivity::Diagonal`] to keep the intent visible; they
//! materialize to dense blocks on demand.

mod stack;

pub use stack::{hstack, vstack};

use crate::error::DomainError;
use faer::Mat;
use std::collections::BTreeMap;

/// One sensitivity block: the partial derivatives of one output vector with
/// respect to one input vector.
#[derive(Clone, Debug)]
pub enum Sensitivity {
    /// Dense block of shape (len(output), len(input)).
    Dense(Mat<f64>),
    /// Square elementwise block: entry i holds d(out_i)/d(in_i), all
    /// off-diagonal entries are zero.
    Diagonal(Vec<f64>),
    /// 1 x 1 block between two scalars.
    Scalar(f64),
}

impl Sensitivity {
    /// Dense zero block of the given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Sensitivity::Dense(Mat::zeros(nrows, ncols))
    }

    /// Dense column vector (n x 1) from a slice.
    pub fn column(values: &[f64]) -> Self {
        let mut m = Mat::zeros(values.len(), 1);
        for (i, &v) in values.iter().enumerate() {
            m[(i, 0)] = v;
        }
        Sensitivity::Dense(m)
    }

    /// Shape of the block as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Sensitivity::Dense(m) => (m.nrows(), m.ncols()),
            Sensitivity::Diagonal(d) => (d.len(), d.len()),
            Sensitivity::Scalar(_) => (1, 1),
        }
    }

    /// Materialize the block as a dense matrix.
    pub fn to_dense(&self) -> Mat<f64> {
        match self {
            Sensitivity::Dense(m) => m.clone(),
            Sensitivity::Diagonal(d) => {
                let mut m = Mat::zeros(d.len(), d.len());
                for (i, &v) in d.iter().enumerate() {
                    m[(i, i)] = v;
                }
                m
            }
            Sensitivity::Scalar(v) => {
                let mut m = Mat::zeros(1, 1);
                m[(0, 0)] = *v;
                m
            }
        }
    }

    /// Entry (i, j) of the block.
    pub fn entry(&self, i: usize, j: usize) -> f64 {
        match self {
            Sensitivity::Dense(m) => m[(i, j)],
            Sensitivity::Diagonal(d) => {
                if i == j {
                    d[i]
                } else {
                    0.0
                }
            }
            Sensitivity::Scalar(v) => {
                debug_assert!(i == 0 && j == 0);
                *v
            }
        }
    }
}

/// Complete sensitivity structure of one component evaluation.
///
/// Keyed by `(output, input)` variable names; every declared pair is present.
/// Block ordering in [`Jacobian::assemble`] follows declaration order.
#[derive(Clone, Debug)]
pub struct Jacobian {
    outputs: Vec<(&'static str, usize)>,
    inputs: Vec<(&'static str, usize)>,
    blocks: BTreeMap<(&'static str, &'static str), Sensitivity>,
}

impl Jacobian {
    /// Create a Jacobian with every declared (output, input) block zero-filled
    /// at the shape implied by the declared lengths.
    pub fn zeroed(outputs: &[(&'static str, usize)], inputs: &[(&'static str, usize)]) -> Self {
        let mut blocks = BTreeMap::new();
        for &(out_name, out_len) in outputs {
            for &(in_name, in_len) in inputs {
                blocks.insert((out_name, in_name), Sensitivity::zeros(out_len, in_len));
            }
        }
        Self {
            outputs: outputs.to_vec(),
            inputs: inputs.to_vec(),
            blocks,
        }
    }

    /// Declared outputs with their lengths, in declaration order.
    pub fn outputs(&self) -> &[(&'static str, usize)] {
        &self.outputs
    }

    /// Declared inputs with their lengths, in declaration order.
    pub fn inputs(&self) -> &[(&'static str, usize)] {
        &self.inputs
    }

    /// Total row count of the assembled matrix.
    pub fn n_rows(&self) -> usize {
        self.outputs.iter().map(|&(_, len)| len).sum()
    }

    /// Total column count of the assembled matrix.
    pub fn n_cols(&self) -> usize {
        self.inputs.iter().map(|&(_, len)| len).sum()
    }

    fn declared_shape(&self, output: &str, input: &str) -> Option<(usize, usize)> {
        let out_len = self.outputs.iter().find(|&&(n, _)| n == output)?.1;
        let in_len = self.inputs.iter().find(|&&(n, _)| n == input)?.1;
        Some((out_len, in_len))
    }

    /// Overwrite one block.
    ///
    /// # Panics
    ///
    /// Panics if the pair was not declared at construction, or the block shape
    /// does not match the declared lengths. Both indicate a bug in the calling
    /// `linearize` implementation, not bad user input.
    pub fn set(&mut self, output: &'static str, input: &'static str, block: Sensitivity) {
        let declared = self
            .declared_shape(output, input)
            .unwrap_or_else(|| panic!("undeclared Jacobian pair ({output}, {input})"));
        assert_eq!(
            block.shape(),
            declared,
            "block ({output}, {input}) has shape {:?}, declared {:?}",
            block.shape(),
            declared
        );
        self.blocks.insert((output, input), block);
    }

    /// Block for a declared pair, if present.
    pub fn get(&self, output: &str, input: &str) -> Option<&Sensitivity> {
        self.blocks
            .iter()
            .find(|(key, _)| key.0 == output && key.1 == input)
            .map(|(_, block)| block)
    }

    /// Dense copy of a declared block.
    pub fn dense(&self, output: &str, input: &str) -> Option<Mat<f64>> {
        self.get(output, input).map(Sensitivity::to_dense)
    }

    /// Assemble the full dense matrix: one row stripe per declared output,
    /// one column stripe per declared input, in declaration order.
    pub fn assemble(&self) -> Result<Mat<f64>, DomainError> {
        let mut row_stripes = Vec::with_capacity(self.outputs.len());
        for &(out_name, _) in &self.outputs {
            let row: Vec<Mat<f64>> = self
                .inputs
                .iter()
                .map(|&(in_name, _)| {
                    self.blocks
                        .get(&(out_name, in_name))
                        .map(Sensitivity::to_dense)
                        .unwrap_or_else(|| Mat::zeros(0, 0))
                })
                .collect();
            row_stripes.push(hstack(&row)?);
        }
        vstack(&row_stripes)
    }
}
