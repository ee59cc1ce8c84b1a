use nalgebra::DMatrix;
use thiserror::Error;

use crate::trim::TrimPoint;

#[derive(Error, Debug)]
pub enum LinearizeError {
    #[error("Linearization unavailable: {0}")]
    Unavailable(String),

    #[error("Linearization failed at trim point: {0}")]
    Evaluation(String),
}

/// Raw linearization data as produced by a [`Linearization`] evaluator.
///
/// Carries the `(A, B, C, D)` coefficient matrices without any dimension
/// checks; validation happens when the terms are turned into a
/// [`StateSpace`](crate::StateSpace).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTerms {
    pub a: DMatrix<f64>,
    pub b: DMatrix<f64>,
    pub c: DMatrix<f64>,
    pub d: DMatrix<f64>,
}

impl LinearTerms {
    pub fn new(a: DMatrix<f64>, b: DMatrix<f64>, c: DMatrix<f64>, d: DMatrix<f64>) -> Self {
        Self { a, b, c, d }
    }

    /// Build terms from the dynamics pair alone, with `C = I` and `D = 0`.
    ///
    /// Libraries that linearize only the state equation report just `A` and
    /// `B`; the full state is then taken as the output.
    pub fn from_ab(a: DMatrix<f64>, b: DMatrix<f64>) -> Self {
        let n = a.nrows();
        let m = b.ncols();
        Self {
            c: DMatrix::identity(n, n),
            d: DMatrix::zeros(n, m),
            a,
            b,
        }
    }
}

/// External linearization interface.
///
/// `linearize` hands back an evaluator rather than the terms themselves so a
/// collaborator can prepare its differentiation once and evaluate it at any
/// number of trim points afterwards.
pub trait Linearize {
    type Output: Linearization;

    fn linearize(&self) -> Result<Self::Output, LinearizeError>;
}

/// Evaluator returned by [`Linearize::linearize`].
pub trait Linearization {
    fn evaluate(&self, point: &TrimPoint) -> Result<LinearTerms, LinearizeError>;
}
