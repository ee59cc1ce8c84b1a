use nalgebra::DMatrix;
use thiserror::Error;

use crate::linearize::LinearTerms;

#[derive(Error, Debug)]
pub enum StateSpaceError {
    #[error("State matrix must be square and non-empty, got {rows}x{cols}")]
    StateMatrixShape { rows: usize, cols: usize },

    #[error("Input matrix must have {expected} rows to match the state matrix, got {actual}")]
    InputMatrixRows { expected: usize, actual: usize },

    #[error("Output matrix must have {expected} columns to match the state matrix, got {actual}")]
    OutputMatrixCols { expected: usize, actual: usize },

    #[error(
        "Feedthrough matrix must be {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}"
    )]
    FeedthroughShape {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

/// Continuous-time linear model `dx/dt = Ax + Bu`, `y = Cx + Du`.
///
/// Construction validates that the four matrices agree on the state, input and
/// output dimensions; the fields stay private so a constructed model is always
/// consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    a: DMatrix<f64>,
    b: DMatrix<f64>,
    c: DMatrix<f64>,
    d: DMatrix<f64>,
}

impl StateSpace {
    pub fn new(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
    ) -> Result<Self, StateSpaceError> {
        if a.nrows() == 0 || a.nrows() != a.ncols() {
            return Err(StateSpaceError::StateMatrixShape {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        let n = a.nrows();
        if b.nrows() != n {
            return Err(StateSpaceError::InputMatrixRows {
                expected: n,
                actual: b.nrows(),
            });
        }
        if c.ncols() != n {
            return Err(StateSpaceError::OutputMatrixCols {
                expected: n,
                actual: c.ncols(),
            });
        }
        if d.nrows() != c.nrows() || d.ncols() != b.ncols() {
            return Err(StateSpaceError::FeedthroughShape {
                expected_rows: c.nrows(),
                expected_cols: b.ncols(),
                actual_rows: d.nrows(),
                actual_cols: d.ncols(),
            });
        }

        Ok(Self { a, b, c, d })
    }

    pub fn from_terms(terms: LinearTerms) -> Result<Self, StateSpaceError> {
        Self::new(terms.a, terms.b, terms.c, terms.d)
    }

    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    pub fn b(&self) -> &DMatrix<f64> {
        &self.b
    }

    pub fn c(&self) -> &DMatrix<f64> {
        &self.c
    }

    pub fn d(&self) -> &DMatrix<f64> {
        &self.d
    }

    pub fn num_states(&self) -> usize {
        self.a.nrows()
    }

    pub fn num_inputs(&self) -> usize {
        self.b.ncols()
    }

    pub fn num_outputs(&self) -> usize {
        self.c.nrows()
    }
}
