use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use nalgebra::{dmatrix, dvector, DMatrix};
use rocketlin::{
    FlightCondition, LinearTerms, Linearization, Linearize, LinearizeError, TrimError, TrimPoint,
    TrimSolver,
};

/// Assert that two matrices match element-wise.
#[track_caller]
pub fn assert_matrix_eq(actual: &DMatrix<f64>, expected: &DMatrix<f64>, epsilon: f64) {
    assert_eq!(
        (actual.nrows(), actual.ncols()),
        (expected.nrows(), expected.ncols()),
        "matrix shapes differ"
    );
    for i in 0..actual.nrows() {
        for j in 0..actual.ncols() {
            assert_relative_eq!(
                actual[(i, j)],
                expected[(i, j)],
                epsilon = epsilon,
                max_relative = epsilon
            );
        }
    }
}

/// Canonical trim triple used by the fixtures.
pub fn sample_trim_point() -> TrimPoint {
    TrimPoint::new(
        dvector![95.0, 0.02, -0.5],
        dvector![0.45, -0.03],
        dvector![0.8],
    )
}

/// Canonical linearization terms used by the fixtures.
pub fn sample_terms() -> LinearTerms {
    LinearTerms::new(
        dmatrix![
            -0.02, 9.1, 0.0;
            -0.001, -1.2, 1.0;
            0.0, -5.6, -2.3
        ],
        dmatrix![
            0.1, 4.5;
            -0.09, 0.0;
            -11.0, 0.3
        ],
        DMatrix::identity(3, 3),
        DMatrix::zeros(3, 2),
    )
}

/// Stand-in for an external dynamics library with a known trim point and
/// linearization. Records what it is asked for, so tests can check the
/// pipeline wiring.
pub struct FixtureModel {
    pub trim_point: TrimPoint,
    pub terms: LinearTerms,
    pub trimmed_conditions: RefCell<Vec<FlightCondition>>,
    pub evaluated_points: Rc<RefCell<Vec<TrimPoint>>>,
}

impl FixtureModel {
    pub fn new() -> Self {
        Self {
            trim_point: sample_trim_point(),
            terms: sample_terms(),
            trimmed_conditions: RefCell::new(Vec::new()),
            evaluated_points: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_terms(terms: LinearTerms) -> Self {
        Self {
            terms,
            ..Self::new()
        }
    }
}

impl TrimSolver for FixtureModel {
    fn trim(&self, condition: &FlightCondition) -> Result<TrimPoint, TrimError> {
        self.trimmed_conditions.borrow_mut().push(*condition);
        Ok(self.trim_point.clone())
    }
}

pub struct FixtureLinearization {
    terms: LinearTerms,
    evaluated_points: Rc<RefCell<Vec<TrimPoint>>>,
}

impl Linearize for FixtureModel {
    type Output = FixtureLinearization;

    fn linearize(&self) -> Result<Self::Output, LinearizeError> {
        Ok(FixtureLinearization {
            terms: self.terms.clone(),
            evaluated_points: Rc::clone(&self.evaluated_points),
        })
    }
}

impl Linearization for FixtureLinearization {
    fn evaluate(&self, point: &TrimPoint) -> Result<LinearTerms, LinearizeError> {
        self.evaluated_points.borrow_mut().push(point.clone());
        Ok(self.terms.clone())
    }
}

/// Collaborator whose every call fails, for error-path tests.
pub struct FailingModel {
    pub fail_trim: bool,
    pub fail_linearize: bool,
    pub fail_evaluate: bool,
}

impl FailingModel {
    pub fn trim_failure() -> Self {
        Self {
            fail_trim: true,
            fail_linearize: false,
            fail_evaluate: false,
        }
    }

    pub fn linearize_failure() -> Self {
        Self {
            fail_trim: false,
            fail_linearize: true,
            fail_evaluate: false,
        }
    }

    pub fn evaluate_failure() -> Self {
        Self {
            fail_trim: false,
            fail_linearize: false,
            fail_evaluate: true,
        }
    }
}

impl TrimSolver for FailingModel {
    fn trim(&self, _condition: &FlightCondition) -> Result<TrimPoint, TrimError> {
        if self.fail_trim {
            Err(TrimError::Solver("did not converge".into()))
        } else {
            Ok(sample_trim_point())
        }
    }
}

pub struct FailingLinearization {
    fail_evaluate: bool,
}

impl Linearize for FailingModel {
    type Output = FailingLinearization;

    fn linearize(&self) -> Result<Self::Output, LinearizeError> {
        if self.fail_linearize {
            Err(LinearizeError::Unavailable("no derivatives".into()))
        } else {
            Ok(FailingLinearization {
                fail_evaluate: self.fail_evaluate,
            })
        }
    }
}

impl Linearization for FailingLinearization {
    fn evaluate(&self, _point: &TrimPoint) -> Result<LinearTerms, LinearizeError> {
        if self.fail_evaluate {
            Err(LinearizeError::Evaluation("singular at trim point".into()))
        } else {
            Ok(sample_terms())
        }
    }
}
