use log::{debug, info};
use thiserror::Error;

use crate::linearize::{Linearization, Linearize, LinearizeError};
use crate::state_space::{StateSpace, StateSpaceError};
use crate::trim::{FlightCondition, TrimError, TrimPoint, TrimSolver};

#[derive(Error, Debug)]
pub enum DesignError {
    #[error("Trim error: {0}")]
    Trim(#[from] TrimError),

    #[error("Linearization error: {0}")]
    Linearize(#[from] LinearizeError),

    #[error("State-space error: {0}")]
    StateSpace(#[from] StateSpaceError),
}

/// Trim point and the linear model extracted around it.
#[derive(Debug, Clone)]
pub struct DesignPoint {
    pub trim: TrimPoint,
    pub system: StateSpace,
}

/// Compute a design point for `condition` against an external dynamics model.
///
/// The call order is the contract: the model is trimmed first, its
/// linearization is evaluated at exactly the triple the solver returned, and
/// the resulting terms are validated into a [`StateSpace`].
pub fn design_point<M>(
    model: &M,
    condition: &FlightCondition,
) -> Result<DesignPoint, DesignError>
where
    M: TrimSolver + Linearize,
{
    condition.validate()?;

    debug!(
        "Requesting trim at {:.1} m/s, gamma {:.1} deg, fuel {:.2}",
        condition.airspeed, condition.flight_path_deg, condition.fuel_fraction
    );
    let trim = model.trim(condition)?;

    let linearization = model.linearize()?;
    let terms = linearization.evaluate(&trim)?;
    let system = StateSpace::from_terms(terms)?;

    info!(
        "Design point ready at {:.1} m/s: {} states, {} inputs, {} outputs",
        condition.airspeed,
        system.num_states(),
        system.num_inputs(),
        system.num_outputs()
    );

    Ok(DesignPoint { trim, system })
}
