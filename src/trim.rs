use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("Invalid trim condition: {0}")]
    InvalidCondition(String),

    #[error("Trim solver failed: {0}")]
    Solver(String),
}

/// Flight condition a trim point is requested for.
///
/// Angles are carried in degrees, matching the wire format of the dynamics
/// libraries this crate fronts; use [`FlightCondition::flight_path_rad`] when
/// radians are needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightCondition {
    /// True airspeed, m/s
    pub airspeed: f64,
    /// Flight path angle, degrees
    pub flight_path_deg: f64,
    /// Remaining fuel as a fraction of capacity
    pub fuel_fraction: f64,
}

impl Default for FlightCondition {
    fn default() -> Self {
        Self {
            airspeed: 100.0,
            flight_path_deg: 0.0,
            fuel_fraction: 0.8,
        }
    }
}

impl FlightCondition {
    pub fn new(airspeed: f64, flight_path_deg: f64, fuel_fraction: f64) -> Self {
        Self {
            airspeed,
            flight_path_deg,
            fuel_fraction,
        }
    }

    pub fn flight_path_rad(&self) -> f64 {
        self.flight_path_deg.to_radians()
    }

    /// Check the condition before it reaches an external solver.
    pub fn validate(&self) -> Result<(), TrimError> {
        if !self.airspeed.is_finite() || self.airspeed <= 0.0 {
            return Err(TrimError::InvalidCondition(format!(
                "airspeed must be finite and positive, got {}",
                self.airspeed
            )));
        }
        if !self.flight_path_deg.is_finite() || self.flight_path_deg.abs() >= 90.0 {
            return Err(TrimError::InvalidCondition(format!(
                "flight path angle must be within (-90, 90) degrees, got {}",
                self.flight_path_deg
            )));
        }
        if !self.fuel_fraction.is_finite() || !(0.0..=1.0).contains(&self.fuel_fraction) {
            return Err(TrimError::InvalidCondition(format!(
                "fuel fraction must be within [0, 1], got {}",
                self.fuel_fraction
            )));
        }
        Ok(())
    }
}

/// Equilibrium reported by an external trim solver.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimPoint {
    /// State vector at equilibrium
    pub state: DVector<f64>,
    /// Input vector holding the equilibrium
    pub input: DVector<f64>,
    /// Parameter vector the equilibrium was solved for
    pub parameter: DVector<f64>,
}

impl TrimPoint {
    pub fn new(state: DVector<f64>, input: DVector<f64>, parameter: DVector<f64>) -> Self {
        Self {
            state,
            input,
            parameter,
        }
    }
}

/// External trim interface.
///
/// Implementations are supplied by the dynamics library being fronted; this
/// crate only defines the seam.
pub trait TrimSolver {
    fn trim(&self, condition: &FlightCondition) -> Result<TrimPoint, TrimError>;
}
