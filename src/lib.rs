mod config;
mod design;
mod export;
mod linearize;
mod state_space;
mod trim;

pub use config::{ConfigError, DesignConfig};
pub use design::{design_point, DesignError, DesignPoint};
pub use export::{save_state_space_csv, write_matrix_csv};
pub use linearize::{Linearization, Linearize, LinearTerms, LinearizeError};
pub use state_space::{StateSpace, StateSpaceError};
pub use trim::{FlightCondition, TrimError, TrimPoint, TrimSolver};
