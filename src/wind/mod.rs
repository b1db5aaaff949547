//! Wind speed profiles.
//!
//! Maps a reference wind speed at a reference height onto a vector of query
//! heights, together with a uniform wind direction:
//!
//! - [`PowerWind`]: power-law shear profile, U ∝ ((z - z0)/(zref - z0))^α
//! - [`LogWind`]: logarithmic boundary-layer profile,
//!   U ∝ ln((z - z0)/z_r) / ln((zref - z0)/z_r)
//!
//! Both variants produce exactly zero speed at and below the profile bottom
//! `z0` (the ground or sea surface). That cut is a designed discontinuity:
//! an optimizer must not move a node across it, since the one-sided gradient
//! at the boundary does not reflect the (undefined) two-sided one.

mod log;
mod power;

pub use log::LogWind;
pub use power::PowerWind;

use crate::component::ComponentInfo;
use crate::error::EnvError;
use crate::jacobian::Jacobian;

/// Input validation mode.
///
/// Strict mode rejects degenerate configurations (reference height at or
/// below the profile bottom) with a `DomainError` before evaluating.
/// Permissive mode skips those checks and lets non-finite values propagate,
/// which is only useful when diagnosing a misconfigured model from its
/// numerical output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Reject degenerate inputs with a `DomainError` (the default).
    #[default]
    Strict,
    /// Skip precondition checks; NaN/inf may propagate into the outputs.
    Permissive,
}

/// Per-call wind profile input.
#[derive(Clone, Debug)]
pub struct ProfileInput {
    /// Reference wind speed, usually at hub height (m/s).
    pub u_ref: f64,
    /// Height the reference speed was measured at (m).
    pub z_ref: f64,
    /// Heights where the wind speed should be computed (m).
    pub z: Vec<f64>,
}

impl ProfileInput {
    /// Create a profile input.
    pub fn new(u_ref: f64, z_ref: f64, z: Vec<f64>) -> Self {
        Self { u_ref, z_ref, z }
    }
}

/// Wind profile evaluation result.
#[derive(Clone, Debug)]
pub struct WindOutputs {
    /// Wind speed magnitude at each query height (m/s).
    pub u: Vec<f64>,
    /// Wind direction at each query height, relative to the inertial
    /// coordinate system (deg). Uniform for both profile variants.
    pub beta: Vec<f64>,
}

/// A wind profile model: closed-form evaluation plus analytic linearization.
pub trait WindModel: ComponentInfo {
    /// Evaluate speed and direction at each query height.
    fn evaluate(&self, input: &ProfileInput) -> Result<WindOutputs, EnvError>;

    /// Jacobian of the evaluation, consistent with `outputs` as returned by
    /// [`WindModel::evaluate`] for the same `input`.
    fn linearize(&self, input: &ProfileInput, outputs: &WindOutputs) -> Result<Jacobian, EnvError>;
}
