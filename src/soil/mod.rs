//! Soil foundation stiffness.
//!
//! Produces the 6-entry diagonal spring stiffness of a tower foundation,
//! ordered (x, θx, y, θy, z, θz):
//!
//! - [`TowerSoil`]: textbook elastic half-space formulas with embedment
//!   correction factors.
//! - [`SoilPassthrough`]: forwards a caller-supplied stiffness vector, used
//!   to bypass the textbook formulas when an external estimate is preferred.
//!
//! Directions flagged rigid are forced to infinite stiffness and carry
//! exactly zero stiffness sensitivity.

mod passthrough;
mod textbook;

pub use passthrough::SoilPassthrough;
pub use textbook::TowerSoil;

use crate::component::ComponentInfo;
use crate::error::EnvError;
use crate::jacobian::Jacobian;

/// Degree-of-freedom names in stiffness-vector order.
pub const DOF_NAMES: [&str; 6] = ["x", "theta_x", "y", "theta_y", "z", "theta_z"];

/// Directions to treat as infinitely rigid, in stiffness-vector order.
pub type RigidMask = [bool; 6];

/// Foundation geometry: the two stiffness-formula inputs that vary during
/// a design optimization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoundationGeometry {
    /// Radius of the tower base (m).
    pub r0: f64,
    /// Embedment depth of the foundation in the soil (m).
    pub depth: f64,
}

impl FoundationGeometry {
    /// Create a foundation geometry.
    pub fn new(r0: f64, depth: f64) -> Self {
        Self { r0, depth }
    }

    /// Surface foundation (no embedment).
    pub fn surface(r0: f64) -> Self {
        Self::new(r0, 0.0)
    }
}

/// Diagonal spring stiffness of the foundation, ordered
/// (x, θx, y, θy, z, θz). Rigid directions hold `f64::INFINITY`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StiffnessVector {
    /// Stiffness entries (N/m).
    pub k: [f64; 6],
}

impl StiffnessVector {
    /// Create a stiffness vector.
    pub fn new(k: [f64; 6]) -> Self {
        Self { k }
    }

    /// Fully rigid foundation: every entry infinite.
    pub fn rigid() -> Self {
        Self::new([f64::INFINITY; 6])
    }

    /// Force the masked directions to infinite stiffness.
    pub fn apply_rigid(mut self, rigid: &RigidMask) -> Self {
        for (ki, &is_rigid) in self.k.iter_mut().zip(rigid.iter()) {
            if is_rigid {
                *ki = f64::INFINITY;
            }
        }
        self
    }
}

/// A soil stiffness model: evaluation plus analytic linearization.
///
/// The input type differs per variant (geometry for the textbook formulas,
/// a full stiffness vector for the passthrough), so it is an associated type.
pub trait SoilModel: ComponentInfo {
    /// Per-call input.
    type Input;

    /// Evaluate the 6-entry stiffness vector.
    fn evaluate(&self, input: &Self::Input) -> Result<StiffnessVector, EnvError>;

    /// Jacobian of the evaluation, consistent with `outputs` as returned by
    /// [`SoilModel::evaluate`] for the same `input`.
    fn linearize(
        &self,
        input: &Self::Input,
        outputs: &StiffnessVector,
    ) -> Result<Jacobian, EnvError>;
}
