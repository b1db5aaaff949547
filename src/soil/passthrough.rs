//! Passthrough soil stiffness.
//!
//! Forwards a caller-supplied 6-entry stiffness vector, applying only the
//! rigid-direction override. Used when soil-structure interaction springs
//! come from an external estimate instead of the textbook formulas.

use super::{RigidMask, SoilModel, StiffnessVector};
use crate::component::{ComponentInfo, VariableMeta};
use crate::error::EnvError;
use crate::jacobian::{Jacobian, Sensitivity};

const INPUT_META: &[VariableMeta] = &[
    VariableMeta::new(
        "kin",
        "N/m",
        "spring stiffness, order (x, theta_x, y, theta_y, z, theta_z)",
    ),
    VariableMeta::new("rigid", "-", "directions that should be considered infinitely rigid"),
];

const OUTPUT_META: &[VariableMeta] = &[VariableMeta::new(
    "k",
    "N/m",
    "spring stiffness, order (x, theta_x, y, theta_y, z, theta_z); rigid directions are +inf",
)];

/// Passthrough of externally estimated soil springs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoilPassthrough {
    /// Directions to treat as infinitely rigid.
    pub rigid: RigidMask,
}

impl SoilPassthrough {
    /// Create a passthrough with the given rigid-direction mask.
    pub fn new(rigid: RigidMask) -> Self {
        Self { rigid }
    }
}

impl ComponentInfo for SoilPassthrough {
    fn name(&self) -> &'static str {
        "soil_passthrough"
    }

    fn inputs(&self) -> &'static [VariableMeta] {
        INPUT_META
    }

    fn outputs(&self) -> &'static [VariableMeta] {
        OUTPUT_META
    }

    fn deriv_inputs(&self) -> &'static [&'static str] {
        &["kin"]
    }

    fn deriv_outputs(&self) -> &'static [&'static str] {
        &["k"]
    }
}

impl SoilModel for SoilPassthrough {
    type Input = [f64; 6];

    fn evaluate(&self, input: &[f64; 6]) -> Result<StiffnessVector, EnvError> {
        Ok(StiffnessVector::new(*input).apply_rigid(&self.rigid))
    }

    fn linearize(
        &self,
        _input: &[f64; 6],
        _outputs: &StiffnessVector,
    ) -> Result<Jacobian, EnvError> {
        let diag = self
            .rigid
            .iter()
            .map(|&is_rigid| if is_rigid { 0.0 } else { 1.0 })
            .collect();
        let mut jac = Jacobian::zeroed(&[("k", 6)], &[("kin", 6)]);
        jac.set("k", "kin", Sensitivity::Diagonal(diag));
        Ok(jac)
    }
}
