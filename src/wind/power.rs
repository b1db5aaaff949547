//! Power-law wind shear profile.
//!
//! U(z) = Uref * ((z - z0)/(zref - z0))^α   for z > z0, else 0
//!
//! The shear exponent α is an empirical site parameter; 0.2 is a common
//! onshore value, offshore sites typically use 0.10-0.14.

use super::{ProfileInput, Validation, WindModel, WindOutputs};
use crate::component::{ComponentInfo, VariableMeta};
use crate::error::{DomainError, EnvError};
use crate::jacobian::{Jacobian, Sensitivity};

const INPUT_META: &[VariableMeta] = &[
    VariableMeta::new("Uref", "m/s", "reference wind speed (usually at hub height)"),
    VariableMeta::new("zref", "m", "corresponding reference height"),
    VariableMeta::new("z", "m", "heights where wind speed should be computed"),
    VariableMeta::new("z0", "m", "bottom of wind profile (height of ground/sea)"),
    VariableMeta::new("shearExp", "-", "shear exponent"),
    VariableMeta::new("betaWind", "deg", "wind angle relative to inertial coordinate system"),
];

const OUTPUT_META: &[VariableMeta] = &[
    VariableMeta::new("U", "m/s", "magnitude of wind speed at each z location"),
    VariableMeta::new("beta", "deg", "wind angle at each z location"),
];

const DERIV_INPUTS: &[&str] = &["Uref", "z", "zref"];
const DERIV_INPUTS_FREE_Z0: &[&str] = &["Uref", "z", "zref", "z0"];

/// Power-law profile wind.
///
/// Query heights must not cross `z0` between an evaluation and its
/// linearization; a node sitting exactly at `z0` takes the below-boundary
/// branch (zero speed, zero gradient).
#[derive(Clone, Copy, Debug)]
pub struct PowerWind {
    /// Bottom of the wind profile (m), height of the ground or sea surface.
    pub z0: f64,
    /// Shear exponent.
    pub shear_exp: f64,
    /// Wind angle relative to the inertial coordinate system (deg).
    pub beta_wind: f64,
    /// Input validation mode.
    pub validation: Validation,
    /// Treat `z0` as a free variable and include its sensitivity block.
    pub z0_free: bool,
}

impl PowerWind {
    /// Create a power-law profile with the given shear exponent, bottom at
    /// z = 0, wind along the inertial x axis, strict validation.
    pub fn new(shear_exp: f64) -> Self {
        Self {
            z0: 0.0,
            shear_exp,
            beta_wind: 0.0,
            validation: Validation::Strict,
            z0_free: false,
        }
    }

    /// Common onshore shear exponent of 0.2.
    pub fn standard() -> Self {
        Self::new(0.2)
    }

    /// Set the profile bottom height.
    pub fn with_bottom(mut self, z0: f64) -> Self {
        self.z0 = z0;
        self
    }

    /// Set the wind direction (deg).
    pub fn with_direction(mut self, beta_wind: f64) -> Self {
        self.beta_wind = beta_wind;
        self
    }

    /// Set the validation mode.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Declare `z0` a free variable: the Jacobian then carries a (U, z0)
    /// block computed by the full quotient-rule expansion.
    pub fn with_free_z0(mut self) -> Self {
        self.z0_free = true;
        self
    }

    fn validate(&self, input: &ProfileInput) -> Result<(), DomainError> {
        if self.validation == Validation::Strict && input.z_ref <= self.z0 {
            return Err(DomainError::DegenerateReference {
                z_ref: input.z_ref,
                z0: self.z0,
            });
        }
        Ok(())
    }
}

impl Default for PowerWind {
    fn default() -> Self {
        Self::standard()
    }
}

impl ComponentInfo for PowerWind {
    fn name(&self) -> &'static str {
        "power_wind"
    }

    fn inputs(&self) -> &'static [VariableMeta] {
        INPUT_META
    }

    fn outputs(&self) -> &'static [VariableMeta] {
        OUTPUT_META
    }

    fn deriv_inputs(&self) -> &'static [&'static str] {
        if self.z0_free {
            DERIV_INPUTS_FREE_Z0
        } else {
            DERIV_INPUTS
        }
    }

    fn deriv_outputs(&self) -> &'static [&'static str] {
        &["U"]
    }
}

impl WindModel for PowerWind {
    fn evaluate(&self, input: &ProfileInput) -> Result<WindOutputs, EnvError> {
        self.validate(input)?;

        let denom = input.z_ref - self.z0;
        let u = input
            .z
            .iter()
            .map(|&zi| {
                if zi > self.z0 {
                    input.u_ref * ((zi - self.z0) / denom).powf(self.shear_exp)
                } else {
                    0.0
                }
            })
            .collect();
        let beta = vec![self.beta_wind; input.z.len()];

        Ok(WindOutputs { u, beta })
    }

    fn linearize(&self, input: &ProfileInput, outputs: &WindOutputs) -> Result<Jacobian, EnvError> {
        self.validate(input)?;

        let n = input.z.len();
        let denom = input.z_ref - self.z0;

        let mut du_duref = vec![0.0; n];
        let mut du_dz = vec![0.0; n];
        let mut du_dzref = vec![0.0; n];
        let mut du_dz0 = vec![0.0; n];

        for (i, &zi) in input.z.iter().enumerate() {
            if zi <= self.z0 {
                continue;
            }
            let ui = outputs.u[i];
            // d/dUref as the height ratio itself, valid even for Uref = 0
            du_duref[i] = ((zi - self.z0) / denom).powf(self.shear_exp);
            du_dz[i] = ui * self.shear_exp / (zi - self.z0);
            du_dzref[i] = -ui * self.shear_exp / denom;
            if self.z0_free {
                du_dz0[i] = ui * self.shear_exp * (1.0 / denom - 1.0 / (zi - self.z0));
            }
        }

        let mut inputs: Vec<(&'static str, usize)> = vec![("Uref", 1), ("z", n), ("zref", 1)];
        if self.z0_free {
            inputs.push(("z0", 1));
        }
        let mut jac = Jacobian::zeroed(&[("U", n)], &inputs);
        jac.set("U", "Uref", Sensitivity::column(&du_duref));
        jac.set("U", "z", Sensitivity::Diagonal(du_dz));
        jac.set("U", "zref", Sensitivity::column(&du_dzref));
        if self.z0_free {
            jac.set("U", "z0", Sensitivity::column(&du_dz0));
        }
        Ok(jac)
    }
}
