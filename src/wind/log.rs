//! Logarithmic boundary-layer wind profile.
//!
//! U(z) = Uref * ln((z - z0)/z_r) / ln((zref - z0)/z_r)   for z - z0 > z_r
//!
//! where z_r is the surface roughness length. Speed is exactly zero at and
//! below one roughness length above the profile bottom.
//!
//! The roughness length is configured in millimeters (10 mm is typical of
//! open grassland; open sea is nearer 0.2 mm) and converted to meters
//! internally. This is the only unit conversion in the crate.

use super::{ProfileInput, Validation, WindModel, WindOutputs};
use crate::component::{ComponentInfo, VariableMeta};
use crate::error::{DomainError, EnvError};
use crate::jacobian::{Jacobian, Sensitivity};

const INPUT_META: &[VariableMeta] = &[
    VariableMeta::new("Uref", "m/s", "reference wind speed (usually at hub height)"),
    VariableMeta::new("zref", "m", "corresponding reference height"),
    VariableMeta::new("z", "m", "heights where wind speed should be computed"),
    VariableMeta::new("z0", "m", "bottom of wind profile (height of ground/sea)"),
    VariableMeta::new("z_roughness", "mm", "surface roughness length"),
    VariableMeta::new("betaWind", "deg", "wind angle relative to inertial coordinate system"),
];

const OUTPUT_META: &[VariableMeta] = &[
    VariableMeta::new("U", "m/s", "magnitude of wind speed at each z location"),
    VariableMeta::new("beta", "deg", "wind angle at each z location"),
];

/// Logarithmic-profile wind.
#[derive(Clone, Copy, Debug)]
pub struct LogWind {
    /// Bottom of the wind profile (m), height of the ground or sea surface.
    pub z0: f64,
    /// Surface roughness length (mm).
    pub z_roughness_mm: f64,
    /// Wind angle relative to the inertial coordinate system (deg).
    pub beta_wind: f64,
    /// Input validation mode.
    pub validation: Validation,
}

impl LogWind {
    /// Create a log profile with the given roughness length in millimeters,
    /// bottom at z = 0, wind along the inertial x axis, strict validation.
    pub fn new(z_roughness_mm: f64) -> Self {
        Self {
            z0: 0.0,
            z_roughness_mm,
            beta_wind: 0.0,
            validation: Validation::Strict,
        }
    }

    /// Typical open-terrain roughness length of 10 mm.
    pub fn standard() -> Self {
        Self::new(10.0)
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

    /// Roughness length in meters.
    fn z_roughness(&self) -> f64 {
        self.z_roughness_mm / 1e3
    }

    fn validate(&self, input: &ProfileInput) -> Result<(), DomainError> {
        if self.validation == Validation::Strict && input.z_ref - self.z0 <= self.z_roughness() {
            return Err(DomainError::ReferenceInRoughnessLayer {
                z_ref: input.z_ref,
                z0: self.z0,
                z_roughness: self.z_roughness(),
            });
        }
        Ok(())
    }
}

impl Default for LogWind {
    fn default() -> Self {
        Self::standard()
    }
}

impl ComponentInfo for LogWind {
    fn name(&self) -> &'static str {
        "log_wind"
    }

    fn inputs(&self) -> &'static [VariableMeta] {
        INPUT_META
    }

    fn outputs(&self) -> &'static [VariableMeta] {
        OUTPUT_META
    }

    fn deriv_inputs(&self) -> &'static [&'static str] {
        &["Uref", "z", "zref"]
    }

    fn deriv_outputs(&self) -> &'static [&'static str] {
        &["U"]
    }
}

impl WindModel for LogWind {
    fn evaluate(&self, input: &ProfileInput) -> Result<WindOutputs, EnvError> {
        self.validate(input)?;

        let zr = self.z_roughness();
        let ln_ref = ((input.z_ref - self.z0) / zr).ln();

        let u = input
            .z
            .iter()
            .map(|&zi| {
                if zi - self.z0 > zr {
                    input.u_ref * ((zi - self.z0) / zr).ln() / ln_ref
                } else {
                    0.0
                }
            })
            .collect();
        let beta = vec![self.beta_wind; input.z.len()];

        Ok(WindOutputs { u, beta })
    }

    fn linearize(&self, input: &ProfileInput, _outputs: &WindOutputs) -> Result<Jacobian, EnvError> {
        self.validate(input)?;

        let n = input.z.len();
        let zr = self.z_roughness();
        let ln_ref = ((input.z_ref - self.z0) / zr).ln();

        let mut du_duref = vec![0.0; n];
        let mut du_dz = vec![0.0; n];
        let mut du_dzref = vec![0.0; n];

        for (i, &zi) in input.z.iter().enumerate() {
            if zi - self.z0 <= zr {
                continue;
            }
            let ln_i = ((zi - self.z0) / zr).ln();
            du_duref[i] = ln_i / ln_ref;
            du_dz[i] = input.u_ref / (ln_ref * (zi - self.z0));
            du_dzref[i] = -input.u_ref * ln_i / (ln_ref * ln_ref * (input.z_ref - self.z0));
        }

        let mut jac = Jacobian::zeroed(&[("U", n)], &[("Uref", 1), ("z", n), ("zref", 1)]);
        jac.set("U", "Uref", Sensitivity::column(&du_duref));
        jac.set("U", "z", Sensitivity::Diagonal(du_dz));
        jac.set("U", "zref", Sensitivity::column(&du_dzref));
        Ok(jac)
    }
}
