//! Textbook elastic half-space foundation stiffness.
//!
//! Stiffness of a rigid circular footing of radius r0 embedded to depth h in
//! an elastic half-space with shear modulus G and Poisson ratio ν:
//!
//! - vertical:   k_z  = 4 G r0 η / (1 - ν),        η = 1 + 0.6 (1-ν) h/r0
//! - horizontal: k_x  = 32 (1-ν) G r0 η / (7-8ν),  η = 1 + 0.55 (2-ν) h/r0
//! - rocking:    k_θx = 8 G r0³ η / (3 (1-ν)),     η = 1 + 1.2 (1-ν) h/r0
//!                                                     + 0.2 (2-ν) (h/r0)³
//! - torsional:  k_θz = 16 G r0³ / 3
//!
//! The embedment factors η reduce to 1 for a surface foundation. The
//! torsional stiffness is independent of both embedment depth and ν.

use super::{FoundationGeometry, RigidMask, SoilModel, StiffnessVector};
use crate::component::{ComponentInfo, VariableMeta};
use crate::error::{DomainError, EnvError};
use crate::jacobian::{Jacobian, Sensitivity};

const INPUT_META: &[VariableMeta] = &[
    VariableMeta::new("r0", "m", "radius of base of tower"),
    VariableMeta::new("depth", "m", "depth of foundation in the soil"),
    VariableMeta::new("G", "Pa", "shear modulus of soil"),
    VariableMeta::new("nu", "-", "Poisson's ratio of soil"),
    VariableMeta::new("rigid", "-", "directions that should be considered infinitely rigid"),
];

const OUTPUT_META: &[VariableMeta] = &[VariableMeta::new(
    "k",
    "N/m",
    "spring stiffness, order (x, theta_x, y, theta_y, z, theta_z); rigid directions are +inf",
)];

/// Textbook soil stiffness model.
#[derive(Clone, Copy, Debug)]
pub struct TowerSoil {
    /// Shear modulus of the soil (Pa).
    pub g_soil: f64,
    /// Poisson ratio of the soil.
    pub nu: f64,
    /// Directions to treat as infinitely rigid.
    pub rigid: RigidMask,
}

impl TowerSoil {
    /// Create a soil model with the given shear modulus and Poisson ratio,
    /// no rigid directions.
    pub fn new(g_soil: f64, nu: f64) -> Self {
        Self {
            g_soil,
            nu,
            rigid: [false; 6],
        }
    }

    /// Medium-dense sand: G = 140 MPa, ν = 0.4.
    pub fn standard() -> Self {
        Self::new(140e6, 0.4)
    }

    /// Set the rigid-direction mask.
    pub fn with_rigid(mut self, rigid: RigidMask) -> Self {
        self.rigid = rigid;
        self
    }

    fn validate(&self, geometry: &FoundationGeometry) -> Result<(), DomainError> {
        if geometry.r0 <= 0.0 {
            return Err(DomainError::NonPositiveRadius { r0: geometry.r0 });
        }
        if geometry.depth < 0.0 {
            return Err(DomainError::NegativeEmbedment {
                depth: geometry.depth,
            });
        }
        if self.nu <= -1.0 || self.nu >= 0.5 {
            return Err(DomainError::PoissonOutOfRange { nu: self.nu });
        }
        Ok(())
    }
}

impl Default for TowerSoil {
    fn default() -> Self {
        Self::standard()
    }
}

impl ComponentInfo for TowerSoil {
    fn name(&self) -> &'static str {
        "tower_soil"
    }

    fn inputs(&self) -> &'static [VariableMeta] {
        INPUT_META
    }

    fn outputs(&self) -> &'static [VariableMeta] {
        OUTPUT_META
    }

    fn deriv_inputs(&self) -> &'static [&'static str] {
        &["r0", "depth"]
    }

    fn deriv_outputs(&self) -> &'static [&'static str] {
        &["k"]
    }
}

impl SoilModel for TowerSoil {
    type Input = FoundationGeometry;

    fn evaluate(&self, input: &FoundationGeometry) -> Result<StiffnessVector, EnvError> {
        self.validate(input)?;

        let g = self.g_soil;
        let nu = self.nu;
        let h = input.depth;
        let r0 = input.r0;

        // vertical
        let eta = 1.0 + 0.6 * (1.0 - nu) * h / r0;
        let k_z = 4.0 * g * r0 * eta / (1.0 - nu);

        // horizontal
        let eta = 1.0 + 0.55 * (2.0 - nu) * h / r0;
        let k_x = 32.0 * (1.0 - nu) * g * r0 * eta / (7.0 - 8.0 * nu);

        // rocking
        let eta = 1.0 + 1.2 * (1.0 - nu) * h / r0 + 0.2 * (2.0 - nu) * (h / r0).powi(3);
        let k_thetax = 8.0 * g * r0.powi(3) * eta / (3.0 * (1.0 - nu));

        // torsional
        let k_phi = 16.0 * g * r0.powi(3) / 3.0;

        Ok(StiffnessVector::new([k_x, k_thetax, k_x, k_thetax, k_z, k_phi]).apply_rigid(&self.rigid))
    }

    fn linearize(
        &self,
        input: &FoundationGeometry,
        _outputs: &StiffnessVector,
    ) -> Result<Jacobian, EnvError> {
        self.validate(input)?;

        let g = self.g_soil;
        let nu = self.nu;
        let h = input.depth;
        let r0 = input.r0;

        // vertical
        let eta = 1.0 + 0.6 * (1.0 - nu) * h / r0;
        let deta_dr0 = -0.6 * (1.0 - nu) * h / (r0 * r0);
        let dkz_dr0 = 4.0 * g / (1.0 - nu) * (eta + r0 * deta_dr0);
        let deta_dh = 0.6 * (1.0 - nu) / r0;
        let dkz_dh = 4.0 * g * r0 / (1.0 - nu) * deta_dh;

        // horizontal
        let eta = 1.0 + 0.55 * (2.0 - nu) * h / r0;
        let deta_dr0 = -0.55 * (2.0 - nu) * h / (r0 * r0);
        let dkx_dr0 = 32.0 * (1.0 - nu) * g / (7.0 - 8.0 * nu) * (eta + r0 * deta_dr0);
        let deta_dh = 0.55 * (2.0 - nu) / r0;
        let dkx_dh = 32.0 * (1.0 - nu) * g * r0 / (7.0 - 8.0 * nu) * deta_dh;

        // rocking
        let eta = 1.0 + 1.2 * (1.0 - nu) * h / r0 + 0.2 * (2.0 - nu) * (h / r0).powi(3);
        let deta_dr0 =
            -1.2 * (1.0 - nu) * h / (r0 * r0) - 3.0 * 0.2 * (2.0 - nu) * (h / r0).powi(3) / r0;
        let dkthetax_dr0 =
            8.0 * g / (3.0 * (1.0 - nu)) * (3.0 * r0 * r0 * eta + r0.powi(3) * deta_dr0);
        let deta_dh = 1.2 * (1.0 - nu) / r0 + 3.0 * 0.2 * (2.0 - nu) * h * h / r0.powi(3);
        let dkthetax_dh = 8.0 * g * r0.powi(3) / (3.0 * (1.0 - nu)) * deta_dh;

        // torsional
        let dkphi_dr0 = 16.0 * g * r0 * r0;
        let dkphi_dh = 0.0;

        let mut dk_dr0 = [
            dkx_dr0,
            dkthetax_dr0,
            dkx_dr0,
            dkthetax_dr0,
            dkz_dr0,
            dkphi_dr0,
        ];
        let mut dk_dh = [dkx_dh, dkthetax_dh, dkx_dh, dkthetax_dh, dkz_dh, dkphi_dh];
        for i in 0..6 {
            // a rigid connection has no compliance sensitivity
            if self.rigid[i] {
                dk_dr0[i] = 0.0;
                dk_dh[i] = 0.0;
            }
        }

        let mut jac = Jacobian::zeroed(&[("k", 6)], &[("r0", 1), ("depth", 1)]);
        jac.set("k", "r0", Sensitivity::column(&dk_dr0));
        jac.set("k", "depth", Sensitivity::column(&dk_dh));
        Ok(jac)
    }
}
