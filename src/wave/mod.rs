//! Wave kinematics.
//!
//! Maps a design wave (height, period) onto orbital speed and acceleration at
//! a vector of query heights, plus the same quantities at the mean water line:
//!
//! - [`LinearWaves`]: linear (Airy) wave theory with a superimposed mean
//!   current, valid for small wave-height-to-depth ratios.
//! - [`NoWaves`]: the required fallback when no wave model is configured;
//!   all outputs are zero.
//!
//! Heights outside `[z_floor, z_surface]` are clamped to zero speed and
//! acceleration; the surface values `U0`/`A0` are always reported regardless
//! of where the query heights fall.

mod dispersion;
mod linear;

pub use dispersion::solve_dispersion;
pub use linear::LinearWaves;

use crate::component::{ComponentInfo, VariableMeta};
use crate::error::EnvError;
use crate::jacobian::Jacobian;

/// Standard gravitational acceleration (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Per-call wave kinematics input.
#[derive(Clone, Debug)]
pub struct WaveInput {
    /// Heights where wave kinematics should be computed (m).
    pub z: Vec<f64>,
    /// Vertical location of the water surface (m).
    pub z_surface: f64,
    /// Vertical location of the sea floor (m).
    pub z_floor: f64,
    /// Mean current speed (m/s).
    pub uc: f64,
}

impl WaveInput {
    /// Create a wave input with no mean current.
    pub fn new(z: Vec<f64>, z_surface: f64, z_floor: f64) -> Self {
        Self {
            z,
            z_surface,
            z_floor,
            uc: 0.0,
        }
    }

    /// Set the mean current speed.
    pub fn with_current(mut self, uc: f64) -> Self {
        self.uc = uc;
        self
    }
}

/// Wave kinematics evaluation result.
///
/// Also carries the wavenumber solved from the dispersion relation during
/// evaluation; [`WaveModel::linearize`] reuses it instead of re-solving, so a
/// Jacobian is always consistent with the evaluation it was requested for.
#[derive(Clone, Debug)]
pub struct WaveOutputs {
    /// Maximum orbital speed at each query height (m/s).
    pub u: Vec<f64>,
    /// Maximum orbital acceleration at each query height (m/s²).
    pub a: Vec<f64>,
    /// Wave direction at each query height (deg). Uniform.
    pub beta: Vec<f64>,
    /// Orbital speed at the mean water line (m/s).
    pub u0: f64,
    /// Orbital acceleration at the mean water line (m/s²).
    pub a0: f64,
    /// Wave direction at the mean water line (deg).
    pub beta0: f64,
    /// Wavenumber from the dispersion relation (1/m); zero for [`NoWaves`].
    pub wave_number: f64,
}

/// A wave kinematics model: closed-form evaluation plus analytic
/// linearization over the (U, A, U0, A0) x (z, Uc) derivative surface.
pub trait WaveModel: ComponentInfo {
    /// Evaluate wave kinematics at each query height and at the mean line.
    fn evaluate(&self, input: &WaveInput) -> Result<WaveOutputs, EnvError>;

    /// Jacobian of the evaluation, consistent with `outputs` as returned by
    /// [`WaveModel::evaluate`] for the same `input`.
    fn linearize(&self, input: &WaveInput, outputs: &WaveOutputs) -> Result<Jacobian, EnvError>;
}

const INPUT_META: &[VariableMeta] = &[
    VariableMeta::new("z", "m", "heights where wave kinematics should be computed"),
    VariableMeta::new("z_surface", "m", "vertical location of water surface"),
    VariableMeta::new("z_floor", "m", "vertical location of sea floor"),
    VariableMeta::new("Uc", "m/s", "mean current speed"),
];

const OUTPUT_META: &[VariableMeta] = &[
    VariableMeta::new("U", "m/s", "magnitude of wave speed at each z location"),
    VariableMeta::new("A", "m/s**2", "magnitude of wave acceleration at each z location"),
    VariableMeta::new("beta", "deg", "wave angle at each z location"),
    VariableMeta::new("U0", "m/s", "magnitude of wave speed at mean sea level"),
    VariableMeta::new("A0", "m/s**2", "magnitude of wave acceleration at mean sea level"),
    VariableMeta::new("beta0", "deg", "wave angle at mean sea level"),
];

pub(crate) const DERIV_INPUTS: &[&str] = &["z", "Uc"];
pub(crate) const DERIV_OUTPUTS: &[&str] = &["U", "A", "U0", "A0"];

/// Default wave model: no waves.
///
/// Returns zero speed, acceleration and direction everywhere, and the fully
/// zero-filled Jacobian over the declared derivative surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoWaves;

impl ComponentInfo for NoWaves {
    fn name(&self) -> &'static str {
        "no_waves"
    }

    fn inputs(&self) -> &'static [VariableMeta] {
        INPUT_META
    }

    fn outputs(&self) -> &'static [VariableMeta] {
        OUTPUT_META
    }

    fn deriv_inputs(&self) -> &'static [&'static str] {
        DERIV_INPUTS
    }

    fn deriv_outputs(&self) -> &'static [&'static str] {
        DERIV_OUTPUTS
    }
}

impl WaveModel for NoWaves {
    fn evaluate(&self, input: &WaveInput) -> Result<WaveOutputs, EnvError> {
        let n = input.z.len();
        Ok(WaveOutputs {
            u: vec![0.0; n],
            a: vec![0.0; n],
            beta: vec![0.0; n],
            u0: 0.0,
            a0: 0.0,
            beta0: 0.0,
            wave_number: 0.0,
        })
    }

    fn linearize(&self, input: &WaveInput, _outputs: &WaveOutputs) -> Result<Jacobian, EnvError> {
        let n = input.z.len();
        Ok(Jacobian::zeroed(
            &[("U", n), ("A", n), ("U0", 1), ("A0", 1)],
            &[("z", n), ("Uc", 1)],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_waves_all_zero() {
        let model = NoWaves;
        let input = WaveInput::new(vec![-30.0, -10.0, 0.0], 0.0, -50.0).with_current(1.5);
        let out = model.evaluate(&input).unwrap();

        assert!(out.u.iter().all(|&v| v == 0.0));
        assert!(out.a.iter().all(|&v| v == 0.0));
        assert!(out.beta.iter().all(|&v| v == 0.0));
        assert_eq!(out.u0, 0.0);
        assert_eq!(out.a0, 0.0);
        assert_eq!(out.beta0, 0.0);
        assert_eq!(out.wave_number, 0.0);
    }

    #[test]
    fn test_no_waves_jacobian_complete_and_zero() {
        let model = NoWaves;
        let input = WaveInput::new(vec![-30.0, -10.0], 0.0, -50.0);
        let out = model.evaluate(&input).unwrap();
        let jac = model.linearize(&input, &out).unwrap();

        for out_name in model.deriv_outputs() {
            for in_name in model.deriv_inputs() {
                let block = jac
                    .get(out_name, in_name)
                    .expect("every declared pair must have a block");
                let dense = block.to_dense();
                for i in 0..dense.nrows() {
                    for j in 0..dense.ncols() {
                        assert_eq!(dense[(i, j)], 0.0);
                    }
                }
            }
        }
        // (U 2, A 2, U0 1, A0 1) rows by (z 2, Uc 1) columns
        assert_eq!(jac.n_rows(), 6);
        assert_eq!(jac.n_cols(), 3);
    }
}
