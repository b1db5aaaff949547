//! Linear (Airy) wave theory.
//!
//! For a design wave of height h and period T in water of depth d, the
//! maximum orbital speed at elevation z_rel below the surface is
//!
//! U(z_rel) = h/2 ω cosh(k (z_rel + d)) / sinh(k d) + Uc
//!
//! with ω = 2π/T and the wavenumber k from the dispersion relation. The
//! maximum acceleration is ω U. Both decay from the surface toward the
//! floor; heights outside the water column are clamped to zero.

use super::{
    solve_dispersion, WaveInput, WaveModel, WaveOutputs, DERIV_INPUTS, DERIV_OUTPUTS,
    STANDARD_GRAVITY,
};
use crate::component::{ComponentInfo, VariableMeta};
use crate::error::{DomainError, EnvError};
use crate::jacobian::{Jacobian, Sensitivity};
use std::f64::consts::PI;

const INPUT_META: &[VariableMeta] = &[
    VariableMeta::new("z", "m", "heights where wave kinematics should be computed"),
    VariableMeta::new("z_surface", "m", "vertical location of water surface"),
    VariableMeta::new("z_floor", "m", "vertical location of sea floor"),
    VariableMeta::new("Uc", "m/s", "mean current speed"),
    VariableMeta::new("hmax", "m", "maximum wave height (crest-to-trough)"),
    VariableMeta::new("T", "s", "period of maximum wave height"),
    VariableMeta::new("g", "m/s**2", "acceleration of gravity"),
    VariableMeta::new("betaWave", "deg", "wave angle relative to inertial coordinate system"),
];

/// Linear (Airy) wave kinematics.
#[derive(Clone, Copy, Debug)]
pub struct LinearWaves {
    /// Maximum wave height, crest-to-trough (m).
    pub hmax: f64,
    /// Period of the maximum wave (s).
    pub t: f64,
    /// Gravitational acceleration (m/s²).
    pub g: f64,
    /// Wave angle relative to the inertial coordinate system (deg).
    pub beta_wave: f64,
}

impl LinearWaves {
    /// Create a linear wave model.
    pub fn new(hmax: f64, t: f64, g: f64) -> Self {
        Self {
            hmax,
            t,
            g,
            beta_wave: 0.0,
        }
    }

    /// Create with standard gravity.
    pub fn standard(hmax: f64, t: f64) -> Self {
        Self::new(hmax, t, STANDARD_GRAVITY)
    }

    /// Set the wave direction (deg).
    pub fn with_direction(mut self, beta_wave: f64) -> Self {
        self.beta_wave = beta_wave;
        self
    }

    /// Circular frequency ω = 2π/T.
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI / self.t
    }

    fn validate(&self, input: &WaveInput) -> Result<f64, DomainError> {
        let depth = input.z_surface - input.z_floor;
        if depth <= 0.0 {
            return Err(DomainError::NonPositiveDepth {
                z_surface: input.z_surface,
                z_floor: input.z_floor,
            });
        }
        if self.t <= 0.0 {
            return Err(DomainError::NonPositivePeriod { period: self.t });
        }
        if self.g <= 0.0 {
            return Err(DomainError::NonPositiveGravity { g: self.g });
        }
        Ok(depth)
    }
}

impl ComponentInfo for LinearWaves {
    fn name(&self) -> &'static str {
        "linear_waves"
    }

    fn inputs(&self) -> &'static [VariableMeta] {
        INPUT_META
    }

    fn outputs(&self) -> &'static [VariableMeta] {
        super::OUTPUT_META
    }

    fn deriv_inputs(&self) -> &'static [&'static str] {
        DERIV_INPUTS
    }

    fn deriv_outputs(&self) -> &'static [&'static str] {
        DERIV_OUTPUTS
    }
}

impl WaveModel for LinearWaves {
    fn evaluate(&self, input: &WaveInput) -> Result<WaveOutputs, EnvError> {
        let depth = self.validate(input)?;

        let omega = self.angular_frequency();
        let k = solve_dispersion(omega, depth, self.g)?;
        let sinh_kd = (k * depth).sinh();
        let amplitude = 0.5 * self.hmax * omega;

        let n = input.z.len();
        let mut u = vec![0.0; n];
        let mut a = vec![0.0; n];
        for (i, &zi) in input.z.iter().enumerate() {
            if zi < input.z_floor || zi > input.z_surface {
                continue;
            }
            let z_rel = zi - input.z_surface;
            let speed = amplitude * (k * (z_rel + depth)).cosh() / sinh_kd + input.uc;
            u[i] = speed;
            a[i] = speed * omega;
        }

        // mean water line, z_rel = 0, independent of the query heights
        let u0 = amplitude * (k * depth).cosh() / sinh_kd + input.uc;
        let a0 = u0 * omega;

        Ok(WaveOutputs {
            u,
            a,
            beta: vec![self.beta_wave; n],
            u0,
            a0,
            beta0: self.beta_wave,
            wave_number: k,
        })
    }

    fn linearize(&self, input: &WaveInput, outputs: &WaveOutputs) -> Result<Jacobian, EnvError> {
        let depth = self.validate(input)?;

        let omega = self.angular_frequency();
        // reuse the wavenumber solved during evaluation
        let k = outputs.wave_number;
        let sinh_kd = (k * depth).sinh();
        let amplitude = 0.5 * self.hmax * omega;

        let n = input.z.len();
        let mut du_dz = vec![0.0; n];
        let mut du_duc = vec![0.0; n];
        for (i, &zi) in input.z.iter().enumerate() {
            if zi < input.z_floor || zi > input.z_surface {
                continue;
            }
            let z_rel = zi - input.z_surface;
            du_dz[i] = amplitude * (k * (z_rel + depth)).sinh() / sinh_kd * k;
            du_duc[i] = 1.0;
        }
        let da_dz: Vec<f64> = du_dz.iter().map(|&v| omega * v).collect();
        let da_duc: Vec<f64> = du_duc.iter().map(|&v| omega * v).collect();

        let mut jac = Jacobian::zeroed(
            &[("U", n), ("A", n), ("U0", 1), ("A0", 1)],
            &[("z", n), ("Uc", 1)],
        );
        jac.set("U", "z", Sensitivity::Diagonal(du_dz));
        jac.set("U", "Uc", Sensitivity::column(&du_duc));
        jac.set("A", "z", Sensitivity::Diagonal(da_dz));
        jac.set("A", "Uc", Sensitivity::column(&da_duc));
        // U0/A0 do not depend on the query heights; those blocks stay zero
        jac.set("U0", "Uc", Sensitivity::Scalar(1.0));
        jac.set("A0", "Uc", Sensitivity::Scalar(omega));
        Ok(jac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    fn north_sea() -> (LinearWaves, WaveInput) {
        let model = LinearWaves::standard(2.0, 10.0);
        let input = WaveInput::new(vec![-40.0, -20.0, -5.0, 0.0], 0.0, -50.0);
        (model, input)
    }

    #[test]
    fn test_speed_decays_with_depth() {
        let (model, input) = north_sea();
        let out = model.evaluate(&input).unwrap();
        for w in out.u.windows(2) {
            assert!(w[1] > w[0], "orbital speed must decay downward: {:?}", out.u);
        }
    }

    #[test]
    fn test_surface_query_matches_u0() {
        let (model, input) = north_sea();
        let out = model.evaluate(&input).unwrap();
        // last query height sits exactly at the surface
        assert_relative_eq!(out.u[3], out.u0, epsilon = TOL);
        assert_relative_eq!(out.a[3], out.a0, epsilon = TOL);
    }

    #[test]
    fn test_acceleration_is_omega_times_speed() {
        let (model, input) = north_sea();
        let out = model.evaluate(&input).unwrap();
        let omega = model.angular_frequency();
        for i in 0..input.z.len() {
            assert_relative_eq!(out.a[i], out.u[i] * omega, epsilon = TOL);
        }
    }

    #[test]
    fn test_clamp_outside_water_column() {
        let model = LinearWaves::standard(2.0, 10.0);
        let input = WaveInput::new(vec![-60.0, -25.0, 5.0], 0.0, -50.0).with_current(0.8);
        let out = model.evaluate(&input).unwrap();

        assert_eq!(out.u[0], 0.0); // below the floor
        assert_eq!(out.a[0], 0.0);
        assert!(out.u[1] > 0.0);
        assert_eq!(out.u[2], 0.0); // above the surface
        assert_eq!(out.a[2], 0.0);
        // surface values are reported regardless
        assert!(out.u0 > 0.0);
    }

    #[test]
    fn test_current_superposition() {
        let model = LinearWaves::standard(2.0, 10.0);
        let still = WaveInput::new(vec![-10.0], 0.0, -50.0);
        let flowing = WaveInput::new(vec![-10.0], 0.0, -50.0).with_current(1.5);

        let out_still = model.evaluate(&still).unwrap();
        let out_flow = model.evaluate(&flowing).unwrap();
        assert_relative_eq!(out_flow.u[0] - out_still.u[0], 1.5, epsilon = 1e-10);
        assert_relative_eq!(out_flow.u0 - out_still.u0, 1.5, epsilon = 1e-10);
    }

    #[test]
    fn test_wavenumber_satisfies_dispersion() {
        let (model, input) = north_sea();
        let out = model.evaluate(&input).unwrap();
        let omega = model.angular_frequency();
        let k = out.wave_number;
        assert!((omega * omega - model.g * k * (50.0 * k).tanh()).abs() < 1e-8);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let model = LinearWaves::standard(2.0, 10.0);
        let input = WaveInput::new(vec![0.0], -50.0, 0.0);
        let err = model.evaluate(&input).unwrap_err();
        assert!(matches!(
            err,
            EnvError::Domain(DomainError::NonPositiveDepth { .. })
        ));
    }

    #[test]
    fn test_nonpositive_period_rejected() {
        let model = LinearWaves::standard(2.0, 0.0);
        let input = WaveInput::new(vec![0.0], 0.0, -50.0);
        assert!(matches!(
            model.evaluate(&input).unwrap_err(),
            EnvError::Domain(DomainError::NonPositivePeriod { .. })
        ));
    }

    #[test]
    fn test_linearize_surface_blocks() {
        let (model, input) = north_sea();
        let out = model.evaluate(&input).unwrap();
        let jac = model.linearize(&input, &out).unwrap();

        // U0 does not depend on the query-height vector: explicit zero row
        let du0_dz = jac.dense("U0", "z").unwrap();
        assert_eq!((du0_dz.nrows(), du0_dz.ncols()), (1, input.z.len()));
        for j in 0..input.z.len() {
            assert_eq!(du0_dz[(0, j)], 0.0);
        }

        assert!(matches!(
            jac.get("U0", "Uc"),
            Some(Sensitivity::Scalar(v)) if *v == 1.0
        ));
        let omega = model.angular_frequency();
        assert!(matches!(
            jac.get("A0", "Uc"),
            Some(Sensitivity::Scalar(v)) if (*v - omega).abs() < TOL
        ));
    }

    #[test]
    fn test_linearize_clamped_heights_have_zero_rows() {
        let model = LinearWaves::standard(2.0, 10.0);
        let input = WaveInput::new(vec![-60.0, -10.0], 0.0, -50.0);
        let out = model.evaluate(&input).unwrap();
        let jac = model.linearize(&input, &out).unwrap();

        let du_dz = jac.dense("U", "z").unwrap();
        let du_duc = jac.dense("U", "Uc").unwrap();
        assert_eq!(du_dz[(0, 0)], 0.0);
        assert_eq!(du_duc[(0, 0)], 0.0);
        assert!(du_dz[(1, 1)] > 0.0);
        assert_eq!(du_duc[(1, 0)], 1.0);
    }
}
