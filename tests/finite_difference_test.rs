//! Finite-difference validation of every analytic Jacobian.
//!
//! Hand-derived sensitivities are easy to get subtly wrong, so each
//! `linearize` implementation is checked against a central finite-difference
//! approximation of its `evaluate` at an interior sample point, for every
//! derivative input. Agreement is required to 1e-4 relative error.

use approx::assert_relative_eq;
use envload_rs::{
    FoundationGeometry, LinearWaves, LogWind, PowerWind, ProfileInput, SoilModel, SoilPassthrough,
    TowerSoil, WaveInput, WaveModel, WindModel,
};

const FD_REL_TOL: f64 = 1e-4;
const FD_ABS_TOL: f64 = 1e-8;

/// Central difference of a scalar-to-scalar function.
fn central_diff<F: Fn(f64) -> f64>(f: F, x: f64, step: f64) -> f64 {
    (f(x + step) - f(x - step)) / (2.0 * step)
}

fn step_for(x: f64) -> f64 {
    1e-6 * x.abs().max(1.0)
}

// ---------------------------------------------------------------------------
// Wind profiles
// ---------------------------------------------------------------------------

#[test]
fn power_wind_jacobian_matches_fd() {
    let wind = PowerWind::standard().with_bottom(2.0).with_free_z0();
    let input = ProfileInput::new(11.0, 90.0, vec![15.0, 40.0, 70.0]);
    let out = wind.evaluate(&input).unwrap();
    let jac = wind.linearize(&input, &out).unwrap();

    let n = input.z.len();
    let du_duref = jac.dense("U", "Uref").unwrap();
    let du_dz = jac.dense("U", "z").unwrap();
    let du_dzref = jac.dense("U", "zref").unwrap();
    let du_dz0 = jac.dense("U", "z0").unwrap();

    for i in 0..n {
        let fd = central_diff(
            |u_ref| {
                let input = ProfileInput::new(u_ref, input.z_ref, input.z.clone());
                wind.evaluate(&input).unwrap().u[i]
            },
            input.u_ref,
            step_for(input.u_ref),
        );
        assert_relative_eq!(du_duref[(i, 0)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        let fd = central_diff(
            |zi| {
                let mut z = input.z.clone();
                z[i] = zi;
                wind.evaluate(&ProfileInput::new(input.u_ref, input.z_ref, z))
                    .unwrap()
                    .u[i]
            },
            input.z[i],
            step_for(input.z[i]),
        );
        assert_relative_eq!(du_dz[(i, i)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        let fd = central_diff(
            |z_ref| {
                wind.evaluate(&ProfileInput::new(input.u_ref, z_ref, input.z.clone()))
                    .unwrap()
                    .u[i]
            },
            input.z_ref,
            step_for(input.z_ref),
        );
        assert_relative_eq!(du_dzref[(i, 0)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        // z0 is model configuration: perturb the model, not the input
        let fd = central_diff(
            |z0| {
                let wind = PowerWind::standard().with_bottom(z0).with_free_z0();
                wind.evaluate(&input).unwrap().u[i]
            },
            2.0,
            step_for(2.0),
        );
        assert_relative_eq!(du_dz0[(i, 0)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);
    }
}

#[test]
fn log_wind_jacobian_matches_fd() {
    let wind = LogWind::new(10.0).with_bottom(1.0);
    let input = ProfileInput::new(9.0, 80.0, vec![5.0, 30.0, 65.0]);
    let out = wind.evaluate(&input).unwrap();
    let jac = wind.linearize(&input, &out).unwrap();

    let du_duref = jac.dense("U", "Uref").unwrap();
    let du_dz = jac.dense("U", "z").unwrap();
    let du_dzref = jac.dense("U", "zref").unwrap();

    for i in 0..input.z.len() {
        let fd = central_diff(
            |u_ref| {
                wind.evaluate(&ProfileInput::new(u_ref, input.z_ref, input.z.clone()))
                    .unwrap()
                    .u[i]
            },
            input.u_ref,
            step_for(input.u_ref),
        );
        assert_relative_eq!(du_duref[(i, 0)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        let fd = central_diff(
            |zi| {
                let mut z = input.z.clone();
                z[i] = zi;
                wind.evaluate(&ProfileInput::new(input.u_ref, input.z_ref, z))
                    .unwrap()
                    .u[i]
            },
            input.z[i],
            step_for(input.z[i]),
        );
        assert_relative_eq!(du_dz[(i, i)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        let fd = central_diff(
            |z_ref| {
                wind.evaluate(&ProfileInput::new(input.u_ref, z_ref, input.z.clone()))
                    .unwrap()
                    .u[i]
            },
            input.z_ref,
            step_for(input.z_ref),
        );
        assert_relative_eq!(du_dzref[(i, 0)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);
    }
}

// ---------------------------------------------------------------------------
// Wave kinematics
// ---------------------------------------------------------------------------

#[test]
fn linear_waves_jacobian_matches_fd() {
    let model = LinearWaves::standard(2.0, 10.0);
    let input = WaveInput::new(vec![-35.0, -12.0, -3.0], 0.0, -50.0).with_current(0.6);
    let out = model.evaluate(&input).unwrap();
    let jac = model.linearize(&input, &out).unwrap();

    let du_dz = jac.dense("U", "z").unwrap();
    let da_dz = jac.dense("A", "z").unwrap();
    let du_duc = jac.dense("U", "Uc").unwrap();
    let da_duc = jac.dense("A", "Uc").unwrap();

    for i in 0..input.z.len() {
        let fd_u = central_diff(
            |zi| {
                let mut z = input.z.clone();
                z[i] = zi;
                let perturbed = WaveInput::new(z, input.z_surface, input.z_floor)
                    .with_current(input.uc);
                model.evaluate(&perturbed).unwrap().u[i]
            },
            input.z[i],
            step_for(input.z[i]),
        );
        assert_relative_eq!(du_dz[(i, i)], fd_u, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        let fd_a = central_diff(
            |zi| {
                let mut z = input.z.clone();
                z[i] = zi;
                let perturbed = WaveInput::new(z, input.z_surface, input.z_floor)
                    .with_current(input.uc);
                model.evaluate(&perturbed).unwrap().a[i]
            },
            input.z[i],
            step_for(input.z[i]),
        );
        assert_relative_eq!(da_dz[(i, i)], fd_a, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        let fd_u = central_diff(
            |uc| {
                let perturbed =
                    WaveInput::new(input.z.clone(), input.z_surface, input.z_floor)
                        .with_current(uc);
                model.evaluate(&perturbed).unwrap().u[i]
            },
            input.uc,
            step_for(input.uc),
        );
        assert_relative_eq!(du_duc[(i, 0)], fd_u, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

        let fd_a = central_diff(
            |uc| {
                let perturbed =
                    WaveInput::new(input.z.clone(), input.z_surface, input.z_floor)
                        .with_current(uc);
                model.evaluate(&perturbed).unwrap().a[i]
            },
            input.uc,
            step_for(input.uc),
        );
        assert_relative_eq!(da_duc[(i, 0)], fd_a, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);
    }

    // surface values: sensitive to the current, structurally blind to z
    let du0_duc = jac.dense("U0", "Uc").unwrap();
    let fd = central_diff(
        |uc| {
            let perturbed = WaveInput::new(input.z.clone(), input.z_surface, input.z_floor)
                .with_current(uc);
            model.evaluate(&perturbed).unwrap().u0
        },
        input.uc,
        step_for(input.uc),
    );
    assert_relative_eq!(du0_duc[(0, 0)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

    let da0_duc = jac.dense("A0", "Uc").unwrap();
    let fd = central_diff(
        |uc| {
            let perturbed = WaveInput::new(input.z.clone(), input.z_surface, input.z_floor)
                .with_current(uc);
            model.evaluate(&perturbed).unwrap().a0
        },
        input.uc,
        step_for(input.uc),
    );
    assert_relative_eq!(da0_duc[(0, 0)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);

    let du0_dz = jac.dense("U0", "z").unwrap();
    for j in 0..input.z.len() {
        let fd = central_diff(
            |zj| {
                let mut z = input.z.clone();
                z[j] = zj;
                let perturbed = WaveInput::new(z, input.z_surface, input.z_floor)
                    .with_current(input.uc);
                model.evaluate(&perturbed).unwrap().u0
            },
            input.z[j],
            step_for(input.z[j]),
        );
        assert_relative_eq!(du0_dz[(0, j)], fd, epsilon = FD_ABS_TOL);
    }
}

// ---------------------------------------------------------------------------
// Soil stiffness
// ---------------------------------------------------------------------------

#[test]
fn tower_soil_jacobian_matches_fd() {
    let soil = TowerSoil::standard();
    let geometry = FoundationGeometry::new(1.0, 1.0);
    let out = soil.evaluate(&geometry).unwrap();
    let jac = soil.linearize(&geometry, &out).unwrap();

    let dk_dr0 = jac.dense("k", "r0").unwrap();
    let dk_dh = jac.dense("k", "depth").unwrap();

    for i in 0..6 {
        let fd = central_diff(
            |r0| {
                soil.evaluate(&FoundationGeometry::new(r0, geometry.depth))
                    .unwrap()
                    .k[i]
            },
            geometry.r0,
            step_for(geometry.r0),
        );
        assert_relative_eq!(dk_dr0[(i, 0)], fd, max_relative = FD_REL_TOL, epsilon = 1e-2);

        let fd = central_diff(
            |depth| {
                soil.evaluate(&FoundationGeometry::new(geometry.r0, depth))
                    .unwrap()
                    .k[i]
            },
            geometry.depth,
            step_for(geometry.depth),
        );
        assert_relative_eq!(dk_dh[(i, 0)], fd, max_relative = FD_REL_TOL, epsilon = 1e-2);
    }
}

#[test]
fn soil_passthrough_jacobian_matches_fd() {
    let soil = SoilPassthrough::new([false, false, true, false, false, false]);
    let kin = [2e8, 3e8, 4e8, 5e8, 6e8, 7e8];
    let out = soil.evaluate(&kin).unwrap();
    let jac = soil.linearize(&kin, &out).unwrap();
    let d = jac.dense("k", "kin").unwrap();

    for i in 0..6 {
        for j in 0..6 {
            if soil.rigid[i] {
                // rigid output: infinite value, no finite-difference to take
                assert_eq!(d[(i, j)], 0.0);
                continue;
            }
            let fd = central_diff(
                |v| {
                    let mut kin = kin;
                    kin[j] = v;
                    soil.evaluate(&kin).unwrap().k[i]
                },
                kin[j],
                step_for(kin[j]),
            );
            assert_relative_eq!(d[(i, j)], fd, max_relative = FD_REL_TOL, epsilon = FD_ABS_TOL);
        }
    }
}
