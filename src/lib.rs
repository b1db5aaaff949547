//! # envload-rs
//!
//! Environmental loading models for structural analysis of wind turbine
//! support structures:
//! - Wind speed profiles (power-law and logarithmic)
//! - Wave kinematics (linear/Airy theory, with a no-wave default)
//! - Soil foundation stiffness (elastic half-space formulas, with a
//!   passthrough variant)
//!
//! Each model is an independent leaf component consumed by an external
//! assembly/optimization framework. The shared contract is:
//! - `evaluate(inputs) -> outputs`: vectorized closed-form evaluation (the
//!   wave model additionally solves the dispersion relation by a bracketed
//!   root-find)
//! - `linearize(inputs, outputs) -> Jacobian`: hand-derived analytic
//!   sensitivities, keyed by (output, input) name pairs and complete over
//!   the declared derivative surface (zero-filled where no dependency
//!   exists)
//!
//! Inputs carry declarative unit metadata ([`VariableMeta`]) so the
//! surrounding framework can run unit-consistency checks.
//!
//! Physical preconditions are validated up front and violations surface as
//! [`DomainError`]; the bounded dispersion root-find surfaces convergence
//! failures as [`NumericalError`]. Nothing is clamped or retried.

pub mod component;
pub mod error;
pub mod jacobian;
pub mod soil;
pub mod wave;
pub mod wind;

pub use component::{ComponentInfo, VariableMeta};
pub use error::{DomainError, EnvError, NumericalError};
pub use jacobian::{hstack, vstack, Jacobian, Sensitivity};
pub use soil::{
    FoundationGeometry, RigidMask, SoilModel, SoilPassthrough, StiffnessVector, TowerSoil,
    DOF_NAMES,
};
pub use wave::{
    solve_dispersion, LinearWaves, NoWaves, WaveInput, WaveModel, WaveOutputs, STANDARD_GRAVITY,
};
pub use wind::{LogWind, PowerWind, ProfileInput, Validation, WindModel, WindOutputs};
