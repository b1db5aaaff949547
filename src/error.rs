//! Error types for environmental model evaluation.
//!
//! Failures fall into two classes, mirrored by two enums:
//!
//! - [`DomainError`]: the inputs violate a physical precondition (degenerate
//!   reference height, non-positive water depth, Poisson ratio outside the
//!   physical range). These are cheap to validate and indicate a misconfigured
//!   model, so they are always surfaced and never clamped.
//! - [`NumericalError`]: a bounded internal iteration (the dispersion-relation
//!   root-find) failed to bracket a root or to converge within its budget.
//!
//! Both propagate directly to the caller. Nothing is retried with different
//! parameters; the caller must supply different inputs.

use thiserror::Error;

/// Physical precondition violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Reference height does not lie above the profile bottom.
    #[error("reference height {z_ref} m must lie above the profile bottom {z0} m")]
    DegenerateReference { z_ref: f64, z0: f64 },

    /// Reference height sits inside the roughness sublayer of a log profile.
    #[error(
        "reference height {z_ref} m must lie more than the roughness length \
         {z_roughness} m above the profile bottom {z0} m"
    )]
    ReferenceInRoughnessLayer {
        z_ref: f64,
        z0: f64,
        z_roughness: f64,
    },

    /// Water surface must lie above the sea floor.
    #[error("water depth must be positive: z_surface = {z_surface} m, z_floor = {z_floor} m")]
    NonPositiveDepth { z_surface: f64, z_floor: f64 },

    /// Wave period must be positive.
    #[error("wave period must be positive, got {period} s")]
    NonPositivePeriod { period: f64 },

    /// Gravitational acceleration must be positive.
    #[error("gravitational acceleration must be positive, got {g} m/s^2")]
    NonPositiveGravity { g: f64 },

    /// Foundation base radius must be positive.
    #[error("foundation radius must be positive, got {r0} m")]
    NonPositiveRadius { r0: f64 },

    /// Foundation embedment depth must be non-negative.
    #[error("foundation embedment depth must be non-negative, got {depth} m")]
    NegativeEmbedment { depth: f64 },

    /// Poisson ratio outside the physical open interval (-1, 0.5).
    #[error("Poisson ratio must lie in (-1, 0.5), got {nu}")]
    PoissonOutOfRange { nu: f64 },

    /// Block shapes handed to a stacking helper do not agree.
    #[error("{op}: block {index} has {got} {axis}, expected {expected}")]
    ShapeMismatch {
        op: &'static str,
        axis: &'static str,
        index: usize,
        expected: usize,
        got: usize,
    },
}

/// Failure of a bounded internal iteration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericalError {
    /// The search interval contains no sign change, so no root can exist
    /// inside it. Indicates nonphysical inputs.
    #[error("no sign change in ({lo:.6e}, {hi:.6e}] when bracketing the dispersion root")]
    BracketWithoutRoot { lo: f64, hi: f64 },

    /// The iteration budget was exhausted before reaching tolerance.
    #[error("root-find did not converge within {iterations} iterations (residual {residual:.3e})")]
    NoConvergence { iterations: usize, residual: f64 },
}

/// Top-level error type for all environmental model evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    /// Inputs violate a physical precondition.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An internal iterative solve failed.
    #[error(transparent)]
    Numerical(#[from] NumericalError),
}
