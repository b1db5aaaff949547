//! Component metadata: variable names, physical units, derivative surface.
//!
//! Every model component declares its inputs and outputs with physical units
//! so the surrounding assembly framework can run unit-consistency checks. The
//! crate itself performs no unit conversion, with one exception: the
//! roughness length of the logarithmic wind profile is specified in
//! millimeters and converted to meters internally.
//!
//! The derivative surface of a component is the cross product of
//! [`ComponentInfo::deriv_outputs`] and [`ComponentInfo::deriv_inputs`]; a
//! [`crate::jacobian::Jacobian`] returned by `linearize` holds a block for
//! every pair in that cross product, zero-filled where no dependency exists.

/// Metadata for a single input or output variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableMeta {
    /// Variable name as exposed to the assembly framework (e.g. "Uref").
    pub name: &'static str,
    /// Physical unit (e.g. "m/s", "deg", "Pa"); "-" for dimensionless.
    pub units: &'static str,
    /// Short human-readable description.
    pub desc: &'static str,
}

impl VariableMeta {
    /// Create a metadata entry.
    pub const fn new(name: &'static str, units: &'static str, desc: &'static str) -> Self {
        Self { name, units, desc }
    }
}

/// Declarative schema of a model component.
///
/// This trait carries no numerics; it exists so callers can enumerate a
/// component's variables and units without knowing its concrete input and
/// output types.
pub trait ComponentInfo {
    /// Component name for debugging and registration.
    fn name(&self) -> &'static str;

    /// Metadata for every input variable, parameters included.
    fn inputs(&self) -> &'static [VariableMeta];

    /// Metadata for every output variable.
    fn outputs(&self) -> &'static [VariableMeta];

    /// Names of the inputs the Jacobian differentiates with respect to.
    fn deriv_inputs(&self) -> &'static [&'static str];

    /// Names of the outputs the Jacobian covers.
    fn deriv_outputs(&self) -> &'static [&'static str];

    /// Look up the unit of a variable by name, searching inputs then outputs.
    fn units_of(&self, name: &str) -> Option<&'static str> {
        self.inputs()
            .iter()
            .chain(self.outputs().iter())
            .find(|m| m.name == name)
            .map(|m| m.units)
    }
}
