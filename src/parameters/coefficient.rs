use std::fmt;
use std::sync::Arc;

/// A coefficient that varies with the flight state, supplied by an
/// external interpolation scheme. This crate stores the handle and never
/// inspects the curve itself.
pub trait CoefficientCurve: Send + Sync {
    /// Evaluate the coefficient at the given angle of attack (rad) and
    /// Mach number.
    fn evaluate(&self, alpha: f64, mach: f64) -> f64;
}

impl<F> CoefficientCurve for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, alpha: f64, mach: f64) -> f64 {
        self(alpha, mach)
    }
}

/// Value of a stability derivative: either a plain constant or a handle
/// to an interpolation function of the flight state.
///
/// The tagged variant keeps the two cases apart at the type level, so a
/// function-valued entry cannot be misread as a plain number.
#[derive(Clone)]
pub enum Coefficient {
    Constant(f64),
    Interpolated(Arc<dyn CoefficientCurve>),
}

impl Coefficient {
    /// Evaluate the coefficient at the given flight state. Constants
    /// ignore the arguments.
    pub fn evaluate(&self, alpha: f64, mach: f64) -> f64 {
        match self {
            Coefficient::Constant(value) => *value,
            Coefficient::Interpolated(curve) => curve.evaluate(alpha, mach),
        }
    }

    /// The constant value, or `None` for a function-valued coefficient.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Coefficient::Constant(value) => Some(*value),
            Coefficient::Interpolated(_) => None,
        }
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Coefficient::Constant(value)
    }
}

impl fmt::Debug for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Coefficient::Interpolated(_) => f.write_str("Interpolated(..)"),
        }
    }
}
