mod coefficient;
mod geometry;
mod mass;
mod stability;

pub use coefficient::{Coefficient, CoefficientCurve};
pub use geometry::WingGeometryField;
pub use mass::MassPropertyField;
pub use stability::StabilityDerivative;

use thiserror::Error;

/// Returned when a string does not name any member of a parameter
/// enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown parameter identifier: {0}")]
pub struct UnknownToken(pub String);
