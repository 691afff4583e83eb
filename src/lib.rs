mod environment;
mod error;
mod model;
mod parameters;

pub use environment::{Environment, GRAVITY_FT_S2};
pub use error::ModelError;
pub use model::{Aircraft, LoaderConfig, ParameterRegistry};
pub use parameters::{
    Coefficient, CoefficientCurve, MassPropertyField, StabilityDerivative, UnknownToken,
    WingGeometryField,
};
