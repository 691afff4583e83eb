mod loader;
mod profile;
mod registry;

pub use loader::LoaderConfig;
pub use registry::ParameterRegistry;

use nalgebra::Vector3;

use crate::environment::Environment;
use crate::error::ModelError;

/// A fixed-wing aircraft's static parameter set: the data foundation an
/// equations-of-motion solver consumes.
///
/// Construct either with the built-in reference profile ([`Aircraft::navion`])
/// or from per-aircraft resource files ([`Aircraft::from_named`]). The
/// registry is read-only after construction.
#[derive(Debug, Clone)]
pub struct Aircraft {
    name: String,
    registry: ParameterRegistry,
}

impl Aircraft {
    /// The built-in reference aircraft, fully populated.
    pub fn navion(env: &Environment) -> Self {
        Self {
            name: "Navion".to_string(),
            registry: ParameterRegistry::navion(env),
        }
    }

    /// Load a named aircraft from resource files under
    /// `config.resource_root`. Missing or malformed data degrades to an
    /// under-populated registry rather than an error; use the accessors
    /// (or [`ParameterRegistry::missing`]) to verify completeness.
    pub fn from_named(aircraft_name: &str, config: &LoaderConfig, env: &Environment) -> Self {
        Self {
            name: aircraft_name.to_string(),
            registry: ParameterRegistry::from_resources(aircraft_name, config, env),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    /// Center of gravity offsets, ordered (x, y, z).
    pub fn center_of_gravity(&self) -> Result<Vector3<f64>, ModelError> {
        self.registry.center_of_gravity()
    }

    /// Aerodynamic center offsets, ordered (x, y, z).
    pub fn aerodynamic_center(&self) -> Result<Vector3<f64>, ModelError> {
        self.registry.aerodynamic_center()
    }

    /// Moments and product of inertia, ordered [Jx, Jy, Jz, Jxz].
    pub fn inertia(&self) -> Result<[f64; 4], ModelError> {
        self.registry.inertia()
    }
}

impl Default for Aircraft {
    fn default() -> Self {
        Self::navion(&Environment::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_aircraft_is_the_reference_profile() {
        let aircraft = Aircraft::default();
        assert_eq!(aircraft.name(), "Navion");
        assert!(aircraft.registry().missing().is_empty());
    }

    #[test]
    fn facade_accessors_delegate_to_the_registry() {
        let aircraft = Aircraft::default();
        assert_eq!(
            aircraft.center_of_gravity().unwrap(),
            aircraft.registry().center_of_gravity().unwrap()
        );
        assert_eq!(
            aircraft.aerodynamic_center().unwrap(),
            aircraft.registry().aerodynamic_center().unwrap()
        );
        assert_eq!(aircraft.inertia().unwrap(), aircraft.registry().inertia().unwrap());
    }
}
