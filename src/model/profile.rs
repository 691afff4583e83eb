use crate::environment::Environment;
use crate::parameters::{MassPropertyField, StabilityDerivative, WingGeometryField};

use super::registry::ParameterRegistry;

impl ParameterRegistry {
    /// Reference profile: the North American Navion, a light single-engine
    /// airplane with well-documented flight-test data. Imperial units
    /// throughout (lbf, slug·ft², ft).
    ///
    /// Populates every member of all three enumerations and derives total
    /// mass from the component weights and the vertical component of the
    /// environment's gravity vector.
    pub fn navion(env: &Environment) -> Self {
        let mut registry = ParameterRegistry::default();

        // Lift
        registry.insert_stability(StabilityDerivative::ClAlpha, 4.44);
        registry.insert_stability(StabilityDerivative::Cl0, 0.41);
        registry.insert_stability(StabilityDerivative::ClQ, 3.80);
        registry.insert_stability(StabilityDerivative::ClAlphaDot, 0.0);
        registry.insert_stability(StabilityDerivative::ClDeltaE, 0.355);
        registry.insert_stability(StabilityDerivative::ClDeltaF, 0.355);

        // Side force
        registry.insert_stability(StabilityDerivative::CyBeta, -0.564);
        registry.insert_stability(StabilityDerivative::CyDeltaR, 0.157);

        // Drag
        registry.insert_stability(StabilityDerivative::CdAlpha, 0.33);
        registry.insert_stability(StabilityDerivative::Cd0, 0.025);
        registry.insert_stability(StabilityDerivative::CdDeltaE, 0.001);
        registry.insert_stability(StabilityDerivative::CdDeltaF, 0.02);
        registry.insert_stability(StabilityDerivative::CdDeltaG, 0.09);

        // Roll moment
        registry.insert_stability(StabilityDerivative::CRollBeta, -0.074);
        registry.insert_stability(StabilityDerivative::CRollP, -0.410);
        registry.insert_stability(StabilityDerivative::CRollR, 0.107);
        registry.insert_stability(StabilityDerivative::CRollDeltaA, -0.134);
        registry.insert_stability(StabilityDerivative::CRollDeltaR, 0.107);

        // Pitch moment
        registry.insert_stability(StabilityDerivative::CmAlpha, -0.683);
        registry.insert_stability(StabilityDerivative::Cm0, 0.02);
        registry.insert_stability(StabilityDerivative::CmQ, -9.96);
        registry.insert_stability(StabilityDerivative::CmAlphaDot, -4.36);
        registry.insert_stability(StabilityDerivative::CmDeltaE, -0.923);
        registry.insert_stability(StabilityDerivative::CmDeltaF, -0.050);

        // Yaw moment
        registry.insert_stability(StabilityDerivative::CnBeta, 0.071);
        registry.insert_stability(StabilityDerivative::CnP, -0.0575);
        registry.insert_stability(StabilityDerivative::CnR, -0.125);
        registry.insert_stability(StabilityDerivative::CnDeltaA, -0.0035);
        registry.insert_stability(StabilityDerivative::CnDeltaR, -0.072);

        // Aerodynamic center
        registry.insert_geometry(WingGeometryField::AcX, 0.0);
        registry.insert_geometry(WingGeometryField::AcY, 0.0);
        registry.insert_geometry(WingGeometryField::AcZ, 0.0);

        // Wing dimensions
        registry.insert_geometry(WingGeometryField::WingArea, 184.0);
        registry.insert_geometry(WingGeometryField::WingSpan, 33.4);
        registry.insert_geometry(WingGeometryField::MeanChord, 5.7);

        // Center of gravity
        registry.insert_mass(MassPropertyField::CgX, 0.0);
        registry.insert_mass(MassPropertyField::CgY, 0.0);
        registry.insert_mass(MassPropertyField::CgZ, 0.0);

        // Moments of inertia
        registry.insert_mass(MassPropertyField::Jx, 1048.0);
        registry.insert_mass(MassPropertyField::Jy, 3000.0);
        registry.insert_mass(MassPropertyField::Jz, 3050.0);
        registry.insert_mass(MassPropertyField::Jxz, 0.0);

        // Weights (lbf) and derived mass (slug)
        registry.insert_mass(MassPropertyField::WeightEmpty, 1780.0);
        registry.insert_mass(MassPropertyField::WeightFuel, 360.0);
        registry.insert_mass(MassPropertyField::WeightPayload, 610.0);
        registry.derive_total_mass(env);

        registry
    }

    /// TOTAL_MASS = (WEIGHT_EMPTY + WEIGHT_FUEL + WEIGHT_PAYLOAD) / g_z,
    /// computed once at the end of construction. Requires all three
    /// weights; leaves TOTAL_MASS absent otherwise.
    pub(crate) fn derive_total_mass(&mut self, env: &Environment) {
        let weights = (
            self.mass_value(MassPropertyField::WeightEmpty),
            self.mass_value(MassPropertyField::WeightFuel),
            self.mass_value(MassPropertyField::WeightPayload),
        );
        if let (Some(empty), Some(fuel), Some(payload)) = weights {
            let gravity_z = env.gravity()[2];
            self.insert_mass(
                MassPropertyField::TotalMass,
                (empty + fuel + payload) / gravity_z,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::GRAVITY_FT_S2;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_identifier_is_populated() {
        let registry = ParameterRegistry::navion(&Environment::new());
        assert_eq!(registry.missing(), Vec::<&str>::new());
    }

    #[test]
    fn total_mass_is_weights_over_gravity() {
        let env = Environment::new();
        let registry = ParameterRegistry::navion(&env);
        let total_mass = registry.mass_property(MassPropertyField::TotalMass).unwrap();
        assert_eq!(total_mass, (1780.0 + 360.0 + 610.0) / GRAVITY_FT_S2);
    }

    #[test]
    fn accessors_match_direct_lookups() {
        let registry = ParameterRegistry::navion(&Environment::new());

        let cg = registry.center_of_gravity().unwrap();
        assert_eq!(cg.x, registry.mass_property(MassPropertyField::CgX).unwrap());
        assert_eq!(cg.y, registry.mass_property(MassPropertyField::CgY).unwrap());
        assert_eq!(cg.z, registry.mass_property(MassPropertyField::CgZ).unwrap());

        let ac = registry.aerodynamic_center().unwrap();
        assert_eq!(ac.x, registry.geometry(WingGeometryField::AcX).unwrap());
        assert_eq!(ac.y, registry.geometry(WingGeometryField::AcY).unwrap());
        assert_eq!(ac.z, registry.geometry(WingGeometryField::AcZ).unwrap());

        let inertia = registry.inertia().unwrap();
        assert_eq!(inertia[0], registry.mass_property(MassPropertyField::Jx).unwrap());
        assert_eq!(inertia[1], registry.mass_property(MassPropertyField::Jy).unwrap());
        assert_eq!(inertia[2], registry.mass_property(MassPropertyField::Jz).unwrap());
        assert_eq!(inertia[3], registry.mass_property(MassPropertyField::Jxz).unwrap());
    }

    #[test]
    fn lift_curve_slope_is_a_constant_coefficient() {
        let registry = ParameterRegistry::navion(&Environment::new());
        let cl_alpha = registry.stability(StabilityDerivative::ClAlpha).unwrap();
        assert_eq!(cl_alpha.as_constant(), Some(4.44));
    }
}
