use nalgebra::Vector3;

/// Standard gravitational acceleration in ft/s^2, matching the imperial
/// units of the reference data set (weights in lbf, inertia in slug·ft²).
pub const GRAVITY_FT_S2: f64 = 32.174;

/// Environment collaborator. The parameter model reads only the third
/// (vertical) component of the gravity vector, when deriving total mass
/// from the component weights.
#[derive(Debug, Clone)]
pub struct Environment {
    gravity: Vector3<f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            gravity: Vector3::new(0.0, 0.0, GRAVITY_FT_S2),
        }
    }

    /// An environment with a caller-supplied gravity vector, for data
    /// sets in other unit systems.
    pub fn with_gravity(gravity: Vector3<f64>) -> Self {
        Self { gravity }
    }

    pub fn gravity(&self) -> Vector3<f64> {
        self.gravity
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
