use nalgebra::{Matrix3, Vector3};
use std::collections::HashMap;

use crate::error::ModelError;
use crate::parameters::{
    Coefficient, MassPropertyField, StabilityDerivative, WingGeometryField,
};

/// The three parameter mappings of an aircraft: stability derivatives,
/// wing geometry, and mass properties.
///
/// Built once at aircraft construction and read-only afterwards. Every
/// accessor returns `Err(MissingParameter)` for an identifier that was
/// never populated, never a silent zero; the file-backed loader can leave
/// gaps, and completeness verification is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    stability: HashMap<StabilityDerivative, Coefficient>,
    geometry: HashMap<WingGeometryField, f64>,
    mass: HashMap<MassPropertyField, f64>,
}

impl ParameterRegistry {
    pub(crate) fn insert_stability(
        &mut self,
        id: StabilityDerivative,
        value: impl Into<Coefficient>,
    ) {
        self.stability.insert(id, value.into());
    }

    pub(crate) fn insert_geometry(&mut self, id: WingGeometryField, value: f64) {
        self.geometry.insert(id, value);
    }

    pub(crate) fn insert_mass(&mut self, id: MassPropertyField, value: f64) {
        self.mass.insert(id, value);
    }

    pub(crate) fn mass_value(&self, id: MassPropertyField) -> Option<f64> {
        self.mass.get(&id).copied()
    }

    /// Look up a stability derivative coefficient.
    pub fn stability(&self, id: StabilityDerivative) -> Result<&Coefficient, ModelError> {
        self.stability
            .get(&id)
            .ok_or(ModelError::MissingParameter(id.token()))
    }

    /// Look up a wing geometry value.
    pub fn geometry(&self, id: WingGeometryField) -> Result<f64, ModelError> {
        self.geometry
            .get(&id)
            .copied()
            .ok_or(ModelError::MissingParameter(id.token()))
    }

    /// Look up a mass property value.
    pub fn mass_property(&self, id: MassPropertyField) -> Result<f64, ModelError> {
        self.mass
            .get(&id)
            .copied()
            .ok_or(ModelError::MissingParameter(id.token()))
    }

    /// Center of gravity offsets, ordered (x, y, z).
    pub fn center_of_gravity(&self) -> Result<Vector3<f64>, ModelError> {
        Ok(Vector3::new(
            self.mass_property(MassPropertyField::CgX)?,
            self.mass_property(MassPropertyField::CgY)?,
            self.mass_property(MassPropertyField::CgZ)?,
        ))
    }

    /// Aerodynamic center offsets, ordered (x, y, z).
    pub fn aerodynamic_center(&self) -> Result<Vector3<f64>, ModelError> {
        Ok(Vector3::new(
            self.geometry(WingGeometryField::AcX)?,
            self.geometry(WingGeometryField::AcY)?,
            self.geometry(WingGeometryField::AcZ)?,
        ))
    }

    /// Moments and product of inertia, ordered [Jx, Jy, Jz, Jxz].
    pub fn inertia(&self) -> Result<[f64; 4], ModelError> {
        Ok([
            self.mass_property(MassPropertyField::Jx)?,
            self.mass_property(MassPropertyField::Jy)?,
            self.mass_property(MassPropertyField::Jz)?,
            self.mass_property(MassPropertyField::Jxz)?,
        ])
    }

    /// The body-axis inertia tensor assembled from the stored moments and
    /// product of inertia.
    pub fn inertia_matrix(&self) -> Result<Matrix3<f64>, ModelError> {
        let [jx, jy, jz, jxz] = self.inertia()?;
        Ok(Matrix3::from_columns(&[
            Vector3::new(jx, 0.0, -jxz),
            Vector3::new(0.0, jy, 0.0),
            Vector3::new(-jxz, 0.0, jz),
        ]))
    }

    /// Identifiers across all three enumerations that have no value yet.
    /// Empty for default-built registries; the file-backed loader can
    /// leave entries here when resources are missing or malformed.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for id in StabilityDerivative::ALL {
            if !self.stability.contains_key(&id) {
                missing.push(id.token());
            }
        }
        for id in WingGeometryField::ALL {
            if !self.geometry.contains_key(&id) {
                missing.push(id.token());
            }
        }
        for id in MassPropertyField::ALL {
            if !self.mass.contains_key(&id) {
                missing.push(id.token());
            }
        }
        missing
    }
}
