use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::environment::Environment;
use crate::error::ModelError;
use crate::parameters::{MassPropertyField, StabilityDerivative, WingGeometryField};

use super::registry::ParameterRegistry;

/// Assignment separator in resource files, literally space-equals-space.
const SEPARATOR: &str = " = ";

const AERO_RESOURCE: &str = "Aero.txt";
const MASS_RESOURCE: &str = "MassProperties.txt";
const GEOMETRY_RESOURCE: &str = "WingGeometry.txt";

/// Where to find per-aircraft parameter resources. An aircraft named `N`
/// is described by `<resource_root>/N/Aero.txt`,
/// `<resource_root>/N/MassProperties.txt` and
/// `<resource_root>/N/WingGeometry.txt`, each holding one
/// `IDENTIFIER = VALUE` assignment per line.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub resource_root: PathBuf,
}

impl LoaderConfig {
    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            resource_root: resource_root.into(),
        }
    }

    fn resource_path(&self, aircraft_name: &str, resource: &str) -> PathBuf {
        self.resource_root.join(aircraft_name).join(resource)
    }
}

impl ParameterRegistry {
    /// Build a registry from the three named-aircraft resources.
    ///
    /// Every failure is non-fatal: a missing or unreadable resource is
    /// logged and skipped, as is any line that does not parse as
    /// `IDENTIFIER = VALUE` with a numeric value. Identifiers absent from
    /// the resources stay unpopulated (no default pre-seeding), so the
    /// returned registry may be incomplete; the accessor contract makes
    /// that visible to callers.
    pub fn from_resources(
        aircraft_name: &str,
        config: &LoaderConfig,
        env: &Environment,
    ) -> Self {
        let mut registry = ParameterRegistry::default();

        if let Err(error) = validate_name(aircraft_name) {
            warn!("{error}");
            return registry;
        }

        let aero = read_resource(config.resource_path(aircraft_name, AERO_RESOURCE));
        for id in StabilityDerivative::ALL {
            if let Some(value) = lookup(&aero, id.token()) {
                registry.insert_stability(id, value);
            }
        }

        let mass = read_resource(config.resource_path(aircraft_name, MASS_RESOURCE));
        for id in MassPropertyField::ALL {
            if let Some(value) = lookup(&mass, id.token()) {
                registry.insert_mass(id, value);
            }
        }

        let geometry = read_resource(config.resource_path(aircraft_name, GEOMETRY_RESOURCE));
        for id in WingGeometryField::ALL {
            if let Some(value) = lookup(&geometry, id.token()) {
                registry.insert_geometry(id, value);
            }
        }

        // A TOTAL_MASS assignment in the resource wins over derivation.
        if registry.mass_value(MassPropertyField::TotalMass).is_none() {
            registry.derive_total_mass(env);
        }

        registry
    }
}

fn validate_name(aircraft_name: &str) -> Result<(), ModelError> {
    let escapes_root = aircraft_name.contains('/')
        || aircraft_name.contains('\\')
        || aircraft_name == ".."
        || aircraft_name.is_empty();
    if escapes_root {
        Err(ModelError::InvalidReference(aircraft_name.to_string()))
    } else {
        Ok(())
    }
}

/// Read one resource to completion and return its parsed assignments.
/// Failures are reported here and degrade to an empty list.
fn read_resource(path: PathBuf) -> Vec<(String, f64)> {
    match fs::read_to_string(&path) {
        Ok(contents) => parse_lines(&path, &contents),
        Err(source) => {
            let error = if source.kind() == io::ErrorKind::NotFound {
                ModelError::ResourceNotFound(path)
            } else {
                ModelError::ResourceUnreadable { path, source }
            };
            warn!("{error}");
            Vec::new()
        }
    }
}

fn parse_lines(path: &Path, contents: &str) -> Vec<(String, f64)> {
    let mut entries = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split(SEPARATOR);
        let parsed = match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => value
                .trim()
                .parse::<f64>()
                .ok()
                .map(|value| (key.trim().to_string(), value)),
            _ => None,
        };
        match parsed {
            Some(entry) => entries.push(entry),
            None => warn!(
                "{}",
                ModelError::ParseFailure {
                    path: path.to_path_buf(),
                    line: line.to_string(),
                }
            ),
        }
    }
    entries
}

fn lookup(entries: &[(String, f64)], token: &str) -> Option<f64> {
    entries
        .iter()
        .find(|(key, _)| key == token)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::GRAVITY_FT_S2;
    use approx::assert_relative_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write_resource(root: &TempDir, aircraft: &str, resource: &str, contents: &str) {
        let dir = root.path().join(aircraft);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(resource), contents).unwrap();
    }

    #[test]
    fn scalar_categories_round_trip_through_resources() {
        let root = TempDir::new().unwrap();
        let geometry: String = WingGeometryField::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| format!("{} = {}\n", id.token(), (i as f64) + 0.5))
            .collect();
        let mass: String = MassPropertyField::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| format!("{} = {}\n", id.token(), (i as f64) * 10.0))
            .collect();
        write_resource(&root, "RoundTrip", GEOMETRY_RESOURCE, &geometry);
        write_resource(&root, "RoundTrip", MASS_RESOURCE, &mass);

        let config = LoaderConfig::new(root.path());
        let registry = ParameterRegistry::from_resources("RoundTrip", &config, &Environment::new());

        for (i, id) in WingGeometryField::ALL.into_iter().enumerate() {
            assert_relative_eq!(registry.geometry(id).unwrap(), (i as f64) + 0.5);
        }
        for (i, id) in MassPropertyField::ALL.into_iter().enumerate() {
            assert_relative_eq!(registry.mass_property(id).unwrap(), (i as f64) * 10.0);
        }
    }

    #[test]
    fn malformed_lines_are_skipped_without_aborting() {
        let root = TempDir::new().unwrap();
        write_resource(
            &root,
            "Scrappy",
            AERO_RESOURCE,
            "CL_ALPHA = 4.44\nCL_0 0.41\nCM_Q = not-a-number\n",
        );

        let config = LoaderConfig::new(root.path());
        let registry = ParameterRegistry::from_resources("Scrappy", &config, &Environment::new());

        let cl_alpha = registry.stability(StabilityDerivative::ClAlpha).unwrap();
        assert_eq!(cl_alpha.as_constant(), Some(4.44));
        assert!(registry.stability(StabilityDerivative::Cl0).is_err());
        assert!(registry.stability(StabilityDerivative::CmQ).is_err());
    }

    #[test]
    fn missing_resources_degrade_to_an_empty_category() {
        let root = TempDir::new().unwrap();
        write_resource(&root, "AeroOnly", AERO_RESOURCE, "CD_0 = 0.025\n");

        let config = LoaderConfig::new(root.path());
        let registry = ParameterRegistry::from_resources("AeroOnly", &config, &Environment::new());

        assert_eq!(
            registry
                .stability(StabilityDerivative::Cd0)
                .unwrap()
                .as_constant(),
            Some(0.025)
        );
        assert!(registry.geometry(WingGeometryField::WingArea).is_err());
        assert!(registry.mass_property(MassPropertyField::Jx).is_err());
    }

    #[test]
    fn nonexistent_aircraft_yields_an_unpopulated_registry() {
        let root = TempDir::new().unwrap();
        let config = LoaderConfig::new(root.path());
        let registry = ParameterRegistry::from_resources("NoSuchPlane", &config, &Environment::new());
        assert_eq!(
            registry.missing().len(),
            StabilityDerivative::ALL.len()
                + WingGeometryField::ALL.len()
                + MassPropertyField::ALL.len()
        );
    }

    #[test]
    fn path_escaping_names_are_rejected() {
        let root = TempDir::new().unwrap();
        let config = LoaderConfig::new(root.path());
        for name in ["", "..", "a/b", "a\\b"] {
            let registry = ParameterRegistry::from_resources(name, &config, &Environment::new());
            assert!(registry.center_of_gravity().is_err());
        }
    }

    #[test]
    fn total_mass_is_derived_when_weights_parse() {
        let root = TempDir::new().unwrap();
        write_resource(
            &root,
            "Weighted",
            MASS_RESOURCE,
            "WEIGHT_EMPTY = 1000.0\nWEIGHT_FUEL = 200.0\nWEIGHT_PAYLOAD = 300.0\n",
        );

        let config = LoaderConfig::new(root.path());
        let registry = ParameterRegistry::from_resources("Weighted", &config, &Environment::new());
        assert_relative_eq!(
            registry.mass_property(MassPropertyField::TotalMass).unwrap(),
            1500.0 / GRAVITY_FT_S2
        );
    }

    #[test]
    fn explicit_total_mass_wins_over_derivation() {
        let root = TempDir::new().unwrap();
        write_resource(
            &root,
            "Explicit",
            MASS_RESOURCE,
            "WEIGHT_EMPTY = 1000.0\nWEIGHT_FUEL = 200.0\nWEIGHT_PAYLOAD = 300.0\nTOTAL_MASS = 77.0\n",
        );

        let config = LoaderConfig::new(root.path());
        let registry = ParameterRegistry::from_resources("Explicit", &config, &Environment::new());
        assert_relative_eq!(
            registry.mass_property(MassPropertyField::TotalMass).unwrap(),
            77.0
        );
    }
}
