//! Reference addresses: known points of interest that resolve without a
//! provider round trip.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::{BoundingRegion, LngLat};
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAddress {
    /// Descriptive phrase, normalized the same way as input before matching.
    pub key: String,
    pub coordinates: LngLat,
    pub formatted_address: String,
}

/// The table compiled into the binary.
#[must_use]
pub fn builtin_reference_addresses() -> Vec<ReferenceAddress> {
    vec![ReferenceAddress {
        key: "colegio técnico industrial josé elías puyana".to_string(),
        coordinates: LngLat::new(-73.083_918_655_997_8, 7.064_693_786_161_123),
        formatted_address:
            "Colegio Técnico Industrial José Elías Puyana SEDE A, Cl. 4 #11-79, Floridablanca, Santander"
                .to_string(),
    }]
}

#[derive(Debug, Deserialize)]
pub struct ReferenceFile {
    #[serde(default)]
    pub references: Vec<ReferenceAddress>,
}

/// Load extra reference addresses from a YAML file.
///
/// Keys are trimmed and lowercased here; the matcher expands abbreviations.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_reference_addresses(path: &Path) -> Result<Vec<ReferenceAddress>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReferenceFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: ReferenceFile = serde_yaml::from_str(&content)?;
    let references = file
        .references
        .into_iter()
        .map(|mut r| {
            r.key = r.key.trim().to_lowercase();
            r
        })
        .collect::<Vec<_>>();

    validate_references(&references)?;

    Ok(references)
}

fn validate_references(references: &[ReferenceAddress]) -> Result<(), ConfigError> {
    let mut seen_keys = HashSet::new();

    for reference in references {
        if reference.key.is_empty() {
            return Err(ConfigError::Validation(
                "reference key must be non-empty".to_string(),
            ));
        }

        if reference.formatted_address.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "reference '{}' has an empty formatted_address",
                reference.key
            )));
        }

        if reference.coordinates.is_origin()
            || !BoundingRegion::SANTANDER.contains(reference.coordinates)
        {
            return Err(ConfigError::Validation(format!(
                "reference '{}' has coordinates {} outside Santander",
                reference.key, reference.coordinates
            )));
        }

        if !seen_keys.insert(reference.key.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate reference key: '{}'",
                reference.key
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn builtin_table_is_valid() {
        let builtin = builtin_reference_addresses();
        assert_eq!(builtin.len(), 1);
        validate_references(&builtin).unwrap();
    }

    #[test]
    fn loads_and_lowercases_keys() {
        let file = write_yaml(
            r"
references:
  - key: Parque San Pío
    coordinates: [-73.1103, 7.1166]
    formatted_address: Parque San Pío, Bucaramanga, Santander
",
        );
        let refs = load_reference_addresses(file.path()).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "parque san pío");
        assert_eq!(refs[0].coordinates, LngLat::new(-73.1103, 7.1166));
    }

    #[test]
    fn rejects_out_of_region_coordinates() {
        let file = write_yaml(
            r"
references:
  - key: plaza de bolívar
    coordinates: [-74.0760, 4.5981]
    formatted_address: Plaza de Bolívar, Bogotá
",
        );
        let err = load_reference_addresses(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("outside Santander")));
    }

    #[test]
    fn rejects_duplicate_keys_case_insensitively() {
        let file = write_yaml(
            r"
references:
  - key: Parque San Pío
    coordinates: [-73.1103, 7.1166]
    formatted_address: A
  - key: parque san pío
    coordinates: [-73.1103, 7.1166]
    formatted_address: B
",
        );
        let err = load_reference_addresses(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_reference_addresses(Path::new("/nonexistent/refs.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReferenceFileIo { .. }));
    }
}
