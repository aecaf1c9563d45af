//! Manifest loading and structural validation.

use std::path::Path;

use crate::errors::ManifestError;

use super::types::Manifest;

impl Manifest {
    /// Load and validate a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ManifestError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| ManifestError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        manifest.validate()?;
        tracing::debug!(
            modules = manifest.modules.len(),
            path = %path.display(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    /// Parse a manifest from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest =
            toml::from_str(toml_str).map_err(|e| ManifestError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Structural checks that don't need the dependency graph:
    /// non-empty module list, unique names, no self-dependencies.
    /// Unresolved dependency names are a graph-construction concern.
    fn validate(&self) -> Result<(), ManifestError> {
        if self.modules.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for module in &self.modules {
            if !seen.insert(module.name.as_str()) {
                return Err(ManifestError::DuplicateModule(module.name.clone()));
            }
            if module.dependencies.iter().any(|d| d.name() == module.name) {
                return Err(ManifestError::SelfDependency(module.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [project]
        name = "acme-service"

        [[module]]
        name = "domain"
        role = "domain"

        [[module]]
        name = "application"
        role = "application"
        dependencies = ["domain"]
        externals = ["org.springframework:spring-context"]
    "#;

    #[test]
    fn parses_a_two_module_manifest() {
        let manifest = Manifest::from_toml(SAMPLE).unwrap();
        assert_eq!(manifest.project.name.as_deref(), Some("acme-service"));
        assert_eq!(manifest.modules.len(), 2);
        assert_eq!(
            manifest.module("application").unwrap().dependencies[0].name(),
            "domain"
        );
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.modules.len(), 2);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Manifest::load(Path::new("/nonexistent/strata.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::FileNotFound { .. }));
    }

    #[test]
    fn duplicate_module_names_are_rejected() {
        let toml_str = r#"
            [[module]]
            name = "domain"
            role = "domain"

            [[module]]
            name = "domain"
            role = "application"
        "#;
        let err = Manifest::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateModule(name) if name == "domain"));
    }

    #[test]
    fn self_dependency_is_rejected() {
        let toml_str = r#"
            [[module]]
            name = "application"
            role = "application"
            dependencies = ["application"]
        "#;
        let err = Manifest::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, ManifestError::SelfDependency(name) if name == "application"));
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let err = Manifest::from_toml("[project]\nname = \"x\"").unwrap_err();
        assert!(matches!(err, ManifestError::Empty));
    }
}
