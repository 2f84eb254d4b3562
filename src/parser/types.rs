//! Shared types for manifest parsing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents the structure of a package.json file.
///
/// This struct mirrors the npm package.json specification, capturing the
/// fields needed to build a dependency graph. Unknown fields are ignored.
///
/// # Example
///
/// ```
/// use npmgraph::parser::types::PackageJson;
///
/// let json = r#"{"name": "my-app", "version": "1.0.0"}"#;
/// let pkg: PackageJson = serde_json::from_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageJson {
    /// The name of the package.
    pub name: Option<String>,

    /// The version of the package (semver format).
    pub version: Option<String>,

    /// A brief description of the package.
    pub description: Option<String>,

    /// Production dependencies required at runtime.
    pub dependencies: Option<HashMap<String, String>>,

    /// Development-only dependencies (testing, building, etc.).
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Option<HashMap<String, String>>,
}

impl PackageJson {
    /// Returns true if the package declares any runtime or dev dependencies.
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|d| !d.is_empty())
            || self
                .dev_dependencies
                .as_ref()
                .is_some_and(|d| !d.is_empty())
    }

    /// Returns the total count of declared dependencies across both sections.
    ///
    /// Counts duplicates once per section; the merged set may be smaller.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |d| d.len())
            + self.dev_dependencies.as_ref().map_or(0, |d| d.len())
    }

    /// Returns the project name, falling back to a placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed project)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_default() {
        let pkg = PackageJson::default();
        assert!(pkg.name.is_none());
        assert!(!pkg.has_dependencies());
        assert_eq!(pkg.dependency_count(), 0);
        assert_eq!(pkg.display_name(), "(unnamed project)");
    }

    #[test]
    fn test_package_json_has_dependencies() {
        let mut pkg = PackageJson::default();
        assert!(!pkg.has_dependencies());

        let mut deps = HashMap::new();
        deps.insert("react".to_string(), "^18.0.0".to_string());
        pkg.dependencies = Some(deps);

        assert!(pkg.has_dependencies());
        assert_eq!(pkg.dependency_count(), 1);
    }

    #[test]
    fn test_package_json_dev_only() {
        let mut pkg = PackageJson::default();
        let mut dev = HashMap::new();
        dev.insert("jest".to_string(), "^29.0.0".to_string());
        pkg.dev_dependencies = Some(dev);

        assert!(pkg.has_dependencies());
        assert_eq!(pkg.dependency_count(), 1);
    }

    #[test]
    fn test_display_name() {
        let pkg = PackageJson {
            name: Some("my-app".to_string()),
            ..Default::default()
        };
        assert_eq!(pkg.display_name(), "my-app");
    }
}
