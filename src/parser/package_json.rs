//! Parser for npm package.json files.
//!
//! This module provides functionality to locate and parse package.json files
//! and to collect their dependency sections into a single merged mapping.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::PackageJson;

/// The fixed manifest filename looked up inside the project directory.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Errors that can occur during package.json parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No package.json exists at the resolved project path.
    #[error("package.json not found in project directory: {path}")]
    ManifestNotFound {
        /// The project directory that was searched.
        path: PathBuf,
    },

    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// The merged mapping of package name to version specifier.
///
/// A `BTreeMap` keeps iteration order deterministic, which in turn keeps the
/// rendered DOT output stable across runs.
pub type DependencySet = BTreeMap<String, String>;

/// Resolves the manifest path inside a project directory.
///
/// Joins `project_dir` with the fixed filename `package.json` and verifies
/// that the file exists.
///
/// # Errors
///
/// Returns [`ParseError::ManifestNotFound`] carrying the attempted project
/// directory if no manifest is present there.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use npmgraph::parser::locate_manifest;
///
/// let manifest = locate_manifest(Path::new(".")).unwrap();
/// assert!(manifest.ends_with("package.json"));
/// ```
pub fn locate_manifest(project_dir: &Path) -> ParseResult<PathBuf> {
    let manifest_path = project_dir.join(MANIFEST_FILENAME);
    if !manifest_path.is_file() {
        return Err(ParseError::ManifestNotFound {
            path: project_dir.to_path_buf(),
        });
    }
    Ok(manifest_path)
}

/// Parses a package.json file from a file path.
pub fn parse_file(path: &Path) -> ParseResult<PackageJson> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a package.json from a string.
///
/// # Example
///
/// ```
/// use npmgraph::parser::parse_str;
///
/// let json = r#"{"name": "my-app", "version": "1.0.0"}"#;
/// let pkg = parse_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// ```
pub fn parse_str(content: &str) -> ParseResult<PackageJson> {
    let pkg: PackageJson = serde_json::from_str(content)?;
    Ok(pkg)
}

/// Collects all direct dependencies of a manifest into one merged mapping.
///
/// Merges the `dependencies` section (default empty) with `devDependencies`
/// (default empty). On a key collision the devDependencies version wins,
/// since that section is merged second.
///
/// # Example
///
/// ```
/// use npmgraph::parser::{collect_dependencies, parse_str};
///
/// let json = r#"{
///     "dependencies": {"a": "^1.0.0"},
///     "devDependencies": {"b": "^2.0.0"}
/// }"#;
///
/// let pkg = parse_str(json).unwrap();
/// let deps = collect_dependencies(&pkg);
///
/// assert_eq!(deps.len(), 2);
/// assert_eq!(deps["a"], "^1.0.0");
/// assert_eq!(deps["b"], "^2.0.0");
/// ```
pub fn collect_dependencies(pkg: &PackageJson) -> DependencySet {
    let mut merged = DependencySet::new();

    if let Some(ref dependencies) = pkg.dependencies {
        for (name, version) in dependencies {
            merged.insert(name.clone(), version.clone());
        }
    }

    // Merged second: dev versions overwrite runtime versions on collision.
    if let Some(ref dev_dependencies) = pkg.dev_dependencies {
        for (name, version) in dev_dependencies {
            merged.insert(name.clone(), version.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_PACKAGE_JSON: &str = r#"{
        "name": "test-app",
        "version": "1.0.0",
        "description": "A test application",
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "lodash": "^4.17.21"
        },
        "devDependencies": {
            "typescript": "^5.0.0",
            "jest": "^29.0.0"
        }
    }"#;

    #[test]
    fn test_parse_str_valid() {
        let pkg = parse_str(SAMPLE_PACKAGE_JSON).unwrap();

        assert_eq!(pkg.name, Some("test-app".to_string()));
        assert_eq!(pkg.version, Some("1.0.0".to_string()));
        assert_eq!(pkg.description, Some("A test application".to_string()));
    }

    #[test]
    fn test_parse_str_minimal() {
        let json = r#"{"name": "minimal"}"#;
        let pkg = parse_str(json).unwrap();

        assert_eq!(pkg.name, Some("minimal".to_string()));
        assert!(pkg.dependencies.is_none());
    }

    #[test]
    fn test_parse_str_invalid_json() {
        let json = "{ invalid json }";
        let result = parse_str(json);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParseError::Json(_)));
    }

    #[test]
    fn test_parse_str_with_extra_fields() {
        // package.json often has many other fields; ensure we ignore them gracefully
        let json = r#"{
            "name": "with-extras",
            "version": "1.0.0",
            "scripts": {"build": "tsc"},
            "author": "Test Author",
            "license": "MIT",
            "repository": {"type": "git", "url": "https://example.com"},
            "dependencies": {"express": "^4.18.0"}
        }"#;

        let pkg = parse_str(json).unwrap();
        assert_eq!(pkg.name, Some("with-extras".to_string()));
        assert_eq!(pkg.dependencies.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_collect_dependencies_merges_sections() {
        let json = r#"{
            "dependencies": {"a": "^1.0.0"},
            "devDependencies": {"b": "^2.0.0"}
        }"#;
        let pkg = parse_str(json).unwrap();
        let deps = collect_dependencies(&pkg);

        let expected: DependencySet = [
            ("a".to_string(), "^1.0.0".to_string()),
            ("b".to_string(), "^2.0.0".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(deps, expected);
    }

    #[test]
    fn test_collect_dependencies_dev_wins_on_collision() {
        let json = r#"{
            "dependencies": {"shared": "^1.0.0"},
            "devDependencies": {"shared": "^2.0.0"}
        }"#;
        let pkg = parse_str(json).unwrap();
        let deps = collect_dependencies(&pkg);

        assert_eq!(deps.len(), 1);
        assert_eq!(deps["shared"], "^2.0.0");
    }

    #[test]
    fn test_collect_dependencies_missing_sections() {
        let pkg = parse_str(r#"{"name": "empty-deps"}"#).unwrap();
        let deps = collect_dependencies(&pkg);

        assert!(deps.is_empty());
    }

    #[test]
    fn test_collect_dependencies_idempotent() {
        let pkg = parse_str(SAMPLE_PACKAGE_JSON).unwrap();
        let first = collect_dependencies(&pkg);
        let second = collect_dependencies(&pkg);

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_locate_manifest_found() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        let mut file = std::fs::File::create(&manifest_path).unwrap();
        file.write_all(SAMPLE_PACKAGE_JSON.as_bytes()).unwrap();

        let located = locate_manifest(dir.path()).unwrap();
        assert_eq!(located, manifest_path);
    }

    #[test]
    fn test_locate_manifest_missing_names_path() {
        let dir = tempfile::tempdir().unwrap();

        let err = locate_manifest(dir.path()).unwrap_err();
        assert!(matches!(err, ParseError::ManifestNotFound { .. }));
        assert!(err.to_string().contains(dir.path().to_str().unwrap()));
    }

    #[test]
    fn test_roundtrip_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(&manifest_path, SAMPLE_PACKAGE_JSON).unwrap();

        let located = locate_manifest(dir.path()).unwrap();
        let pkg = parse_file(&located).unwrap();
        let deps = collect_dependencies(&pkg);

        assert_eq!(deps.len(), 5);
        assert_eq!(deps["react"], "^18.2.0");
        assert_eq!(deps["typescript"], "^5.0.0");
    }
}
