//! Parser module for npmgraph.
//!
//! Provides the package.json manifest model and the operations to locate,
//! load, and collect dependencies from a project manifest.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use npmgraph::parser::{collect_dependencies, locate_manifest, parse_file};
//!
//! let manifest_path = locate_manifest(Path::new(".")).unwrap();
//! let pkg = parse_file(&manifest_path).unwrap();
//! let deps = collect_dependencies(&pkg);
//!
//! println!("Found {} direct dependencies", deps.len());
//! ```

pub mod package_json;
pub mod types;

// Re-export commonly used items for convenience
pub use package_json::{
    collect_dependencies, locate_manifest, parse_file, parse_str, DependencySet, ParseError,
    ParseResult, MANIFEST_FILENAME,
};

pub use types::PackageJson;
