//! Rendering the dependency graph to an image.
//!
//! This module emits Graphviz DOT for a [`DependencyGraph`](crate::graph::DependencyGraph),
//! compiles it to a raster image by invoking the external `dot` program, and
//! can open the result in the platform's default image viewer.

mod dot;
mod viewer;

pub use dot::DotRenderer;
pub use viewer::open_viewer;

use std::path::{Path, PathBuf};
use std::process::Command;

/// Errors that can occur while rendering the graph image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to write the DOT file or the rendered image.
    #[error("Failed to write graph output: {0}")]
    Io(#[from] std::io::Error),

    /// The Graphviz `dot` binary could not be launched.
    #[error("Could not run Graphviz 'dot' (is Graphviz installed?): {0}")]
    GraphvizMissing(std::io::Error),

    /// Graphviz ran but exited with an error.
    #[error("Graphviz failed: {0}")]
    GraphvizFailed(String),
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Compiles a DOT file to an image with the external `dot` program.
///
/// Writes `<output_stem>.<format>` in the working directory and returns the
/// path to the written image.
///
/// # Arguments
///
/// * `dot_path` - Path to the DOT source file
/// * `output_stem` - Output filename without extension
/// * `format` - Graphviz output format (e.g., "png", "svg")
///
/// # Errors
///
/// Returns [`RenderError::GraphvizMissing`] when `dot` cannot be spawned and
/// [`RenderError::GraphvizFailed`] with captured stderr on non-zero exit.
pub fn render_image(dot_path: &Path, output_stem: &str, format: &str) -> RenderResult<PathBuf> {
    let image_path = PathBuf::from(format!("{}.{}", output_stem, format));

    let output = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg(dot_path)
        .arg("-o")
        .arg(&image_path)
        .output()
        .map_err(RenderError::GraphvizMissing)?;

    if !output.status.success() {
        return Err(RenderError::GraphvizFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(image_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        let err = RenderError::GraphvizFailed("syntax error in line 3".to_string());
        assert!(err.to_string().contains("Graphviz failed"));
        assert!(err.to_string().contains("syntax error"));

        let missing = RenderError::GraphvizMissing(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        assert!(missing.to_string().contains("is Graphviz installed?"));
    }
}
