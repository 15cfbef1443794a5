//! Document and rendering configuration.
//!
//! Options can be built fluently or loaded from TOML:
//!
//! ```toml
//! mode = "xml"
//! validate_names = false
//!
//! [render]
//! self_closing_void = false
//! collapse_boolean_attrs = true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a [`MemoryDocument`](crate::MemoryDocument) treats names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMode {
	/// ASCII-lowercase tag and attribute names, as an HTML document does.
	#[default]
	Html,
	/// Keep names exactly as given.
	Xml,
}

/// HTML serialization options.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Write void elements as `<br />` instead of `<br>`.
	pub self_closing_void: bool,
	/// Write boolean attributes as a bare name (`disabled`), whatever their
	/// value. Only applies to HTML documents.
	pub collapse_boolean_attrs: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			self_closing_void: true,
			collapse_boolean_attrs: true,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether void elements are self-closed.
	pub fn self_closing_void(mut self, enable: bool) -> Self {
		self.self_closing_void = enable;
		self
	}

	/// Sets whether boolean attributes are collapsed to their name.
	pub fn collapse_boolean_attrs(mut self, enable: bool) -> Self {
		self.collapse_boolean_attrs = enable;
		self
	}
}

/// Configuration for a [`MemoryDocument`](crate::MemoryDocument).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
	/// Name handling mode
	pub mode: DocumentMode,
	/// Reject element and attribute names that are not valid XML names
	pub validate_names: bool,
	/// Options used by [`MemoryDocument::render`](crate::MemoryDocument::render)
	pub render: RenderOptions,
}

impl Default for DocumentConfig {
	fn default() -> Self {
		Self {
			mode: DocumentMode::Html,
			validate_names: true,
			render: RenderOptions::default(),
		}
	}
}

impl DocumentConfig {
	/// Creates new default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document mode.
	pub fn with_mode(mut self, mode: DocumentMode) -> Self {
		self.mode = mode;
		self
	}

	/// Enables or disables name validation.
	pub fn with_validate_names(mut self, enable: bool) -> Self {
		self.validate_names = enable;
		self
	}

	/// Sets the rendering options.
	pub fn with_render(mut self, render: RenderOptions) -> Self {
		self.render = render;
		self
	}

	/// Load configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		Self::from_toml(&content)
	}

	/// Parse configuration from TOML string.
	pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
		toml::from_str(content).map_err(|e| ConfigError::Parse {
			message: e.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let config = DocumentConfig::default();
		assert_eq!(config.mode, DocumentMode::Html);
		assert!(config.validate_names);
		assert!(config.render.self_closing_void);
		assert!(config.render.collapse_boolean_attrs);
	}

	#[rstest]
	fn test_empty_toml_yields_defaults() {
		let config = DocumentConfig::from_toml("").unwrap();
		assert_eq!(config, DocumentConfig::default());
	}

	#[rstest]
	fn test_toml_overrides() {
		let config = DocumentConfig::from_toml(
			r#"
			mode = "xml"
			validate_names = false

			[render]
			self_closing_void = false
			"#,
		)
		.unwrap();

		assert_eq!(config.mode, DocumentMode::Xml);
		assert!(!config.validate_names);
		assert!(!config.render.self_closing_void);
		// Unspecified nested fields keep their defaults
		assert!(config.render.collapse_boolean_attrs);
	}

	#[rstest]
	#[case("mode = \"sgml\"")]
	#[case("validate_names = \"yes\"")]
	#[case("[render")]
	fn test_invalid_toml(#[case] input: &str) {
		let err = DocumentConfig::from_toml(input).unwrap_err();
		assert!(matches!(err, ConfigError::Parse { .. }));
	}

	#[rstest]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "mode = \"xml\"").unwrap();

		let config = DocumentConfig::from_file(file.path()).unwrap();
		assert_eq!(config.mode, DocumentMode::Xml);
	}

	#[rstest]
	fn test_from_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.toml");

		let err = DocumentConfig::from_file(&path).unwrap_err();
		match err {
			ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
			other => panic!("expected Io error, got {other:?}"),
		}
	}

	#[rstest]
	fn test_fluent_setters() {
		let config = DocumentConfig::new()
			.with_mode(DocumentMode::Xml)
			.with_validate_names(false)
			.with_render(RenderOptions::new().self_closing_void(false));
		assert_eq!(config.mode, DocumentMode::Xml);
		assert!(!config.validate_names);
		assert!(!config.render.self_closing_void);
	}
}
