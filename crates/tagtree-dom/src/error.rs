//! Error types for tagtree-dom

use crate::memory::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by [`MemoryDocument`](crate::MemoryDocument) primitives.
///
/// These mirror the DOM exceptions a browser raises for the same calls
/// (`InvalidCharacterError`, `HierarchyRequestError`, ...).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// Tag name is not a valid element name
	#[error("Invalid element name: {0:?}")]
	InvalidElementName(String),

	/// Attribute name is not a valid attribute name
	#[error("Invalid attribute name: {0:?}")]
	InvalidAttributeName(String),

	/// Operation requires an element but the node is a text node
	#[error("Node {0} is not an element")]
	NotAnElement(NodeId),

	/// Insertion would produce an invalid tree
	#[error("Hierarchy request error: {0}")]
	HierarchyRequest(String),

	/// Node handle does not belong to this document
	#[error("Unknown node: {0}")]
	UnknownNode(NodeId),
}

/// Failures while loading a [`DocumentConfig`](crate::DocumentConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Configuration file could not be read
	#[error("Failed to read config file {}: {source}", path.display())]
	Io {
		/// Path that was read
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// Configuration text is not valid TOML for the expected shape
	#[error("Failed to parse config: {message}")]
	Parse {
		/// Parser message
		message: String,
	},
}

/// Result type for in-memory document operations
pub type Result<T> = std::result::Result<T, DomError>;
