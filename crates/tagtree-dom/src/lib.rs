//! Tagtree DOM - declarative element tree construction
//!
//! A single operation, [`build`], turns a tag name, an [`AttributeMap`] and
//! nested [`Content`] into one element node. The work is delegated to a
//! [`DomHost`], so the same call builds a browser DOM on `wasm32` or an
//! in-memory tree everywhere else.
//!
//! ## Architecture
//!
//! - [`host`]: the capability trait every DOM implementation provides
//! - [`content`]: typed content items (text or an already-built node)
//! - [`attributes`]: key-unique attribute mapping
//! - [`builder`]: the `build` operation, fluent [`ElementBuilder`] and tag helpers
//! - [`memory`]: arena-backed in-memory document
//! - [`render`]: HTML serialization of in-memory trees
//! - [`config`]: document and rendering options (TOML loadable)
//! - `web`: browser host over `web-sys` (`wasm32` only)
//!
//! ## Example
//!
//! ```
//! use tagtree_dom::{MemoryDocument, attrs, build, children};
//!
//! let mut doc = MemoryDocument::new();
//! let h1 = build(&mut doc, "h1", &attrs! { "class" => "headline" }, "JavaScript")?;
//! let span = build(&mut doc, "span", &attrs! {}, "especially here.")?;
//! let div = build(&mut doc, "div", &attrs! {}, children![h1, " is awesome, ", span])?;
//!
//! assert_eq!(
//!     doc.render(div)?,
//!     "<div><h1 class=\"headline\">JavaScript</h1> is awesome, <span>especially here.</span></div>"
//! );
//! # Ok::<(), tagtree_dom::DomError>(())
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod builder;
pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod memory;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use attributes::AttributeMap;
pub use builder::{ElementBuilder, build, element};
pub use config::{DocumentConfig, DocumentMode, RenderOptions};
pub use content::{Content, ContentItem};
pub use error::{ConfigError, DomError};
pub use host::DomHost;
pub use memory::{MemoryDocument, NodeId, NodeKind};
pub use render::render_to_string;

#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebDomError};
