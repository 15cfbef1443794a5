//! Element tree construction and DOM hosts
//!
//! This module provides access to tagtree-dom: the [`build`] operation, the
//! [`DomHost`] abstraction and the bundled hosts.
//!
//! ## Example
//!
//! ```
//! use tagtree::dom::{MemoryDocument, build, attrs, children};
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
//! # Ok::<(), tagtree::dom::DomError>(())
//! ```

// Re-export all tagtree-dom functionality
pub use tagtree_dom::*;
