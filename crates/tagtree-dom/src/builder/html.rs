//! Helper functions for common HTML elements
//!
//! Each helper returns an [`ElementBuilder`] for its tag, so
//! `div().class("x")` is shorthand for `element("div").class("x")`.

use super::ElementBuilder;

/// Macro for defining HTML element builder functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name<N>() -> ElementBuilder<N> {
			ElementBuilder::new($tag)
		}
	};
}

// ============================================================================
// Document structure
// ============================================================================

define_element!(
	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```
	/// use tagtree_dom::MemoryDocument;
	/// use tagtree_dom::builder::html::{div, p};
	///
	/// let mut doc = MemoryDocument::new();
	/// let content = p().text("Content").build(&mut doc)?;
	/// let container = div().class("container").child(content).build(&mut doc)?;
	/// assert_eq!(doc.render(container)?, "<div class=\"container\"><p>Content</p></div>");
	/// # Ok::<(), tagtree_dom::DomError>(())
	/// ```
	div, "div"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<section>` element
	section, "section"
);

define_element!(
	/// Create a `<header>` element
	header, "header"
);

define_element!(
	/// Create a `<footer>` element
	footer, "footer"
);

define_element!(
	/// Create a `<nav>` element
	nav, "nav"
);

define_element!(
	/// Create a `<main>` element
	main, "main"
);

// ============================================================================
// Text content
// ============================================================================

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create a `<h1>` element (heading level 1)
	h1, "h1"
);

define_element!(
	/// Create a `<h2>` element (heading level 2)
	h2, "h2"
);

define_element!(
	/// Create a `<h3>` element (heading level 3)
	h3, "h3"
);

define_element!(
	/// Create an `<a>` element (hyperlink)
	a, "a"
);

define_element!(
	/// Create a `<strong>` element
	strong, "strong"
);

define_element!(
	/// Create an `<em>` element
	em, "em"
);

define_element!(
	/// Create a `<pre>` element
	pre, "pre"
);

define_element!(
	/// Create a `<code>` element
	code, "code"
);

// ============================================================================
// Lists
// ============================================================================

define_element!(
	/// Create a `<ul>` element (unordered list)
	ul, "ul"
);

define_element!(
	/// Create an `<ol>` element (ordered list)
	ol, "ol"
);

define_element!(
	/// Create an `<li>` element (list item)
	li, "li"
);

// ============================================================================
// Forms
// ============================================================================

define_element!(
	/// Create a `<form>` element
	form, "form"
);

define_element!(
	/// Create a `<button>` element
	button, "button"
);

define_element!(
	/// Create an `<input>` element
	///
	/// Void element: it renders without a closing tag.
	input, "input"
);

define_element!(
	/// Create a `<label>` element
	label, "label"
);

define_element!(
	/// Create a `<select>` element (dropdown)
	select, "select"
);

define_element!(
	/// Create an `<option>` element (for use with `<select>`)
	option, "option"
);

define_element!(
	/// Create a `<textarea>` element
	textarea, "textarea"
);

// ============================================================================
// Embedded and void elements
// ============================================================================

define_element!(
	/// Create an `<img>` element
	img, "img"
);

define_element!(
	/// Create a `<br>` element (line break)
	br, "br"
);

define_element!(
	/// Create an `<hr>` element (thematic break)
	hr, "hr"
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::memory::MemoryDocument;
	use rstest::rstest;

	#[rstest]
	#[case(div::<()>(), "div")]
	#[case(span::<()>(), "span")]
	#[case(p::<()>(), "p")]
	#[case(h1::<()>(), "h1")]
	#[case(a::<()>(), "a")]
	#[case(ul::<()>(), "ul")]
	#[case(li::<()>(), "li")]
	#[case(input::<()>(), "input")]
	#[case(br::<()>(), "br")]
	fn test_helper_tag_names(#[case] builder: ElementBuilder<()>, #[case] tag: &str) {
		assert_eq!(builder.tag_name(), tag);
	}

	#[rstest]
	fn test_form_fragment() {
		let mut doc = MemoryDocument::new();
		let field = input()
			.attr("type", "text")
			.attr("name", "q")
			.build(&mut doc)
			.unwrap();
		let submit = button()
			.attr("type", "submit")
			.text("Search")
			.build(&mut doc)
			.unwrap();
		let search = form()
			.attr("action", "/search")
			.child(field)
			.child(submit)
			.build(&mut doc)
			.unwrap();

		assert_eq!(
			doc.render(search).unwrap(),
			"<form action=\"/search\"><input name=\"q\" type=\"text\" /><button type=\"submit\">Search</button></form>"
		);
	}
}
