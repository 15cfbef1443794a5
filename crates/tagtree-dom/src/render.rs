//! HTML serialization of in-memory trees.

use crate::config::{DocumentMode, RenderOptions};
use crate::error::{DomError, Result};
use crate::memory::names::is_valid_name;
use crate::memory::{MemoryDocument, NodeId};
use std::borrow::Cow;

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// HTML boolean attributes.
///
/// The presence of the attribute alone makes it active, so
/// `<button disabled="false">` is still disabled.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
];

/// Returns `true` if `tag` is a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Serializes the subtree rooted at `id` to an HTML string.
///
/// Boolean attributes are only collapsed for HTML documents; XML documents
/// always get `name="value"` pairs.
///
/// # Errors
///
/// Returns [`DomError::UnknownNode`] if `id` does not belong to `doc`, and
/// [`DomError::InvalidElementName`] or [`DomError::InvalidAttributeName`] for
/// a name that cannot be written as markup. Such names only exist when the
/// document was created with name validation disabled.
pub fn render_to_string(doc: &MemoryDocument, id: NodeId, options: &RenderOptions) -> Result<String> {
	if !doc.contains(id) {
		return Err(DomError::UnknownNode(id));
	}
	let collapse_boolean_attrs =
		options.collapse_boolean_attrs && doc.config().mode == DocumentMode::Html;

	let mut output = String::new();
	let mut stack = vec![Step::Open(id)];
	while let Some(step) = stack.pop() {
		let id = match step {
			Step::Open(id) => id,
			Step::Close(tag) => {
				output.push_str("</");
				output.push_str(tag);
				output.push('>');
				continue;
			}
		};

		if let Some(text) = doc.text(id) {
			output.push_str(&html_escape(text));
			continue;
		}
		let Some(tag) = doc.tag_name(id) else {
			continue;
		};
		if !is_valid_name(tag) {
			return Err(DomError::InvalidElementName(tag.to_owned()));
		}

		output.push('<');
		output.push_str(tag);
		for (name, value) in doc.attributes(id) {
			if !is_valid_name(name) {
				return Err(DomError::InvalidAttributeName(name.to_owned()));
			}
			output.push(' ');
			output.push_str(name);
			if collapse_boolean_attrs && BOOLEAN_ATTRS.contains(&name) {
				continue;
			}
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}

		let children = doc.children(id);
		if is_void_element(tag) && children.is_empty() {
			output.push_str(if options.self_closing_void { " />" } else { ">" });
			continue;
		}

		output.push('>');
		stack.push(Step::Close(tag));
		stack.extend(children.iter().rev().map(|child| Step::Open(*child)));
	}
	Ok(output)
}

enum Step<'a> {
	Open(NodeId),
	Close(&'a str),
}

/// Escapes HTML special characters.
///
/// Returns a borrowed reference if no escaping is needed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DomHost;
	use crate::config::DocumentConfig;
	use rstest::{fixture, rstest};

	#[fixture]
	fn doc() -> MemoryDocument {
		MemoryDocument::new()
	}

	#[rstest]
	fn test_html_escape() {
		assert_eq!(html_escape("Hello"), Cow::Borrowed("Hello"));
		assert_eq!(
			html_escape("<script>alert('xss')</script>"),
			Cow::<str>::Owned("&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;".to_string())
		);
		assert_eq!(
			html_escape("a & \"b\""),
			Cow::<str>::Owned("a &amp; &quot;b&quot;".to_string())
		);
	}

	#[rstest]
	fn test_render_empty_element(mut doc: MemoryDocument) {
		let div = doc.create_element("div").unwrap();
		assert_eq!(doc.render(div).unwrap(), "<div></div>");
	}

	#[rstest]
	fn test_render_text_node(mut doc: MemoryDocument) {
		let text = doc.create_text_node("1 < 2");
		assert_eq!(doc.render(text).unwrap(), "1 &lt; 2");
	}

	#[rstest]
	fn test_render_escapes_attribute_values(mut doc: MemoryDocument) {
		let a = doc.create_element("a").unwrap();
		doc.set_attribute(&a, "title", "\"quoted\" & <b>").unwrap();
		assert_eq!(
			doc.render(a).unwrap(),
			"<a title=\"&quot;quoted&quot; &amp; &lt;b&gt;\"></a>"
		);
	}

	#[rstest]
	#[case(RenderOptions::new(), "<br />")]
	#[case(RenderOptions::new().self_closing_void(false), "<br>")]
	fn test_render_void_element(
		mut doc: MemoryDocument,
		#[case] options: RenderOptions,
		#[case] expected: &str,
	) {
		let br = doc.create_element("br").unwrap();
		assert_eq!(render_to_string(&doc, br, &options).unwrap(), expected);
	}

	#[rstest]
	fn test_void_element_with_children_gets_closing_tag(mut doc: MemoryDocument) {
		let img = doc.create_element("img").unwrap();
		let text = doc.create_text_node("alt");
		doc.append_child(&img, text).unwrap();
		assert_eq!(doc.render(img).unwrap(), "<img>alt</img>");
	}

	#[rstest]
	#[case(true, "<input disabled type=\"checkbox\" />")]
	#[case(false, "<input disabled=\"\" type=\"checkbox\" />")]
	fn test_render_boolean_attrs(
		mut doc: MemoryDocument,
		#[case] collapse: bool,
		#[case] expected: &str,
	) {
		let input = doc.create_element("input").unwrap();
		doc.set_attribute(&input, "type", "checkbox").unwrap();
		doc.set_attribute(&input, "disabled", "").unwrap();
		let options = RenderOptions::new().collapse_boolean_attrs(collapse);
		assert_eq!(render_to_string(&doc, input, &options).unwrap(), expected);
	}

	#[rstest]
	#[case("false")]
	#[case("0")]
	#[case("disabled")]
	fn test_present_boolean_attr_collapses_whatever_its_value(
		mut doc: MemoryDocument,
		#[case] value: &str,
	) {
		let button = doc.create_element("button").unwrap();
		doc.set_attribute(&button, "disabled", value).unwrap();
		assert_eq!(doc.render(button).unwrap(), "<button disabled></button>");
	}

	#[rstest]
	fn test_xml_document_never_collapses_boolean_attrs() {
		let config = DocumentConfig::new().with_mode(DocumentMode::Xml);
		let mut doc = MemoryDocument::with_config(config);
		let option = doc.create_element("option").unwrap();
		doc.set_attribute(&option, "selected", "").unwrap();
		assert_eq!(doc.render(option).unwrap(), "<option selected=\"\"></option>");
	}

	#[rstest]
	fn test_render_unknown_node(doc: MemoryDocument) {
		let mut other = MemoryDocument::new();
		let foreign = other.create_element("div").unwrap();
		assert_eq!(
			render_to_string(&doc, foreign, &RenderOptions::default()),
			Err(DomError::UnknownNode(foreign))
		);
	}

	#[rstest]
	#[case("odd name")]
	#[case("x><script>alert(1)</script")]
	fn test_render_rejects_unserializable_tag_name(#[case] tag: &str) {
		let config = DocumentConfig::new().with_validate_names(false);
		let mut doc = MemoryDocument::with_config(config);
		let node = doc.create_element(tag).unwrap();
		assert_eq!(
			doc.render(node),
			Err(DomError::InvalidElementName(tag.to_owned()))
		);
	}

	#[rstest]
	#[case("a><script>x</script")]
	#[case("on click")]
	#[case("x=\"y\"")]
	fn test_render_rejects_unserializable_attribute_name(#[case] name: &str) {
		let config = DocumentConfig::new().with_validate_names(false);
		let mut doc = MemoryDocument::with_config(config);
		let outer = doc.create_element("div").unwrap();
		let inner = doc.create_element("span").unwrap();
		doc.set_attribute(&inner, name, "v").unwrap();
		doc.append_child(&outer, inner).unwrap();

		assert_eq!(
			doc.render(outer),
			Err(DomError::InvalidAttributeName(name.to_owned()))
		);
	}

	#[rstest]
	fn test_render_deep_nesting(mut doc: MemoryDocument) {
		let depth = 10_000;
		let mut node = doc.create_text_node("x");
		for _ in 0..depth {
			let parent = doc.create_element("b").unwrap();
			doc.append_child(&parent, node).unwrap();
			node = parent;
		}

		let html = doc.render(node).unwrap();
		let expected = format!("{}x{}", "<b>".repeat(depth), "</b>".repeat(depth));
		assert_eq!(html, expected);
	}

	#[rstest]
	fn test_render_sibling_order(mut doc: MemoryDocument) {
		let ul = doc.create_element("ul").unwrap();
		for label in ["one", "two"] {
			let li = doc.create_element("li").unwrap();
			let text = doc.create_text_node(label);
			doc.append_child(&li, text).unwrap();
			doc.append_child(&ul, li).unwrap();
		}
		let br = doc.create_element("br").unwrap();
		doc.append_child(&ul, br).unwrap();
		assert_eq!(
			doc.render(ul).unwrap(),
			"<ul><li>one</li><li>two</li><br /></ul>"
		);
	}

	#[rstest]
	#[case("area", true)]
	#[case("br", true)]
	#[case("wbr", true)]
	#[case("div", false)]
	#[case("span", false)]
	fn test_is_void_element(#[case] tag: &str, #[case] expected: bool) {
		assert_eq!(is_void_element(tag), expected);
	}
}
