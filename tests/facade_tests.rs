//! Facade re-export tests

use rstest::rstest;
use tagtree::prelude::*;

#[rstest]
fn test_prelude_builds_and_renders() {
	let mut doc = MemoryDocument::new();
	let item = build(&mut doc, "li", &attrs! {}, "First item").unwrap();
	let list = build(&mut doc, "ul", &attrs! {}, item).unwrap();

	assert_eq!(doc.render(list).unwrap(), "<ul><li>First item</li></ul>");
}

#[rstest]
fn test_prelude_helpers() {
	let mut doc = MemoryDocument::new();
	let link = a().attr("href", "/about").text("About").build(&mut doc).unwrap();
	let text: Vec<ContentItem<NodeId>> = children!["See ", link];
	let para = p().content(text).build(&mut doc).unwrap();

	assert_eq!(
		doc.render(para).unwrap(),
		"<p>See <a href=\"/about\">About</a></p>"
	);
}

#[rstest]
fn test_dom_module_exposes_config() {
	let config = tagtree::dom::DocumentConfig::from_toml("validate_names = false").unwrap();
	let mut doc = MemoryDocument::with_config(config);
	let node = doc.create_element("odd name").unwrap();

	assert_eq!(doc.tag_name(node), Some("odd name"));
}
