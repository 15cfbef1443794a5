//! Browser host tests
//!
//! Run with `wasm-pack test --headless --firefox crates/tagtree-dom`.

#[cfg(target_arch = "wasm32")]
mod wasm_host_tests {
	use tagtree_dom::{AttributeMap, WebDocument, WebDomError, attrs, build, children};
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn outer_html(node: &web_sys::Node) -> String {
		node.dyn_ref::<web_sys::Element>()
			.map(|e| e.outer_html())
			.unwrap_or_default()
	}

	#[wasm_bindgen_test]
	fn test_build_paragraph() {
		let mut host = WebDocument::global().unwrap();
		let p = build(&mut host, "p", &AttributeMap::new(), "A simple paragraph").unwrap();
		assert_eq!(outer_html(&p), "<p>A simple paragraph</p>");
		assert!(p.parent_node().is_none());
	}

	#[wasm_bindgen_test]
	fn test_build_mixed_content() {
		let mut host = WebDocument::global().unwrap();
		let h1 = build(&mut host, "h1", &attrs! { "class" => "headline" }, "JavaScript").unwrap();
		let span = build(&mut host, "span", &attrs! {}, "especially here.").unwrap();
		let div = build(&mut host, "div", &attrs! {}, children![h1, " is awesome, ", span]).unwrap();

		assert_eq!(
			outer_html(&div),
			"<div><h1 class=\"headline\">JavaScript</h1> is awesome, <span>especially here.</span></div>"
		);
		assert_eq!(div.child_nodes().length(), 3);
	}

	#[wasm_bindgen_test]
	fn test_reused_node_moves() {
		let mut host = WebDocument::global().unwrap();
		let shared = build(&mut host, "em", &attrs! {}, "x").unwrap();
		let first = build(&mut host, "div", &attrs! {}, shared.clone()).unwrap();
		let second = build(&mut host, "div", &attrs! {}, shared).unwrap();

		assert_eq!(first.child_nodes().length(), 0);
		assert_eq!(second.child_nodes().length(), 1);
	}

	#[wasm_bindgen_test]
	fn test_invalid_tag_name_is_a_js_error() {
		let mut host = WebDocument::global().unwrap();
		let result = build(&mut host, "not valid", &attrs! {}, ());
		assert!(matches!(result, Err(WebDomError::Js(_))));
	}
}
