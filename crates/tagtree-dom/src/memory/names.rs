//! Element and attribute name validation.
//!
//! A simplified form of the XML `Name` production, which is what
//! `Document.createElement` and `Element.setAttribute` enforce.

fn is_name_start_char(c: char) -> bool {
	c.is_ascii_alphabetic() || c == '_' || c == ':' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
	is_name_start_char(c) || c.is_ascii_digit() || c == '-' || c == '.'
}

/// Returns `true` if `name` may be used as an element or attribute name.
pub(crate) fn is_valid_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if is_name_start_char(first) => chars.all(is_name_char),
		_ => false,
	}
}
