//! Attribute mapping
//!
//! [`AttributeMap`] holds unique attribute names. Inserting an existing name
//! replaces its value, so the applied attribute set never depends on
//! insertion order. Iteration is sorted by name.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Key-unique mapping from attribute name to attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
	entries: BTreeMap<Cow<'static, str>, Cow<'static, str>>,
}

impl AttributeMap {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an attribute, returning the previous value for `name`.
	pub fn insert(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Option<Cow<'static, str>> {
		self.entries.insert(name.into(), value.into())
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.insert(name, value);
		self
	}

	/// Returns the value for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(|v| v.as_ref())
	}

	/// Removes `name`, returning its value.
	pub fn remove(&mut self, name: &str) -> Option<Cow<'static, str>> {
		self.entries.remove(name)
	}

	/// Returns `true` if `name` is present.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no attributes.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in name order.
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			inner: self.entries.iter(),
		}
	}
}

/// Iterator over the entries of an [`AttributeMap`].
pub struct Iter<'a> {
	inner: btree_map::Iter<'a, Cow<'static, str>, Cow<'static, str>>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a str, &'a str);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(k, v)| (k.as_ref(), v.as_ref()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AttributeMap {
	type Item = (&'a str, &'a str);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<K, V> Extend<(K, V)> for AttributeMap
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttributeMap
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

/// Builds an [`AttributeMap`] from `name => value` pairs.
///
/// ```
/// use tagtree_dom::attrs;
///
/// let map = attrs! { "href" => "/about", "class" => "nav" };
/// assert_eq!(map.get("href"), Some("/about"));
/// assert!(attrs! {}.is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::AttributeMap::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut map = $crate::AttributeMap::new();
		$(map.insert($name, $value);)+
		map
	}};
}
