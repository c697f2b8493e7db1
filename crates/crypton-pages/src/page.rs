//! Page tree and HTML rendering
//!
//! Pages are built as a tree of [`Page`] nodes and rendered to a string on
//! the server. Text and attribute values are escaped during rendering.
//!
//! ```
//! use crypton_pages::page::{IntoPage, Page};
//!
//! let page = Page::element("h1")
//!     .attr("class", "headline")
//!     .child("ورود به پنل کاربری")
//!     .into_page();
//! assert_eq!(
//!     page.render_to_string(),
//!     r#"<h1 class="headline">ورود به پنل کاربری</h1>"#
//! );
//! ```

mod util;

pub(crate) use util::html_escape;
use util::BOOLEAN_ATTRS;

use std::borrow::Cow;

/// Renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several nodes with no wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// A DOM element in the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	is_void: bool,
}

impl PageElement {
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"br" | "hr" | "img" | "input" | "link" | "meta"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Add a boolean attribute. A false value leaves the element unchanged.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoPage::into_page));
		self
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Value of the first attribute called `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(attr, _)| attr == name)
			.map(|(_, value)| value.as_ref())
	}

	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl Page {
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Page::Text(content.into())
	}

	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Page::Fragment(children.into_iter().map(IntoPage::into_page).collect())
	}

	pub fn empty() -> Self {
		Page::Empty
	}

	/// Depth-first search for the first element matching `predicate`.
	pub fn find(&self, predicate: &dyn Fn(&PageElement) -> bool) -> Option<&PageElement> {
		match self {
			Page::Element(el) if predicate(el) => Some(el),
			Page::Element(el) => el.child_views().iter().find_map(|c| c.find(predicate)),
			Page::Fragment(children) => children.iter().find_map(|c| c.find(predicate)),
			Page::Text(_) | Page::Empty => None,
		}
	}

	/// Concatenated text content of this subtree, unescaped.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.collect_text(&mut output);
		output
	}

	fn collect_text(&self, output: &mut String) {
		match self {
			Page::Element(el) => el.child_views().iter().for_each(|c| c.collect_text(output)),
			Page::Text(text) => output.push_str(text),
			Page::Fragment(children) => children.iter().for_each(|c| c.collect_text(output)),
			Page::Empty => {}
		}
	}

	/// Render this tree to HTML.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && value.is_empty() {
						continue;
					}
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => output.push_str(&html_escape(text)),
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Conversion into a [`Page`] node.
pub trait IntoPage {
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(IntoPage::into_page).collect())
	}
}
