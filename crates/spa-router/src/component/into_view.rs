//! IntoView trait and View enum for component rendering.

use crate::dom::{Event, EventType};
use std::borrow::Cow;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::dom::EventHandle;
#[cfg(target_arch = "wasm32")]
use crate::error::MountError;

/// Type alias for event handler functions.
pub type ViewEventHandler = Rc<dyn Fn(&Event) + 'static>;

/// A unified representation of renderable content.
///
/// View is the core abstraction for all UI elements in the component system.
/// It can represent DOM elements, text nodes, fragments, or nothing at all.
#[derive(Debug)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents a DOM element in the view tree.
pub struct ElementView {
	/// The tag name (e.g., "div", "a").
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Event handlers attached to this element.
	event_handlers: Vec<(EventType, ViewEventHandler)>,
}

impl std::fmt::Debug for ElementView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Adds an event handler.
	pub fn on(mut self, event_type: EventType, handler: ViewEventHandler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the first attribute named `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, ViewEventHandler)] {
		&self.event_handlers
	}

	/// Invokes every handler registered for `event_type` with `event`.
	///
	/// Returns the number of handlers that ran. This is how native code and
	/// tests simulate user interaction with an unmounted view.
	pub fn dispatch(&self, event_type: EventType, event: &Event) -> usize {
		let handlers: Vec<ViewEventHandler> = self
			.event_handlers
			.iter()
			.filter(|(t, _)| *t == event_type)
			.map(|(_, h)| Rc::clone(h))
			.collect();

		for handler in &handlers {
			handler(event);
		}
		handlers.len()
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
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
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Returns the concatenated text of all text nodes, unescaped.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.collect_text(&mut output);
		output
	}

	fn collect_text(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				for child in el.child_views() {
					child.collect_text(output);
				}
			}
			View::Text(text) => output.push_str(text),
			View::Fragment(children) => {
				for child in children {
					child.collect_text(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Finds the first element, depth-first, for which `predicate` holds.
	pub fn find_element<P>(&self, predicate: P) -> Option<&ElementView>
	where
		P: Fn(&ElementView) -> bool,
	{
		self.find_element_inner(&predicate)
	}

	fn find_element_inner<P>(&self, predicate: &P) -> Option<&ElementView>
	where
		P: Fn(&ElementView) -> bool,
	{
		match self {
			View::Element(el) => {
				if predicate(el) {
					return Some(el);
				}
				el.child_views()
					.iter()
					.find_map(|child| child.find_element_inner(predicate))
			}
			View::Fragment(children) => children
				.iter()
				.find_map(|child| child.find_element_inner(predicate)),
			View::Text(_) | View::Empty => None,
		}
	}

	/// Returns every element with the given tag, in document order.
	pub fn elements_by_tag(&self, tag: &str) -> Vec<&ElementView> {
		let mut found = Vec::new();
		self.collect_by_tag(tag, &mut found);
		found
	}

	fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a ElementView>) {
		match self {
			View::Element(el) => {
				if el.tag_name() == tag {
					found.push(el);
				}
				for child in el.child_views() {
					child.collect_by_tag(tag, found);
				}
			}
			View::Fragment(children) => {
				for child in children {
					child.collect_by_tag(tag, found);
				}
			}
			View::Text(_) | View::Empty => {}
		}
	}

	/// Mounts the view under `parent` (client-side only).
	///
	/// Every event handler in the tree is attached as a DOM listener. The
	/// returned handles own those listeners; dropping them detaches the
	/// handlers again.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<Vec<EventHandle>, MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;

		let mut handles = Vec::new();
		self.mount_inner(&document, parent, &mut handles)?;
		Ok(handles)
	}

	#[cfg(target_arch = "wasm32")]
	fn mount_inner(
		self,
		document: &web_sys::Document,
		parent: &web_sys::Node,
		handles: &mut Vec<EventHandle>,
	) -> Result<(), MountError> {
		match self {
			View::Element(el) => {
				let element = document
					.create_element(&el.tag)
					.map_err(|_| MountError::CreateElementFailed)?;

				for (name, value) in &el.attrs {
					element
						.set_attribute(name, value)
						.map_err(|_| MountError::SetAttributeFailed)?;
				}

				for (event_type, handler) in el.event_handlers {
					let handle =
						EventHandle::listen(&element, event_type, move |event| handler(&event))
							.map_err(|_| MountError::AddListenerFailed)?;
					handles.push(handle);
				}

				for child in el.children {
					child.mount_inner(document, &element, handles)?;
				}

				parent
					.append_child(&element)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Text(text) => {
				let text_node = document.create_text_node(&text);
				parent
					.append_child(&text_node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Fragment(children) => {
				for child in children {
					child.mount_inner(document, parent, handles)?;
				}
			}
			View::Empty => {}
		}

		Ok(())
	}
}

/// Escapes text for safe inclusion in HTML content and attribute values.
fn html_escape(s: &str) -> Cow<'_, str> {
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

/// Trait for types that can be converted into a View.
///
/// This is the primary abstraction for renderable content.
/// Implementing this trait allows any type to be used in the view tree.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

// Core implementations

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl IntoView for Cow<'static, str> {
	fn into_view(self) -> View {
		View::Text(self)
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}
