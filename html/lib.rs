/*!
A small HTML node tree used to render the board on the server. Components are written with the [`component`] attribute and [`html`] macro, and a tree is turned into markup with [`Node::render_to_string`].

```
use hboard_html::{component, html};

#[component]
fn Greeting(name: String) {
	html! {
		<div class="greeting">{format!("Hello & welcome, {}", name)}</div>
	}
}

let html = html! { <Greeting name="Ada" /> }.render_to_string();
assert_eq!(html, r#"<div class="greeting">Hello &amp; welcome, Ada</div>"#);
```
*/

use derive_more::From;
use itertools::Itertools;
use std::borrow::Cow;
use std::fmt::Write;

extern crate self as hboard_html;

pub use hboard_html_macro::{component, html};

pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

/// Text written without escaping. Only use this for markup the board generates itself, such as inline scripts and stylesheets.
pub struct RawTextNode(pub Cow<'static, str>);

pub struct EscapedTextNode(pub Cow<'static, str>);

pub struct FragmentNode {
	pub children: Vec<Node>,
}

pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, Debug, PartialEq, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

pub enum ComponentNode {
	Unrendered {
		component: Option<Box<dyn Component>>,
		children: Option<Vec<Node>>,
	},
	Rendered(Box<Node>),
}

pub trait Component {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

impl Node {
	pub fn render_to_string(mut self) -> String {
		self.render();
		self.to_string()
	}

	fn render(&mut self) -> &mut Node {
		match self {
			Node::Fragment(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Host(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Component(node) => {
				if let ComponentNode::Unrendered {
					component,
					children,
				} = node
				{
					if let Some(component) = component.take() {
						let children = children.take().unwrap_or_default();
						let mut rendered = component.render(children);
						rendered.render();
						*node = ComponentNode::Rendered(Box::new(rendered));
					}
				}
			}
			Node::Vec(node) => {
				for child in node.iter_mut() {
					child.render();
				}
			}
			Node::Option(node) => {
				if let Some(node) = node {
					node.render();
				}
			}
			Node::RawText(_) | Node::EscapedText(_) => {}
		};
		self
	}
}

/// Writing a tree whose components have not been rendered is an error. Use [`Node::render_to_string`].
impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => write!(f, "{}", node),
			Node::EscapedText(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Host(node) => write!(f, "{}", node),
			Node::Component(node) => write!(f, "{}", node),
			Node::Option(node) => {
				if let Some(node) = node {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
			Node::Vec(node) => {
				for node in node {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						write_escaped(f, value)?;
						write!(f, r#"""#)?;
					}
				}
			}
		}
		if self.self_closing {
			write!(f, " /")?;
		}
		write!(f, ">")?;
		if !self.self_closing {
			for child in self.children.iter() {
				write!(f, "{}", child)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentNode::Rendered(rendered) => write!(f, "{}", rendered),
			ComponentNode::Unrendered { .. } => Err(std::fmt::Error),
		}
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

/// Empty styles are dropped rather than written as `style=""`.
impl From<Style> for AttributeValue {
	fn from(style: Style) -> AttributeValue {
		if style.is_empty() {
			AttributeValue::String(None)
		} else {
			AttributeValue::String(Some(style.to_string().into()))
		}
	}
}

impl From<RawTextNode> for Node {
	fn from(value: RawTextNode) -> Node {
		Node::RawText(value)
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

impl From<Vec<Node>> for Node {
	fn from(value: Vec<Node>) -> Node {
		Node::Vec(value)
	}
}

/// An ordered list of css declarations. Declarations with no value are skipped when written.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Style {
	declarations: Vec<(&'static str, String)>,
}

impl Style {
	pub fn insert(&mut self, property: &'static str, value: impl StyleValue) {
		if let Some(value) = value.into_style_value() {
			self.declarations.push((property, value));
		}
	}

	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}
}

impl std::fmt::Display for Style {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let declarations = self
			.declarations
			.iter()
			.map(|(property, value)| format!("{}: {}", property, value))
			.join("; ");
		write!(f, "{}", declarations)
	}
}

pub trait StyleValue {
	fn into_style_value(self) -> Option<String>;
}

impl StyleValue for String {
	fn into_style_value(self) -> Option<String> {
		Some(self)
	}
}

impl StyleValue for &str {
	fn into_style_value(self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl<T> StyleValue for Option<T>
where
	T: StyleValue,
{
	fn into_style_value(self) -> Option<String> {
		self.and_then(StyleValue::into_style_value)
	}
}

/// A piece of a class list. `None` pieces are skipped.
pub trait ClassName {
	fn into_class_name(self) -> Option<String>;
}

impl ClassName for String {
	fn into_class_name(self) -> Option<String> {
		Some(self)
	}
}

impl ClassName for &str {
	fn into_class_name(self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl<T> ClassName for Option<T>
where
	T: ClassName,
{
	fn into_class_name(self) -> Option<String> {
		self.and_then(ClassName::into_class_name)
	}
}

#[macro_export]
macro_rules! style {
	($($property:expr => $value:expr),* $(,)?) => {{
		#[allow(unused_mut)]
		let mut style = $crate::Style::default();
		$(style.insert($property, $value);)*
		style
	}};
}

#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let classes: Vec<String> = vec![$($crate::ClassName::into_class_name($class)),*]
			.into_iter()
			.flatten()
			.collect();
		classes.join(" ")
	}};
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		$crate::RawTextNode($t.into())
	};
}

#[cfg(test)]
mod test {
	use super::*;

	#[component]
	fn Test() {
		html! {
			<div>{"Hello World"}</div>
		}
	}

	#[component]
	fn Wrapper(class: String) {
		html! {
			<section class={class}>{children}</section>
		}
	}

	#[test]
	fn test_component() {
		let html = html! { <Test /> }.render_to_string();
		assert_eq!(html, "<div>Hello World</div>");
	}

	#[test]
	fn test_nested_components_receive_children() {
		let html = html! {
			<Wrapper class="outer">
				<Wrapper class="inner">
					<Test />
				</Wrapper>
				{"a < b"}
				<br />
			</Wrapper>
		}
		.render_to_string();
		insta::assert_snapshot!(
			html,
			@r#"<section class="outer"><section class="inner"><div>Hello World</div></section>a &lt; b<br /></section>"#
		);
	}

	#[test]
	fn test_attributes() {
		let title: Option<String> = None;
		let html = html! {
			<div data-options={r#"{"a":1}"#} hidden={false} open={true} title={title}></div>
		}
		.render_to_string();
		assert_eq!(html, r#"<div data-options="{&quot;a&quot;:1}" open></div>"#);
	}

	#[test]
	fn test_style() {
		let width: Option<String> = None;
		let style = style! {
			"width" => "50%",
			"height" => width,
			"background-color" => "rgb(0, 183, 182)".to_owned(),
		};
		assert_eq!(style.to_string(), "width: 50%; background-color: rgb(0, 183, 182)");
		let html = html! { <div style={Style::default()}></div> }.render_to_string();
		assert_eq!(html, "<div></div>");
	}

	#[test]
	fn test_classes() {
		let expand: Option<&str> = None;
		assert_eq!(classes!("table-cell", expand, Some("bold")), "table-cell bold");
	}

	#[test]
	fn test_raw_and_optional_children() {
		let missing: Option<String> = None;
		let html = html! {
			<script>{raw!("a && b")}{missing}</script>
		}
		.render_to_string();
		assert_eq!(html, "<script>a && b</script>");
	}

	#[test]
	fn test_fragment() {
		let items = vec!["a", "b"]
			.into_iter()
			.map(|item| html! { <li>{item}</li> })
			.collect::<Vec<_>>();
		let html = html! { <><ul>{items}</ul><p>{"done"}</p></> }.render_to_string();
		assert_eq!(html, "<ul><li>a</li><li>b</li></ul><p>done</p>");
	}
}
