//! A minimal owned HTML element tree.
//!
//! Block processors build their output by appending children to a parent
//! [`Element`], the same way an `ElementTree` is grown with `SubElement`. Once a
//! document has been fully processed the tree is serialized with
//! [`Element::to_html`].
//!
//! ## Examples
//!
//! ```
//! use compat_table::html::Element;
//!
//! let mut root = Element::new("div").with_class("compat-block");
//! root.sub_element("span").push_text("Yes & no");
//! root.sub_element("img").set_attr("src", "a.svg");
//!
//! assert_eq!(
//!     root.to_html(),
//!     r#"<div class="compat-block"><span>Yes &amp; no</span><img src="a.svg"></div>"#
//! );
//! ```

/// Elements that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
    /// Pre-rendered markup, written verbatim.
    Raw(String),
}

/// An HTML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of setting the `class` attribute.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets an attribute, replacing any previous value for the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true when the whitespace-separated `class` list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, skipping text and raw nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Appends a new child element and returns a mutable reference to it.
    pub fn sub_element(&mut self, tag: impl Into<String>) -> &mut Element {
        self.push(Element::new(tag))
    }

    /// Appends an already-built element and returns a mutable reference to it.
    pub fn push(&mut self, element: Element) -> &mut Element {
        self.children.push(Node::Element(element));
        match self.children.last_mut() {
            Some(Node::Element(el)) => el,
            _ => unreachable!("an element was just pushed"),
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push_raw(&mut self, markup: impl Into<String>) -> &mut Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    /// Depth-first search over descendants (not including `self`).
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_descendants(self, &mut found);
        found
    }

    /// All descendants carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// All descendants with the given tag name.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(el) => out.push_str(&el.text_content()),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serializes the element into `out`.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn collect_descendants<'a>(el: &'a Element, found: &mut Vec<&'a Element>) {
    for child in el.child_elements() {
        found.push(child);
        collect_descendants(child, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let img = Element::new("img").with_attr("src", "x.svg");
        assert_eq!(img.to_html(), r#"<img src="x.svg">"#);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut p = Element::new("p");
        p.push_text("<script>alert('x')</script>");
        let html = p.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_attribute_quotes_are_escaped() {
        let el = Element::new("button").with_attr("title", r#"say "hi""#);
        let html = el.to_html();
        assert!(!html.contains(r#""hi""#));
        assert!(html.starts_with(r#"<button title="say "#));
    }

    #[test]
    fn test_raw_is_written_verbatim() {
        let mut div = Element::new("div");
        div.push_raw("<p>ok</p>");
        assert_eq!(div.to_html(), "<div><p>ok</p></div>");
    }

    #[test]
    fn test_set_attr_replaces_existing() {
        let mut el = Element::new("td");
        el.set_attr("class", "a").set_attr("class", "b");
        assert_eq!(el.attr("class"), Some("b"));
        assert_eq!(el.to_html(), r#"<td class="b"></td>"#);
    }

    #[test]
    fn test_has_class_matches_whole_words() {
        let el = Element::new("td").with_class("compat-table-item compat-supported");
        assert!(el.has_class("compat-supported"));
        assert!(el.has_class("compat-table-item"));
        assert!(!el.has_class("compat-table"));
    }

    #[test]
    fn test_sub_element_nesting_and_queries() {
        let mut table = Element::new("table");
        let tr = table.sub_element("tbody").sub_element("tr");
        tr.sub_element("td").set_attr("class", "x").push_text("a");
        tr.sub_element("td").push_text("b");

        assert_eq!(table.find_by_tag("td").len(), 2);
        assert_eq!(table.find_by_class("x").len(), 1);
        assert_eq!(table.text_content(), "ab");
    }
}
