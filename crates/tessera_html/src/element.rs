//! Element and void element nodes.

use std::fmt::Write;

use tessera_carton::CompactString;
use tessera_rend::{AnyNode, Node, Rend, RenderResult, Root};

/// A paired element: `<tag attrs>children</tag>`.
pub struct Element {
    tag: CompactString,
    attrs: Vec<AnyNode>,
    children: Vec<AnyNode>,
}

/// A void element: `<tag attrs/>`.
pub struct Void {
    tag: CompactString,
    attrs: Vec<AnyNode>,
}

/// Build an element, moving attribute nodes into the opening tag.
///
/// Children keep their relative order within each group.
pub fn element(tag: impl Into<CompactString>, children: Vec<AnyNode>) -> Element {
    let (attrs, children): (Vec<AnyNode>, Vec<AnyNode>) = children
        .into_iter()
        .partition(|child| child.is_attribute());
    Element {
        tag: tag.into(),
        attrs,
        children,
    }
}

/// Build a void element. Non-attribute children are dropped.
pub fn void(tag: impl Into<CompactString>, children: Vec<AnyNode>) -> Void {
    Void {
        tag: tag.into(),
        attrs: children
            .into_iter()
            .filter(|child| child.is_attribute())
            .collect(),
    }
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Void {
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Node for Element {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        write!(buf, "<{}", self.tag)?;
        self.attrs.render(diff, root, rend, buf)?;
        buf.push('>');
        self.children.render(diff, root, rend, buf)?;
        write!(buf, "</{}>", self.tag)?;
        Ok(())
    }
}

impl Node for Void {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        write!(buf, "<{}", self.tag)?;
        self.attrs.render(diff, root, rend, buf)?;
        buf.push_str("/>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attr, flag, raw, text};
    use tessera_rend::{nodes, render_diff, render_full};

    #[test]
    fn test_empty_element() {
        let el = element("div", Vec::new());
        assert_eq!(render_full(&el).unwrap(), "<div></div>");
        assert_eq!(el.tag(), "div");
    }

    #[test]
    fn test_attributes_move_into_opening_tag() {
        let el = element(
            "div",
            nodes![text("hello"), attr("class", "box"), raw("<br>"), flag("hidden")],
        );
        assert_eq!(
            render_full(&el).unwrap(),
            r#"<div class="box" hidden>hello<br></div>"#
        );
    }

    #[test]
    fn test_nested_elements() {
        let el = element(
            "ul",
            nodes![element("li", nodes![text("a")]), element("li", nodes![text("b")])],
        );
        assert_eq!(render_full(&el).unwrap(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_void_keeps_only_attributes() {
        let el = void("input", nodes![attr("type", "text"), text("ignored")]);
        assert_eq!(render_full(&el).unwrap(), r#"<input type="text"/>"#);
        assert_eq!(void("br", Vec::new()).tag(), "br");
    }

    #[test]
    fn test_static_element_diff_is_one_fragment() {
        let el = element("p", nodes![attr("id", "x"), text("hi")]);
        let rend = render_diff(&mut Root::new(), &el).unwrap();
        assert_eq!(rend.statics(), [r#"<p id="x">hi</p>"#]);
        assert!(rend.is_static());
    }
}
