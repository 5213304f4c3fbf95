//! Plain dynamic boundaries.

use std::fmt::Display;

use tessera_rend::{render_nested, AnyNode, IntoNode, Node, Rend, RenderResult, Root};

/// Marks its subtree as a dynamic slot.
///
/// In diff mode the subtree renders into its own nested accumulator and
/// becomes one dynamic value of the parent; in full mode it renders inline.
pub struct WrapNode {
    node: AnyNode,
}

/// Wraps every child in its own slot.
pub struct Group {
    children: Vec<WrapNode>,
}

pub fn wrap(node: impl IntoNode) -> WrapNode {
    WrapNode {
        node: node.into_node(),
    }
}

/// Escaped text in its own slot.
pub fn text(value: impl Display) -> WrapNode {
    wrap(tessera_html::text(value.to_string()))
}

/// One slot per child, in order.
pub fn group(children: Vec<AnyNode>) -> Group {
    Group {
        children: children.into_iter().map(wrap).collect(),
    }
}

/// Build a subtree from a callback and wrap it.
pub fn embed<N: IntoNode>(build: impl FnOnce() -> N) -> WrapNode {
    wrap(build())
}

/// Wrap the subtree built from `value`, or render nothing when it is absent.
pub fn if_some<T, N: IntoNode>(value: Option<T>, build: impl FnOnce(T) -> N) -> Option<WrapNode> {
    value.map(|value| wrap(build(value)))
}

impl Node for WrapNode {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        if diff {
            let nested = render_nested(root, &self.node)?;
            rend.add_dynamic(nested, buf);
            return Ok(());
        }
        self.node.render(diff, root, rend, buf)
    }

    fn is_attribute(&self) -> bool {
        self.node.is_attribute()
    }
}

impl Node for Group {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        self.children.render(diff, root, rend, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_html::{attr, div, raw, span};
    use tessera_rend::{nodes, render_diff, render_full, to_json};

    fn diff(node: &dyn Node) -> String {
        to_json(&render_diff(&mut Root::new(), node).unwrap()).unwrap()
    }

    #[test]
    fn test_wrap_full_is_inline() {
        let tree = div(nodes![wrap(raw("<b>x</b>"))]);
        assert_eq!(render_full(&tree).unwrap(), "<div><b>x</b></div>");
    }

    #[test]
    fn test_wrap_diff_splits() {
        let tree = div(nodes![span(nodes![text("hi")])]);
        assert_eq!(diff(&tree), r#"{"s":["<div><span>","</span></div>"],"0":"hi"}"#);
    }

    #[test]
    fn test_text_escapes_and_formats() {
        assert_eq!(render_full(&text("<3")).unwrap(), "&lt;3");
        assert_eq!(render_full(&text(42)).unwrap(), "42");
    }

    #[test]
    fn test_wrapped_attribute_stays_in_opening_tag() {
        let tree = div(nodes![raw("x"), wrap(attr("class", "on"))]);
        assert_eq!(render_full(&tree).unwrap(), r#"<div class="on">x</div>"#);
        assert_eq!(diff(&tree), r#"{"s":["<div",">x</div>"],"0":" class=\"on\""}"#);
    }

    #[test]
    fn test_group() {
        let tree = div(nodes![group(nodes![raw("<p>1</p>"), raw("<p>2</p>")])]);
        assert_eq!(render_full(&tree).unwrap(), "<div><p>1</p><p>2</p></div>");
        assert_eq!(
            diff(&tree),
            r#"{"s":["<div>","","</div>"],"0":"<p>1</p>","1":"<p>2</p>"}"#
        );
    }

    #[test]
    fn test_embed() {
        let tree = embed(|| raw("<i>e</i>"));
        assert_eq!(render_full(&tree).unwrap(), "<i>e</i>");
        assert_eq!(diff(&tree), r#"{"s":["",""],"0":"<i>e</i>"}"#);
    }

    #[test]
    fn test_if_some() {
        let present = if_some(Some(3), |n| text(n * 2));
        assert_eq!(render_full(&present).unwrap(), "6");

        let absent = if_some(None::<u32>, text);
        assert_eq!(render_full(&absent).unwrap(), "");
        assert_eq!(diff(&absent), r#"{"s":[""]}"#);
    }
}
