//! Component boundaries.

use tessera_rend::{render_nested, AnyNode, IntoNode, Node, Rend, RenderResult, Root};

/// A dynamic slot whose template is deduplicated per session.
///
/// The first time a template fingerprint is seen it is registered under a
/// new component id and sent with its statics; later renders of the same
/// template send only the id and the dynamics.
pub struct ComponentNode {
    node: AnyNode,
}

pub fn component(node: impl IntoNode) -> ComponentNode {
    ComponentNode {
        node: node.into_node(),
    }
}

impl Node for ComponentNode {
    fn render(
        &self,
        diff: bool,
        root: &mut Root,
        rend: &mut Rend,
        buf: &mut String,
    ) -> RenderResult<()> {
        if diff {
            let nested = render_nested(root, &self.node)?;
            rend.add_component(root, nested, buf);
            return Ok(());
        }
        self.node.render(diff, root, rend, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;
    use tessera_html::{div, li, ul};
    use tessera_rend::{nodes, render_diff, render_full, to_json};

    fn row(label: &str) -> ComponentNode {
        component(li(nodes![text(label)]))
    }

    #[test]
    fn test_full_render_is_inline() {
        let tree = ul(nodes![row("a"), row("b")]);
        assert_eq!(render_full(&tree).unwrap(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_dedup_within_one_render() {
        let tree = ul(nodes![row("a"), row("b")]);
        let json = to_json(&render_diff(&mut Root::new(), &tree).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"s":["<ul>","","</ul>"],"0":{"s":["<li>","</li>"],"0":"a","c":1},"1":{"s":1,"0":"b"}}"#
        );
    }

    #[test]
    fn test_static_component() {
        let tree = component(div(Vec::new()));
        let json = to_json(&render_diff(&mut Root::new(), &tree).unwrap()).unwrap();
        assert_eq!(json, r#"{"s":["",""],"0":{"s":["<div></div>"],"c":1}}"#);
    }
}
